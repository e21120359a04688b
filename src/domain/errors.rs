//! Domain errors for the gantry launch sequence.

use thiserror::Error;

/// Domain-level errors that can occur during application bootstrap.
///
/// Every variant originates in a port implementation (map services, a
/// plugin, the host launcher); the launch sequence itself propagates them
/// unchanged. `PartialEq` is derived so callers can assert that propagation
/// preserved the exact error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    #[error("Invalid map services credential: {0}")]
    InvalidCredential(String),

    #[error("Map services already initialized with a different credential (existing key {existing})")]
    CredentialConflict { existing: String },

    #[error("Duplicate plugin registration: {0}")]
    DuplicatePlugin(String),

    #[error("Plugin '{plugin}' failed to attach: {reason}")]
    PluginAttach { plugin: String, reason: String },

    #[error("Host launch failed: {message}")]
    HostLaunch { message: String },
}

pub type LaunchResult<T> = Result<T, LaunchError>;
