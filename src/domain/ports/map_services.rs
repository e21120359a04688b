//! Map services port.

use crate::domain::errors::LaunchResult;
use crate::domain::models::ApiCredential;

/// Port for the map services backend that must be credentialed before any
/// map capability is usable.
///
/// Initialization happens once per process; implementations decide how a
/// repeat call behaves (the process-global implementation accepts a repeat
/// with the same credential and rejects a different one).
pub trait MapServices: Send + Sync {
    /// Configure the backend with the given credential.
    fn initialize(&self, credential: &ApiCredential) -> LaunchResult<()>;

    /// Whether the backend has been configured.
    fn is_initialized(&self) -> bool;
}
