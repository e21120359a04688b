//! Host launcher port and its null implementation.

use crate::domain::errors::LaunchResult;
use crate::domain::models::{App, LaunchOptions};

/// Port for the host framework's default launch handling.
///
/// This is the final step of the launch sequence: after initialization the
/// bootstrapper delegates here and returns the host's verdict verbatim.
pub trait HostLauncher: Send + Sync {
    /// Run the host's default launch handling and return its verdict.
    fn resume_launch(&self, app: &App, options: &LaunchOptions) -> LaunchResult<bool>;
}

/// Null object implementation of [`HostLauncher`].
///
/// Accepts every launch and reports success, standing in for a real host
/// in the reference binary, benches, and tests that only exercise the
/// initialization steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHostLauncher;

impl NullHostLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl HostLauncher for NullHostLauncher {
    fn resume_launch(&self, _app: &App, _options: &LaunchOptions) -> LaunchResult<bool> {
        Ok(true)
    }
}
