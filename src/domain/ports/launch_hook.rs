//! Launch hook port.

use crate::domain::errors::LaunchResult;
use crate::domain::models::{App, LaunchOptions};

/// Port through which the host hands control to the application at launch.
///
/// The host calls [`on_launch`](Self::on_launch) exactly once per process
/// under normal operation; implementations must nevertheless stay correct
/// if the host calls again (see
/// [`AppBootstrapper`](crate::application::AppBootstrapper)).
///
/// The returned `bool` is the host's own launch verdict and must travel
/// back to it without interpretation.
pub trait LaunchHook: Send + Sync {
    /// Run launch-time initialization, then delegate to the host's default
    /// launch handling and return its verdict.
    fn on_launch(&self, app: &mut App, options: &LaunchOptions) -> LaunchResult<bool>;
}
