//! Plugin port.

use crate::domain::errors::LaunchResult;
use crate::domain::models::{App, PluginManifest};

/// Port for a modular capability that attaches to the application at
/// launch.
///
/// Plugins are constructed fresh for each launch by their registered
/// [`PluginFactory`]; attachment order is the registrar's registration
/// order.
pub trait Plugin: Send + Sync {
    /// Identity and capability metadata for this plugin.
    fn manifest(&self) -> &PluginManifest;

    /// Attach this plugin's capability to the application instance.
    fn attach(&self, app: &mut App) -> LaunchResult<()>;
}

/// Constructor registered with the
/// [`PluginRegistrar`](crate::services::PluginRegistrar).
///
/// Factories run at attach time so a plugin that cannot be built (bad
/// configuration, missing prerequisite) surfaces as a launch error rather
/// than a panic at registration.
pub type PluginFactory = Box<dyn Fn() -> LaunchResult<Box<dyn Plugin>> + Send + Sync>;
