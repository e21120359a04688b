pub mod app;
pub mod config;
pub mod credential;
pub mod launch_options;
pub mod plugin;

pub use app::{App, PluginAttachment};
pub use config::{Config, LoggingConfig, MapsConfig, PluginsConfig};
pub use credential::ApiCredential;
pub use launch_options::{LaunchOptions, LaunchReason};
pub use plugin::{PluginCapability, PluginManifest};
