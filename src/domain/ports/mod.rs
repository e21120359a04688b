//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces the launch sequence is wired
//! through:
//! - `LaunchHook`: entry point the host calls at launch
//! - `MapServices`: credentialed map services backend
//! - `HostLauncher`: the host's default launch handling
//! - `Plugin` / `PluginFactory`: modular capabilities and their constructors
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod host_launcher;
pub mod launch_hook;
pub mod map_services;
pub mod plugin;

pub use host_launcher::{HostLauncher, NullHostLauncher};
pub use launch_hook::LaunchHook;
pub use map_services::MapServices;
pub use plugin::{Plugin, PluginFactory};
