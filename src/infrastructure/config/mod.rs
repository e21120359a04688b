//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (gantry.yaml plus local overrides)
//! - Environment variable overrides (GANTRY_* prefix)
//! - Configuration validation
//! - Type-safe config structs

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
