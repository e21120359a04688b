//! Domain layer for the gantry launch sequence
//!
//! This module contains the launch models, port traits, and error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{LaunchError, LaunchResult};
