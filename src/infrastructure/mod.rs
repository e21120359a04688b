//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Process-global map services backend
//! - Configuration management
//! - Logging infrastructure
//! - Project setup (config template)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod maps;
pub mod setup;

pub use maps::GlobalMapServices;
