//! CLI command implementations.

pub mod config;
pub mod init;
pub mod launch;
pub mod plugins;
