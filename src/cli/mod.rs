//! Command-line interface for the gantry reference binary.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::logging::SecretScrubber;

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "gantry")]
#[command(about = "Gantry - application launch sequence toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from a specific file instead of the standard locations
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the launch sequence against the built-in plugin set
    Launch(commands::launch::LaunchArgs),
    /// List registered plugins and their state
    Plugins,
    /// Inspect or validate the resolved configuration
    Config(commands::config::ConfigArgs),
    /// Write the default configuration template
    Init(commands::init::InitArgs),
}

/// Print an error in the requested output mode.
///
/// The message is scrubbed before printing: error chains can embed raw
/// config values, and those must not reach the terminal unredacted.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": message,
        });
        eprintln!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("{} {message}", console::style("error:").red().bold());
    }
}
