//! Gantry CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use gantry::cli::{commands, handle_error, Cli, Commands};
use gantry::domain::models::Config;
use gantry::infrastructure::config::ConfigLoader;
use gantry::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            handle_error(&err, json_mode);
            std::process::exit(1);
        }
    }
}

/// Dispatch the parsed command, returning the process verdict.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Init(args) => {
            // Init runs before any configuration exists.
            commands::init::execute(args, cli.json)?;
            Ok(true)
        }
        Commands::Launch(args) => {
            let (config, _logging) = init_runtime(cli.config.as_deref())?;
            commands::launch::execute(args, &config, cli.json)
        }
        Commands::Plugins => {
            let (config, _logging) = init_runtime(cli.config.as_deref())?;
            commands::plugins::execute(&config, cli.json)?;
            Ok(true)
        }
        Commands::Config(args) => {
            // Inspection must work on a configuration too broken to pass
            // validation or bring up logging.
            let config = match cli.config.as_deref() {
                Some(path) => ConfigLoader::extract_from_file(path),
                None => ConfigLoader::extract(),
            }?;
            commands::config::execute(args, &config, cli.json)
        }
    }
}

/// Load configuration and bring up the tracing stack.
///
/// The returned guard must stay alive for the duration of the command so
/// buffered file output is flushed on drop.
fn init_runtime(config_path: Option<&Path>) -> Result<(Config, LoggerImpl)> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }?;

    let logger = LoggerImpl::init(&LogConfig::from_settings(&config.logging))
        .context("Failed to initialize logging")?;

    Ok((config, logger))
}
