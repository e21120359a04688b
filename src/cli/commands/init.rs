//! Implementation of the `gantry init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::setup;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
    pub created: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.created {
            format!("{}\n\nWrote {}", self.message, self.config_path.display())
        } else {
            self.message.clone()
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let output_data = match setup::write_default_config(&target_path, args.force)? {
        Some(path) => InitOutput {
            success: true,
            message: "Configuration template written. Set maps.api_key before launching."
                .to_string(),
            config_path: path,
            created: true,
        },
        None => InitOutput {
            success: false,
            message: "Configuration already exists. Use --force to overwrite.".to_string(),
            config_path: setup::config_path(&target_path),
            created: false,
        },
    };

    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_writes_then_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();

        let args = InitArgs {
            force: false,
            path: dir.path().to_path_buf(),
        };
        execute(args, true).unwrap();
        assert!(setup::config_path(dir.path()).exists());

        // Second run without --force leaves the file in place.
        let marker = "maps:\n  api_key: \"sentinel\"\n";
        std::fs::write(setup::config_path(dir.path()), marker).unwrap();
        let args = InitArgs {
            force: false,
            path: dir.path().to_path_buf(),
        };
        execute(args, true).unwrap();
        let content = std::fs::read_to_string(setup::config_path(dir.path())).unwrap();
        assert!(content.contains("sentinel"));

        // --force restores the template.
        let args = InitArgs {
            force: true,
            path: dir.path().to_path_buf(),
        };
        execute(args, true).unwrap();
        let content = std::fs::read_to_string(setup::config_path(dir.path())).unwrap();
        assert!(content.contains("# Gantry Configuration"));
    }
}
