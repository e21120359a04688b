//! Gantry setup and initialization infrastructure
//!
//! Handles project initialization: writing the default configuration
//! template that `gantry launch` and friends read back through the
//! configuration loader.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Standard configuration file name.
pub const CONFIG_FILE_NAME: &str = "gantry.yaml";

/// Local override file name, merged on top of the standard file.
pub const LOCAL_CONFIG_FILE_NAME: &str = "gantry.local.yaml";

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry Configuration
# Override settings by editing this file or setting environment variables
# with GANTRY_ prefix (double underscore separates nesting)
#
# Example environment variables:
#   export GANTRY_MAPS__API_KEY=your-key-here
#   export GANTRY_LOGGING__LEVEL=debug
#   export GANTRY_LOGGING__FORMAT=pretty

# Map services configuration
maps:
  # API credential for the map services backend.
  # Keep real keys out of version control: prefer the GANTRY_MAPS__API_KEY
  # environment variable or a gitignored gantry.local.yaml next to this file.
  api_key: ""

# Plugin registration
plugins:
  # Plugin names to skip during the launch sequence (see `gantry plugins`)
  disabled: []

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"

  # Log format: json, pretty
  format: "json"

  # Directory for rotated log files; logs go to stderr only when unset
  # directory: ".gantry/logs"
"#;

/// Path of the standard configuration file inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Write the default configuration template into `dir`.
///
/// Returns the written path, or `None` when the file already exists and
/// `force` is not set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<Option<PathBuf>> {
    let path = config_path(dir);

    if path.exists() && !force {
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(Some(path))
}
