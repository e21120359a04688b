//! Implementation of the `gantry plugins` command.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, PluginManifest};
use crate::infrastructure::maps::GlobalMapServices;
use crate::plugins;

#[derive(Debug, Serialize)]
pub struct PluginsOutput {
    pub plugins: Vec<PluginRow>,
}

#[derive(Debug, Serialize)]
pub struct PluginRow {
    #[serde(flatten)]
    pub manifest: PluginManifest,
    pub enabled: bool,
}

impl CommandOutput for PluginsOutput {
    fn to_human(&self) -> String {
        let rows: Vec<(PluginManifest, bool)> = self
            .plugins
            .iter()
            .map(|row| (row.manifest.clone(), row.enabled))
            .collect();
        TableFormatter::new().format_plugins(&rows)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// List the built-in plugin set with its configured state.
///
/// Listing never initializes map services; manifests are produced by
/// constructing each plugin without attaching it.
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let registrar = plugins::builtin_registrar(
        Arc::new(GlobalMapServices::new()),
        &config.plugins.disabled,
    );

    let manifests = registrar.manifests()?;
    let plugins = manifests
        .into_iter()
        .map(|manifest| {
            let enabled = !registrar.is_disabled(&manifest.name);
            PluginRow { manifest, enabled }
        })
        .collect();

    output(&PluginsOutput { plugins }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PluginCapability;

    #[test]
    fn test_plugins_output_json_includes_state() {
        let out = PluginsOutput {
            plugins: vec![PluginRow {
                manifest: PluginManifest::new("maps", PluginCapability::Maps),
                enabled: false,
            }],
        };

        let value = out.to_json();
        assert_eq!(value["plugins"][0]["name"], "maps");
        assert_eq!(value["plugins"][0]["capability"], "maps");
        assert_eq!(value["plugins"][0]["enabled"], false);
    }

    #[test]
    fn test_plugins_output_human_is_a_table() {
        let out = PluginsOutput {
            plugins: vec![PluginRow {
                manifest: PluginManifest::new("deep-link", PluginCapability::DeepLinks),
                enabled: true,
            }],
        };

        let human = out.to_human();
        assert!(human.contains("deep-link"));
        assert!(human.contains("Capability"));
    }
}
