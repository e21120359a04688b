//! Implementation of the `gantry launch` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::AppBootstrapper;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ApiCredential, App, Config, LaunchOptions};
use crate::domain::ports::{LaunchHook, MapServices, NullHostLauncher};
use crate::infrastructure::maps::GlobalMapServices;
use crate::plugins::{self, DeepLinkPlugin};

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Launch option key/value pairs forwarded to the host launcher
    #[arg(short, long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,
}

/// Parse a KEY=VALUE launch option pair.
fn parse_option(raw: &str) -> Result<(String, String), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("Invalid launch option '{raw}': expected KEY=VALUE"));
    };
    if key.is_empty() {
        return Err(format!("Invalid launch option '{raw}': key cannot be empty"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Debug, Serialize)]
pub struct LaunchOutput {
    pub verdict: bool,
    pub app_id: Uuid,
    pub reason: String,
    pub plugins_attached: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link_recognized: Option<bool>,
    pub options: LaunchOptions,
}

impl CommandOutput for LaunchOutput {
    fn to_human(&self) -> String {
        let verdict_line = if self.verdict {
            format!("{} launch completed", console::style("✓").green().bold())
        } else {
            format!("{} host declined the launch", console::style("✗").red().bold())
        };

        let plugins = if self.plugins_attached.is_empty() {
            "(none)".to_string()
        } else {
            self.plugins_attached.join(", ")
        };

        let mut lines = vec![verdict_line];
        lines.push(format!("  app:     {}", self.app_id));
        lines.push(format!("  reason:  {}", self.reason));
        lines.push(format!("  plugins: {plugins}"));
        if let Some(recognized) = self.deep_link_recognized {
            lines.push(format!(
                "  deep link {} by the '{}' plugin",
                if recognized { "recognized" } else { "not recognized" },
                DeepLinkPlugin::NAME
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run the launch sequence once and report the host verdict.
pub fn execute(args: LaunchArgs, config: &Config, json_mode: bool) -> Result<bool> {
    let credential = ApiCredential::new(config.maps.api_key.clone()).context(
        "maps.api_key is missing or invalid; set it in gantry.yaml or GANTRY_MAPS__API_KEY",
    )?;

    let map_services: Arc<dyn MapServices> = Arc::new(GlobalMapServices::new());
    let registrar =
        plugins::builtin_registrar(Arc::clone(&map_services), &config.plugins.disabled);
    let bootstrapper = AppBootstrapper::new(
        credential,
        map_services,
        registrar,
        Arc::new(NullHostLauncher),
    );

    let mut app = App::new();
    let options: LaunchOptions = args.options.into_iter().collect();

    let verdict = bootstrapper.on_launch(&mut app, &options)?;

    // Only meaningful when a URL was supplied and the routing plugin ran.
    let deep_link_recognized = options
        .get(LaunchOptions::KEY_URL)
        .filter(|_| app.has_plugin(DeepLinkPlugin::NAME))
        .map(|url| DeepLinkPlugin::default().matches(url));

    let output_data = LaunchOutput {
        verdict,
        app_id: app.id,
        reason: options.reason().to_string(),
        plugins_attached: app.attachments.iter().map(|a| a.plugin.clone()).collect(),
        deep_link_recognized,
        options,
    };

    output(&output_data, json_mode);
    Ok(verdict)
}
