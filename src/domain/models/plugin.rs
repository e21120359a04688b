//! Plugin identity and capability metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted plugin name length.
pub const MAX_NAME_LEN: usize = 64;

/// The host capability a plugin contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginCapability {
    Maps,
    Camera,
    Notifications,
    DeepLinks,
    Custom,
}

impl PluginCapability {
    pub fn as_str(&self) -> &str {
        match self {
            PluginCapability::Maps => "maps",
            PluginCapability::Camera => "camera",
            PluginCapability::Notifications => "notifications",
            PluginCapability::DeepLinks => "deep_links",
            PluginCapability::Custom => "custom",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "maps" => Some(PluginCapability::Maps),
            "camera" => Some(PluginCapability::Camera),
            "notifications" => Some(PluginCapability::Notifications),
            "deep_links" => Some(PluginCapability::DeepLinks),
            "custom" => Some(PluginCapability::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for PluginCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive metadata identifying a plugin to the registrar.
///
/// The name is the registrar's uniqueness key, so it must survive a round
/// trip through config files and CLI output: lowercase alphanumeric plus
/// hyphens, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub capability: PluginCapability,
}

impl PluginManifest {
    pub fn new(name: impl Into<String>, capability: PluginCapability) -> Self {
        Self {
            name: name.into(),
            version: "0.1.0".to_string(),
            description: String::new(),
            capability,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check a plugin name against the registrar's naming rules.
    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Plugin name cannot be empty".to_string());
        }
        if name.len() > MAX_NAME_LEN {
            return Err(format!(
                "Plugin name cannot exceed {MAX_NAME_LEN} characters"
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(
                "Plugin name must be lowercase alphanumeric with hyphens".to_string(),
            );
        }
        Ok(())
    }

    /// Validate the manifest fields.
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_name(&self.name)?;
        if self.version.trim().is_empty() {
            return Err("Plugin version cannot be empty".to_string());
        }
        Ok(())
    }
}
