//! Application instance model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plugin::{PluginCapability, PluginManifest};

/// A capability attached to an [`App`] during the launch sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAttachment {
    /// Name of the plugin that attached.
    pub plugin: String,
    /// Capability the plugin contributed.
    pub capability: PluginCapability,
    /// When the attachment happened.
    pub attached_at: DateTime<Utc>,
}

/// The application instance handed through the launch sequence.
///
/// Created by the host before launch and mutated by plugins as they attach.
/// The attachment list doubles as an audit trail: its order is the order in
/// which plugins ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub attachments: Vec<PluginAttachment>,
}

impl App {
    /// Create a fresh application instance with no attachments.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            attachments: Vec::new(),
        }
    }

    /// Record that a plugin attached its capability to this instance.
    pub fn record_attachment(&mut self, manifest: &PluginManifest) {
        self.attachments.push(PluginAttachment {
            plugin: manifest.name.clone(),
            capability: manifest.capability,
            attached_at: Utc::now(),
        });
    }

    /// Whether a plugin with the given name has attached.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.attachments.iter().any(|a| a.plugin == name)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(name: &str, capability: PluginCapability) -> PluginManifest {
        PluginManifest::new(name, capability)
    }

    #[test]
    fn test_app_new_has_unique_id() {
        let a = App::new();
        let b = App::new();
        assert_ne!(a.id, b.id);
        assert!(a.attachments.is_empty());
    }

    #[test]
    fn test_record_attachment_preserves_order() {
        let mut app = App::new();
        app.record_attachment(&manifest("maps", PluginCapability::Maps));
        app.record_attachment(&manifest("camera", PluginCapability::Camera));

        let names: Vec<&str> = app.attachments.iter().map(|a| a.plugin.as_str()).collect();
        assert_eq!(names, vec!["maps", "camera"]);
        assert_eq!(app.attachments[0].capability, PluginCapability::Maps);
    }

    #[test]
    fn test_has_plugin() {
        let mut app = App::new();
        assert!(!app.has_plugin("maps"));

        app.record_attachment(&manifest("maps", PluginCapability::Maps));
        assert!(app.has_plugin("maps"));
        assert!(!app.has_plugin("camera"));
    }
}
