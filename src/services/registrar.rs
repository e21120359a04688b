//! Plugin registrar service.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{LaunchError, LaunchResult};
use crate::domain::models::{App, PluginManifest};
use crate::domain::ports::PluginFactory;

/// Registry of plugin factories, attached to the application in
/// registration order during the launch sequence.
///
/// Registration is build-time wiring; nothing runs until
/// [`attach_all`](Self::attach_all). Each call constructs every plugin
/// fresh through its factory, validates its manifest, rejects duplicate
/// names, and skips names listed as disabled. Duplicates are checked
/// before the disabled filter so a conflicting registration cannot hide
/// behind configuration.
pub struct PluginRegistrar {
    factories: Vec<PluginFactory>,
    disabled: Vec<String>,
}

impl PluginRegistrar {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            disabled: Vec::new(),
        }
    }

    /// Add a plugin factory. Order of registration is order of attachment.
    #[must_use]
    pub fn register(mut self, factory: PluginFactory) -> Self {
        self.factories.push(factory);
        self
    }

    /// Set the plugin names to skip during attachment.
    #[must_use]
    pub fn with_disabled<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled = names.into_iter().map(Into::into).collect();
        self
    }

    /// Number of registered factories, disabled ones included.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Whether a plugin name is configured to be skipped.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|d| d == name)
    }

    /// Manifests for every registered plugin, in registration order.
    ///
    /// Constructs each plugin through its factory, so a factory failure
    /// surfaces here the same way it would during attachment.
    pub fn manifests(&self) -> LaunchResult<Vec<PluginManifest>> {
        self.factories
            .iter()
            .map(|factory| factory().map(|plugin| plugin.manifest().clone()))
            .collect()
    }

    /// Attach every enabled plugin to the application instance.
    ///
    /// Returns the number of plugins attached. Stops at the first failure,
    /// leaving earlier attachments in place on the `App`.
    #[instrument(skip(self, app), fields(app_id = %app.id))]
    pub fn attach_all(&self, app: &mut App) -> LaunchResult<usize> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut attached = 0;

        for factory in &self.factories {
            let plugin = factory()?;
            let manifest = plugin.manifest().clone();

            manifest
                .validate()
                .map_err(|reason| LaunchError::PluginAttach {
                    plugin: manifest.name.clone(),
                    reason,
                })?;

            if !seen.insert(manifest.name.clone()) {
                return Err(LaunchError::DuplicatePlugin(manifest.name.clone()));
            }

            if self.is_disabled(&manifest.name) {
                debug!(plugin = %manifest.name, "Skipping disabled plugin");
                continue;
            }

            plugin.attach(app)?;
            app.record_attachment(&manifest);
            debug!(
                plugin = %manifest.name,
                capability = %manifest.capability,
                "Plugin attached"
            );
            attached += 1;
        }

        for name in &self.disabled {
            if !seen.contains(name) {
                warn!(plugin = %name, "Disabled plugin is not registered");
            }
        }

        info!(attached, registered = self.factories.len(), "Plugin attachment complete");
        Ok(attached)
    }
}

impl Default for PluginRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PluginCapability;
    use crate::domain::ports::Plugin;

    struct StubPlugin {
        manifest: PluginManifest,
        fail_with: Option<LaunchError>,
    }

    impl Plugin for StubPlugin {
        fn manifest(&self) -> &PluginManifest {
            &self.manifest
        }

        fn attach(&self, _app: &mut App) -> LaunchResult<()> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn stub(name: &str) -> PluginFactory {
        let name = name.to_string();
        Box::new(move || {
            Ok(Box::new(StubPlugin {
                manifest: PluginManifest::new(name.clone(), PluginCapability::Custom),
                fail_with: None,
            }) as Box<dyn Plugin>)
        })
    }

    fn failing_stub(name: &str, err: LaunchError) -> PluginFactory {
        let name = name.to_string();
        Box::new(move || {
            Ok(Box::new(StubPlugin {
                manifest: PluginManifest::new(name.clone(), PluginCapability::Custom),
                fail_with: Some(err.clone()),
            }) as Box<dyn Plugin>)
        })
    }

    #[test]
    fn test_attach_all_in_registration_order() {
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(stub("camera"))
            .register(stub("deep-link"));
        let mut app = App::new();

        let attached = registrar.attach_all(&mut app).unwrap();

        assert_eq!(attached, 3);
        let names: Vec<&str> = app.attachments.iter().map(|a| a.plugin.as_str()).collect();
        assert_eq!(names, vec!["maps", "camera", "deep-link"]);
    }

    #[test]
    fn test_disabled_plugin_is_skipped() {
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(stub("camera"))
            .with_disabled(["camera"]);
        let mut app = App::new();

        let attached = registrar.attach_all(&mut app).unwrap();

        assert_eq!(attached, 1);
        assert!(app.has_plugin("maps"));
        assert!(!app.has_plugin("camera"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(stub("maps"));
        let mut app = App::new();

        let err = registrar.attach_all(&mut app).unwrap_err();
        assert_eq!(err, LaunchError::DuplicatePlugin("maps".to_string()));
    }

    #[test]
    fn test_duplicate_detected_even_when_disabled() {
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(stub("maps"))
            .with_disabled(["maps"]);
        let mut app = App::new();

        let err = registrar.attach_all(&mut app).unwrap_err();
        assert_eq!(err, LaunchError::DuplicatePlugin("maps".to_string()));
    }

    #[test]
    fn test_invalid_manifest_rejected() {
        let registrar = PluginRegistrar::new().register(stub("Not A Valid Name"));
        let mut app = App::new();

        let err = registrar.attach_all(&mut app).unwrap_err();
        assert!(matches!(err, LaunchError::PluginAttach { .. }));
    }

    #[test]
    fn test_attach_failure_stops_sequence() {
        let failure = LaunchError::PluginAttach {
            plugin: "camera".to_string(),
            reason: "sensor unavailable".to_string(),
        };
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(failing_stub("camera", failure.clone()))
            .register(stub("deep-link"));
        let mut app = App::new();

        let err = registrar.attach_all(&mut app).unwrap_err();

        assert_eq!(err, failure);
        assert!(app.has_plugin("maps"));
        assert!(!app.has_plugin("deep-link"));
    }

    #[test]
    fn test_manifests_lists_disabled_plugins_too() {
        let registrar = PluginRegistrar::new()
            .register(stub("maps"))
            .register(stub("camera"))
            .with_disabled(["camera"]);

        let manifests = registrar.manifests().unwrap();

        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[1].name, "camera");
        assert!(registrar.is_disabled("camera"));
        assert!(!registrar.is_disabled("maps"));
    }

    #[test]
    fn test_empty_registrar() {
        let registrar = PluginRegistrar::new();
        let mut app = App::new();

        assert!(registrar.is_empty());
        assert_eq!(registrar.attach_all(&mut app).unwrap(), 0);
        assert!(app.attachments.is_empty());
    }
}
