//! Camera plugin.

use crate::domain::errors::LaunchResult;
use crate::domain::models::{App, PluginCapability, PluginManifest};
use crate::domain::ports::Plugin;

/// Camera capture capability.
///
/// Attachment has no prerequisites; the host mediates actual sensor
/// access when the capability is first used.
pub struct CameraPlugin {
    manifest: PluginManifest,
}

impl CameraPlugin {
    pub const NAME: &'static str = "camera";

    pub fn new() -> Self {
        Self {
            manifest: PluginManifest::new(Self::NAME, PluginCapability::Camera)
                .with_description("Camera capture for in-app photos"),
        }
    }
}

impl Default for CameraPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for CameraPlugin {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn attach(&self, _app: &mut App) -> LaunchResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_attaches_unconditionally() {
        let plugin = CameraPlugin::new();
        let mut app = App::new();

        assert!(plugin.attach(&mut app).is_ok());
        assert_eq!(plugin.manifest().name, "camera");
        assert!(plugin.manifest().validate().is_ok());
    }
}
