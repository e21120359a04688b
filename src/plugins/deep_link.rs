//! Deep link plugin.

use crate::domain::errors::{LaunchError, LaunchResult};
use crate::domain::models::{App, PluginCapability, PluginManifest};
use crate::domain::ports::Plugin;

/// URL schemes handled when no explicit set is configured.
pub const DEFAULT_SCHEMES: &[&str] = &["gantry", "geo"];

/// Deep link routing for a configured set of URL schemes.
///
/// Scheme matching follows RFC 3986: an ASCII letter followed by letters,
/// digits, `+`, `-`, or `.`. Comparison against incoming URLs is
/// case-insensitive on the scheme part.
#[derive(Debug)]
pub struct DeepLinkPlugin {
    manifest: PluginManifest,
    schemes: Vec<String>,
}

impl DeepLinkPlugin {
    pub const NAME: &'static str = "deep-link";

    /// Build a plugin handling the given schemes.
    ///
    /// Fails with [`LaunchError::PluginAttach`] if any scheme is malformed,
    /// so a bad configuration surfaces during the launch sequence rather
    /// than silently never matching.
    pub fn new<I, S>(schemes: I) -> LaunchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schemes: Vec<String> = schemes.into_iter().map(Into::into).collect();
        for scheme in &schemes {
            validate_scheme(scheme).map_err(|reason| LaunchError::PluginAttach {
                plugin: Self::NAME.to_string(),
                reason,
            })?;
        }
        Ok(Self {
            manifest: manifest(),
            schemes,
        })
    }

    /// Whether a URL's scheme is one this plugin routes.
    pub fn matches(&self, url: &str) -> bool {
        let Some((scheme, _)) = url.split_once(':') else {
            return false;
        };
        let scheme = scheme.to_ascii_lowercase();
        self.schemes.iter().any(|s| *s == scheme)
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }
}

impl Default for DeepLinkPlugin {
    fn default() -> Self {
        // DEFAULT_SCHEMES are known-valid constants.
        Self {
            manifest: manifest(),
            schemes: DEFAULT_SCHEMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Plugin for DeepLinkPlugin {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn attach(&self, _app: &mut App) -> LaunchResult<()> {
        Ok(())
    }
}

fn manifest() -> PluginManifest {
    PluginManifest::new(DeepLinkPlugin::NAME, PluginCapability::DeepLinks)
        .with_description("Deep link URL routing")
}

/// Check a URL scheme against RFC 3986 syntax, lowercase only.
fn validate_scheme(scheme: &str) -> Result<(), String> {
    let mut chars = scheme.chars();
    match chars.next() {
        None => return Err("URL scheme cannot be empty".to_string()),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(format!(
                "URL scheme '{scheme}' must start with a lowercase letter"
            ));
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
    {
        return Err(format!(
            "URL scheme '{scheme}' contains characters outside [a-z0-9+.-]"
        ));
    }
    Ok(())
}
