//! Launch options passed from the host to the launch sequence.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the host launched the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchReason {
    /// Plain start with no triggering payload.
    Cold,
    /// Launched to handle a deep link URL.
    DeepLink,
    /// Launched by an incoming notification.
    Notification,
}

impl LaunchReason {
    pub fn as_str(&self) -> &str {
        match self {
            LaunchReason::Cold => "cold",
            LaunchReason::DeepLink => "deep_link",
            LaunchReason::Notification => "notification",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cold" => Some(LaunchReason::Cold),
            "deep_link" => Some(LaunchReason::DeepLink),
            "notification" => Some(LaunchReason::Notification),
            _ => None,
        }
    }
}

impl fmt::Display for LaunchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque key/value payload describing the launch context.
///
/// The bootstrapper forwards these to the host launcher byte-for-byte; only
/// [`reason`](Self::reason) inspects the two well-known keys. `BTreeMap`
/// keeps iteration order deterministic for logs and serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl LaunchOptions {
    /// Well-known key carrying a deep link URL.
    pub const KEY_URL: &'static str = "url";
    /// Well-known key carrying a notification payload.
    pub const KEY_NOTIFICATION: &'static str = "notification";

    /// Empty options, as for a cold start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair, replacing any existing value for the key.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Classify the launch from the well-known keys.
    ///
    /// A deep link takes precedence when both keys are present.
    pub fn reason(&self) -> LaunchReason {
        if self.values.contains_key(Self::KEY_URL) {
            LaunchReason::DeepLink
        } else if self.values.contains_key(Self::KEY_NOTIFICATION) {
            LaunchReason::Notification
        } else {
            LaunchReason::Cold
        }
    }
}

impl FromIterator<(String, String)> for LaunchOptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
