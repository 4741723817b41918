//! Package names and component references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The namespaced string identifying an installed application
/// (Android's package name, e.g. `com.example.app`).
///
/// Opaque: no syntax check is made. A malformed identifier simply matches
/// nothing in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationIdentifier(String);

impl ApplicationIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicationIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApplicationIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A startable unit inside an installed application: (package, activity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentName {
    pub package: ApplicationIdentifier,
    pub activity: String,
}

impl ComponentName {
    pub fn new(package: impl Into<ApplicationIdentifier>, activity: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            activity: activity.into(),
        }
    }

    pub fn belongs_to(&self, package: &ApplicationIdentifier) -> bool {
        &self.package == package
    }
}

/// Flattened form `package/activity`.
impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_serializes_as_bare_string() {
        let id = ApplicationIdentifier::new("com.example.installed");
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, "\"com.example.installed\"");
    }

    #[test]
    fn component_displays_flattened() {
        let c = ComponentName::new("com.example.installed", "com.example.installed.MainActivity");
        assert_eq!(
            c.to_string(),
            "com.example.installed/com.example.installed.MainActivity"
        );
        assert!(c.belongs_to(&"com.example.installed".into()));
        assert!(!c.belongs_to(&"com.example.other".into()));
    }
}
