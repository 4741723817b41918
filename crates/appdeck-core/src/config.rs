//! Configuration (appdeck.toml)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Platform;
use crate::resolve::TieBreak;

/// Top-level configuration loaded from appdeck.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDeckConfig {
    #[serde(default)]
    pub launcher: LauncherSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[launcher]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherSection {
    /// Overrides the platform detected from the build target
    #[serde(default)]
    pub platform: Option<Platform>,

    /// How the fallback tier picks among several launcher activities
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// `[logging]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// tracing EnvFilter directive
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppDeckConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The platform to build the launcher for
    pub fn platform(&self) -> Platform {
        self.launcher.platform.unwrap_or_else(Platform::current)
    }
}
