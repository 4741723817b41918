//! Catalog model: the apps the launcher offers, as rows already fetched by
//! the data layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ApplicationIdentifier;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogApp {
    pub id: String,
    #[serde(alias = "titulo")]
    pub title: String,

    #[serde(default, alias = "descripcion_corta")]
    pub short_description: String,

    #[serde(default, alias = "descripcion_larga")]
    pub long_description: String,

    /// Package to launch when the card is tapped.
    pub package_name: String,

    #[serde(default, alias = "icono_url", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Bundled icon key; falls back to the default icon when absent.
    #[serde(default, alias = "icono_local", skip_serializing_if = "Option::is_none")]
    pub local_icon: Option<String>,

    #[serde(default, alias = "orden")]
    pub order: i32,

    #[serde(default = "default_active", alias = "activo")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl CatalogApp {
    pub fn identifier(&self) -> ApplicationIdentifier {
        ApplicationIdentifier::new(self.package_name.clone())
    }

    /// Icon key normalized to lower case, if any.
    pub fn icon_key(&self) -> Option<String> {
        self.local_icon
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(str::to_lowercase)
    }
}

/// The catalog as shown on the home screen.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apps: Vec<CatalogApp>,
}

impl Catalog {
    pub fn new(apps: Vec<CatalogApp>) -> Self {
        Self { apps }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Active apps, title ascending.
    pub fn visible(&self) -> Vec<&CatalogApp> {
        let mut visible: Vec<&CatalogApp> = self.apps.iter().filter(|a| a.active).collect();
        visible.sort_by(|a, b| a.title.cmp(&b.title));
        visible
    }

    pub fn find(&self, id: &str) -> Option<&CatalogApp> {
        self.apps.iter().find(|a| a.id == id)
    }

    pub fn find_by_package(&self, package: &ApplicationIdentifier) -> Option<&CatalogApp> {
        self.apps.iter().find(|a| a.package_name == package.as_str())
    }

    /// Identifier to launch for the row `id`.
    pub fn identifier_of(&self, id: &str) -> Option<ApplicationIdentifier> {
        self.find(id).map(CatalogApp::identifier)
    }
}
