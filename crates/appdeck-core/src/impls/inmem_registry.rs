//! InMemoryPackageRegistry - 開発・テスト用のパッケージレジストリ
//!
//! # 学習ポイント
//! - serde で JSON の fixture から「端末にインストール済みのアプリ」を再現
//! - AtomicUsize で問い合わせ回数を数え、fallback が必要なときだけ走ることを検証
//!
//! # Fixture の形
//! ```json
//! {
//!   "packages": {
//!     "com.example.installed": {
//!       "default_entry": "com.example.installed.MainActivity",
//!       "activities": [{ "name": "com.example.installed.MainActivity", "launcher": true }]
//!     }
//!   },
//!   "denied": { "com.example.secret": "Permission Denial: querying package" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{ApplicationIdentifier, ComponentName, IntentCategory, LaunchIntent};
use crate::ports::{PackageRegistry, RegistryError};

/// インストール済みパッケージ 1 件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// `launch_entry_for` が返す activity
    ///
    /// `None` のときは、launcher activity があっても tier 1 は何も返しません
    /// （`getLaunchIntentForPackage` が null を返す端末の再現）。
    #[serde(default)]
    pub default_entry: Option<String>,

    /// 宣言順に並んだ activity
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}

/// Activity 1 件と、それが MAIN/LAUNCHER を宣言しているか
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    #[serde(default)]
    pub launcher: bool,
}

impl InstalledPackage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_entry(mut self, activity: impl Into<String>) -> Self {
        self.default_entry = Some(activity.into());
        self
    }

    pub fn with_launcher_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.push(ActivityEntry {
            name: activity.into(),
            launcher: true,
        });
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.push(ActivityEntry {
            name: activity.into(),
            launcher: false,
        });
        self
    }
}

/// InMemoryPackageRegistry は開発用のレジストリ
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InMemoryPackageRegistry {
    #[serde(default)]
    packages: BTreeMap<ApplicationIdentifier, InstalledPackage>,

    /// 問い合わせると PermissionDenied になるパッケージ
    #[serde(default)]
    denied: BTreeMap<ApplicationIdentifier, String>,

    #[serde(skip)]
    launch_entry_calls: AtomicUsize,
    #[serde(skip)]
    query_calls: AtomicUsize,
}

impl InMemoryPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON fixture から作成
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn install(mut self, package: impl Into<ApplicationIdentifier>, installed: InstalledPackage) -> Self {
        self.packages.insert(package.into(), installed);
        self
    }

    pub fn deny(mut self, package: impl Into<ApplicationIdentifier>, message: impl Into<String>) -> Self {
        self.denied.insert(package.into(), message.into());
        self
    }

    pub fn is_installed(&self, package: &ApplicationIdentifier) -> bool {
        self.packages.contains_key(package)
    }

    pub fn launch_entry_calls(&self) -> usize {
        self.launch_entry_calls.load(Ordering::Relaxed)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::Relaxed)
    }

    fn check_access(&self, package: &ApplicationIdentifier) -> Result<(), RegistryError> {
        match self.denied.get(package) {
            Some(message) => Err(RegistryError::PermissionDenied(message.clone())),
            None => Ok(()),
        }
    }
}

impl PackageRegistry for InMemoryPackageRegistry {
    fn launch_entry_for(
        &self,
        package: &ApplicationIdentifier,
    ) -> Result<Option<ComponentName>, RegistryError> {
        self.launch_entry_calls.fetch_add(1, Ordering::Relaxed);
        self.check_access(package)?;

        let entry = self
            .packages
            .get(package)
            .and_then(|p| p.default_entry.as_ref())
            .map(|activity| ComponentName::new(package.clone(), activity.clone()));
        Ok(entry)
    }

    fn query_intent_activities(
        &self,
        query: &LaunchIntent,
    ) -> Result<Vec<ComponentName>, RegistryError> {
        self.query_calls.fetch_add(1, Ordering::Relaxed);
        let package = query.target.package();
        self.check_access(package)?;

        let wants_launcher = query.has_category(IntentCategory::Launcher);
        let matches = self
            .packages
            .get(package)
            .map(|p| {
                p.activities
                    .iter()
                    .filter(|a| a.launcher || !wants_launcher)
                    .map(|a| ComponentName::new(package.clone(), a.name.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_loads_from_json() {
        let registry = InMemoryPackageRegistry::from_json_str(
            r#"{
                "packages": {
                    "com.example.installed": {
                        "default_entry": "com.example.installed.Main",
                        "activities": [{ "name": "com.example.installed.Main", "launcher": true }]
                    },
                    "com.example.nolauncher": {
                        "activities": [{ "name": "com.example.nolauncher.Settings" }]
                    }
                },
                "denied": { "com.example.secret": "Permission Denial" }
            }"#,
        )
        .unwrap();

        assert!(registry.is_installed(&"com.example.installed".into()));
        assert!(registry.is_installed(&"com.example.nolauncher".into()));
        assert!(!registry.is_installed(&"com.example.missing".into()));
    }

    #[test]
    fn query_returns_launchers_in_declaration_order() {
        let registry = InMemoryPackageRegistry::new().install(
            "com.example.multi",
            InstalledPackage::new()
                .with_launcher_activity("com.example.multi.B")
                .with_activity("com.example.multi.Settings")
                .with_launcher_activity("com.example.multi.A"),
        );

        let found = registry
            .query_intent_activities(&LaunchIntent::launcher_query("com.example.multi".into()))
            .unwrap();
        let names: Vec<&str> = found.iter().map(|c| c.activity.as_str()).collect();
        assert_eq!(names, vec!["com.example.multi.B", "com.example.multi.A"]);
    }

    #[test]
    fn denied_package_is_permission_error() {
        let registry = InMemoryPackageRegistry::new().deny("com.example.secret", "Permission Denial");

        let err = registry
            .launch_entry_for(&"com.example.secret".into())
            .unwrap_err();
        assert_eq!(err, RegistryError::PermissionDenied("Permission Denial".to_string()));
        assert_eq!(registry.launch_entry_calls(), 1);
    }

    #[test]
    fn unknown_package_has_no_entry() {
        let registry = InMemoryPackageRegistry::new();
        assert_eq!(registry.launch_entry_for(&"com.example.missing".into()), Ok(None));
        assert_eq!(
            registry.query_intent_activities(&LaunchIntent::launcher_query("com.example.missing".into())),
            Ok(vec![])
        );
    }

    #[test]
    fn query_matches_by_package_and_launcher_category_only() {
        let registry = InMemoryPackageRegistry::new().install(
            "com.example.multi",
            InstalledPackage::new()
                .with_launcher_activity("com.example.multi.A")
                .with_launcher_activity("com.example.multi.B"),
        );

        let query = LaunchIntent::launch_component(ComponentName::new(
            "com.example.multi",
            "com.example.multi.B",
        ));
        let found = registry.query_intent_activities(&query).unwrap();
        assert_eq!(found.len(), 2);
    }
}
