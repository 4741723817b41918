//! ResolutionStrategy - パッケージ名からコンポーネントを探す 1 つの tier
//!
//! # 実装
//! - **DefaultLaunchEntry**: OS に登録されたデフォルト起動エントリを引く（tier 1）
//! - **LauncherActivityScan**: MAIN/LAUNCHER を持つ activity を列挙して選ぶ（tier 2）

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{ApplicationIdentifier, ComponentName, LaunchIntent};
use crate::ports::{PackageRegistry, RegistryError};

/// ResolutionStrategy は 1 つの解決手段
///
/// `Ok(None)` は「この tier では見つからなかった」で、次の tier に進みます。
/// `Err` は OS エラーで、chain 全体を中断します。
pub trait ResolutionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(
        &self,
        registry: &dyn PackageRegistry,
        identifier: &ApplicationIdentifier,
    ) -> Result<Option<ComponentName>, RegistryError>;
}

/// Tier 1: デフォルト起動エントリ
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLaunchEntry;

impl ResolutionStrategy for DefaultLaunchEntry {
    fn name(&self) -> &'static str {
        "default_launch_entry"
    }

    fn resolve(
        &self,
        registry: &dyn PackageRegistry,
        identifier: &ApplicationIdentifier,
    ) -> Result<Option<ComponentName>, RegistryError> {
        registry.launch_entry_for(identifier)
    }
}

/// 候補が複数あるときの選び方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// レジストリが返した最初の候補（順序は OS 次第）
    #[default]
    RegistryOrder,
    /// activity 名が辞書順で最小の候補
    LexicographicActivity,
}

impl TieBreak {
    fn pick(&self, candidates: Vec<ComponentName>) -> Option<ComponentName> {
        match self {
            TieBreak::RegistryOrder => candidates.into_iter().next(),
            TieBreak::LexicographicActivity => candidates
                .into_iter()
                .min_by(|a, b| a.activity.cmp(&b.activity)),
        }
    }
}

/// Tier 2: launcher activity の手動探索
///
/// `getLaunchIntentForPackage` 相当が何も返さなかったときに、
/// MAIN/LAUNCHER の intent filter を持つ activity をパッケージ内で列挙します。
#[derive(Debug, Clone, Copy, Default)]
pub struct LauncherActivityScan {
    tie_break: TieBreak,
}

impl LauncherActivityScan {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl ResolutionStrategy for LauncherActivityScan {
    fn name(&self) -> &'static str {
        "launcher_activity_scan"
    }

    fn resolve(
        &self,
        registry: &dyn PackageRegistry,
        identifier: &ApplicationIdentifier,
    ) -> Result<Option<ComponentName>, RegistryError> {
        let query = LaunchIntent::launcher_query(identifier.clone());
        let candidates: Vec<ComponentName> = registry
            .query_intent_activities(&query)?
            .into_iter()
            .filter(|c| c.belongs_to(identifier))
            .collect();

        debug!(
            package = %identifier,
            candidates = candidates.len(),
            "scanned launcher activities"
        );

        Ok(self.tie_break.pick(candidates))
    }
}
