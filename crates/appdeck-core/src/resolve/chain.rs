//! ResolverChain - 順序付きの strategy リスト
//!
//! 先頭から順に試し、最初に `Some` を返した strategy の結果を採用します。
//! tier を増やしたいときは strategy を push するだけです。

use tracing::debug;

use super::strategy::{DefaultLaunchEntry, LauncherActivityScan, ResolutionStrategy, TieBreak};
use crate::domain::{ApplicationIdentifier, Resolution};
use crate::ports::{PackageRegistry, RegistryError};

pub struct ResolverChain {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl ResolverChain {
    /// 空の chain（何も解決しない）
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// 標準の 2 tier: デフォルト起動エントリ → launcher activity 探索
    pub fn standard(tie_break: TieBreak) -> Self {
        Self::empty()
            .with_strategy(DefaultLaunchEntry)
            .with_strategy(LauncherActivityScan::new(tie_break))
    }

    pub fn with_strategy<S: ResolutionStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// chain を実行
    ///
    /// - 最初に見つかったコンポーネントで `Resolved`
    /// - 全 tier が空なら `NotFound`
    /// - OS エラーはその場で返す（後続の tier は試さない）
    pub fn resolve(
        &self,
        registry: &dyn PackageRegistry,
        identifier: &ApplicationIdentifier,
    ) -> Result<Resolution, RegistryError> {
        for strategy in &self.strategies {
            match strategy.resolve(registry, identifier)? {
                Some(component) => {
                    debug!(
                        package = %identifier,
                        strategy = strategy.name(),
                        component = %component,
                        "resolved launch component"
                    );
                    return Ok(Resolution::resolved(component, strategy.name()));
                }
                None => {
                    debug!(
                        package = %identifier,
                        strategy = strategy.name(),
                        "strategy found nothing, trying next"
                    );
                }
            }
        }
        Ok(Resolution::NotFound)
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::standard(TieBreak::default())
    }
}
