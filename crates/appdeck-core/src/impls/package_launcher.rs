//! PackageLauncher - Android 用の AppLauncher 実装
//!
//! # 手順
//! 1. ResolverChain で起動コンポーネントを解決（tier 1 → tier 2）
//! 2. 見つからなければ `NotFound`
//! 3. 見つかれば NEW_TASK 付きの intent を作って ActivityStarter に渡す
//! 4. 途中の OS エラーはすべて `LaunchFailure` に正規化する
//!
//! 状態を持たないので、同じ入力・同じインストール状態なら毎回同じ結果になります
//! （成功するたびに新しい起動依頼は出ます）。

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{
    ApplicationIdentifier, LaunchError, LaunchIntent, LaunchReceipt, Platform, Resolution,
};
use crate::ports::{
    ActivityStarter, AppLauncher, Clock, IdGenerator, PackageRegistry, SystemClock, UlidGenerator,
};
use crate::resolve::ResolverChain;

pub struct PackageLauncher {
    registry: Arc<dyn PackageRegistry>,
    starter: Arc<dyn ActivityStarter>,
    chain: ResolverChain,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl PackageLauncher {
    /// 標準の 2 tier chain とシステム時刻で作成
    pub fn new(registry: Arc<dyn PackageRegistry>, starter: Arc<dyn ActivityStarter>) -> Self {
        Self {
            registry,
            starter,
            chain: ResolverChain::default(),
            ids: Box::new(UlidGenerator::new(SystemClock)),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_chain(mut self, chain: ResolverChain) -> Self {
        self.chain = chain;
        self
    }

    /// 時刻と ID 生成を差し替える（テスト用）
    pub fn with_clock<C: Clock + Clone + 'static>(mut self, clock: C) -> Self {
        self.ids = Box::new(UlidGenerator::new(clock.clone()));
        self.clock = Box::new(clock);
        self
    }

    /// 起動せずに解決だけ行う
    pub fn resolve(&self, identifier: &ApplicationIdentifier) -> Result<Resolution, LaunchError> {
        self.chain
            .resolve(self.registry.as_ref(), identifier)
            .map_err(|e| LaunchError::launch_failure(e.message()))
    }
}

impl AppLauncher for PackageLauncher {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn launch(&self, identifier: &ApplicationIdentifier) -> Result<LaunchReceipt, LaunchError> {
        let (component, strategy) = match self.resolve(identifier) {
            Ok(Resolution::Resolved { component, strategy }) => (component, strategy),
            Ok(Resolution::NotFound) => {
                warn!(package = %identifier, "no launcher activity found");
                return Err(LaunchError::not_found(identifier.clone()));
            }
            Err(e) => {
                error!(package = %identifier, error = %e, "package query failed");
                return Err(e);
            }
        };

        let intent = LaunchIntent::launch_component(component.clone());
        if let Err(e) = self.starter.start_activity(&intent) {
            error!(
                package = %identifier,
                component = %component,
                error = %e,
                "start request rejected"
            );
            return Err(LaunchError::launch_failure(e.message()));
        }

        let launch_id = self.ids.generate_launch_id();
        info!(
            launch_id = %launch_id,
            component = %component,
            strategy = %strategy,
            "start request dispatched"
        );

        Ok(LaunchReceipt {
            launch_id,
            component,
            strategy,
            dispatched_at: self.clock.now(),
        })
    }
}
