//! LauncherBuilder - 起動時にプラットフォームに合った AppLauncher を選ぶ
//!
//! # Fail-fast 設計
//! - Android 向けに build するときは PackageRegistry と ActivityStarter が必須
//! - 不足があれば build() が BuildError を返す（最初の tap まで気付かない、を防ぐ）
//! - Android 以外では ports を見ずにスタブを返す

use std::sync::Arc;

use tracing::info;

use crate::config::AppDeckConfig;
use crate::domain::Platform;
use crate::impls::{PackageLauncher, UnsupportedPlatformLauncher};
use crate::ports::{ActivityStarter, AppLauncher, PackageRegistry};
use crate::resolve::{ResolverChain, TieBreak};

/// LauncherBuilder は AppLauncher を構築
///
/// # 使用例
/// ```ignore
/// let launcher = LauncherBuilder::new()
///     .registry(registry)
///     .starter(starter)
///     .build()?;
/// ```
pub struct LauncherBuilder {
    platform: Platform,
    tie_break: TieBreak,
    registry: Option<Arc<dyn PackageRegistry>>,
    starter: Option<Arc<dyn ActivityStarter>>,
}

/// BuildError は構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing {0} for the {1} launcher.")]
    MissingPort(&'static str, Platform),
}

impl LauncherBuilder {
    /// ビルドターゲットのプラットフォームで作成
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            tie_break: TieBreak::default(),
            registry: None,
            starter: None,
        }
    }

    /// 設定ファイルの値（platform override, tie_break）を反映
    pub fn from_config(config: &AppDeckConfig) -> Self {
        Self::new()
            .platform(config.platform())
            .tie_break(config.launcher.tie_break)
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn registry(mut self, registry: Arc<dyn PackageRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn starter(mut self, starter: Arc<dyn ActivityStarter>) -> Self {
        self.starter = Some(starter);
        self
    }

    pub fn build(self) -> Result<Arc<dyn AppLauncher>, BuildError> {
        if !self.platform.supports_package_launch() {
            info!(platform = %self.platform, "package launch unsupported, using stub launcher");
            return Ok(Arc::new(UnsupportedPlatformLauncher::new(self.platform)));
        }

        let registry = self
            .registry
            .ok_or(BuildError::MissingPort("package registry", self.platform))?;
        let starter = self
            .starter
            .ok_or(BuildError::MissingPort("activity starter", self.platform))?;

        info!(platform = %self.platform, tie_break = ?self.tie_break, "package launcher ready");
        let launcher = PackageLauncher::new(registry, starter)
            .with_chain(ResolverChain::standard(self.tie_break));
        Ok(Arc::new(launcher))
    }
}

impl Default for LauncherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
