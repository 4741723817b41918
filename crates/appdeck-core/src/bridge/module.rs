//! NativeModule - JS から呼ばれるネイティブモジュール
//!
//! # 学習ポイント
//! - Object-safe な async trait（`dyn NativeModule` で登録できる）
//! - serde_json::Value の引数を型付き struct にデコード
//! - spawn_blocking でブロッキングな OS 問い合わせを UI スレッドから外す

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use super::response::{BridgeError, BridgeResponse};
use crate::domain::ApplicationIdentifier;
use crate::ports::AppLauncher;

/// NativeModule は JS 側から名前で呼ばれるモジュール
#[async_trait]
pub trait NativeModule: Send + Sync {
    /// JS 側の `NativeModules.<name>`
    fn name(&self) -> &'static str;

    fn methods(&self) -> &'static [&'static str];

    async fn invoke(&self, method: &str, args: serde_json::Value) -> BridgeResponse;
}

/// `launchApp` の引数
///
/// `{"packageName": "..."}` と `["..."]` の両方を受け付けます。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LaunchAppArgs {
    Named {
        #[serde(rename = "packageName")]
        package_name: String,
    },
    Positional((String,)),
}

impl LaunchAppArgs {
    fn into_package_name(self) -> String {
        match self {
            LaunchAppArgs::Named { package_name } => package_name,
            LaunchAppArgs::Positional((package_name,)) => package_name,
        }
    }
}

/// AppLauncherModule は `AppLauncher.launchApp(packageName)` を提供
pub struct AppLauncherModule {
    launcher: Arc<dyn AppLauncher>,
}

impl AppLauncherModule {
    pub const NAME: &'static str = "AppLauncher";
    pub const LAUNCH_APP: &'static str = "launchApp";
    const METHODS: &'static [&'static str] = &[Self::LAUNCH_APP];

    pub fn new(launcher: Arc<dyn AppLauncher>) -> Self {
        Self { launcher }
    }

    /// パッケージを起動し、成功なら `true` で resolve する
    ///
    /// 起動処理は blocking worker で実行します。連打の重複排除はしません。
    pub async fn launch_app(&self, package_name: String) -> BridgeResponse {
        let launcher = self.launcher.clone();
        let identifier = ApplicationIdentifier::new(package_name);
        debug!(package = %identifier, "launchApp called");

        match tokio::task::spawn_blocking(move || launcher.launch(&identifier)).await {
            Ok(Ok(receipt)) => {
                debug!(launch_id = %receipt.launch_id, "launchApp resolved");
                BridgeResponse::resolved(json!(true))
            }
            Ok(Err(e)) => BridgeResponse::rejected(e),
            Err(e) => {
                error!(error = %e, "launch worker did not complete");
                BridgeResponse::rejected(BridgeError::generic(format!(
                    "launch worker did not complete: {e}"
                )))
            }
        }
    }
}

#[async_trait]
impl NativeModule for AppLauncherModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn methods(&self) -> &'static [&'static str] {
        Self::METHODS
    }

    async fn invoke(&self, method: &str, args: serde_json::Value) -> BridgeResponse {
        match method {
            Self::LAUNCH_APP => match serde_json::from_value::<LaunchAppArgs>(args) {
                Ok(args) => self.launch_app(args.into_package_name()).await,
                Err(e) => BridgeResponse::rejected(BridgeError::generic(format!(
                    "invalid arguments for {}.{}: {e}",
                    Self::NAME,
                    Self::LAUNCH_APP
                ))),
            },
            other => BridgeResponse::rejected(BridgeError::generic(format!(
                "{} has no method {other}",
                Self::NAME
            ))),
        }
    }
}
