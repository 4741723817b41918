//! AppLauncher port - 「パッケージ名でアプリを開く」機能そのもの
//!
//! この機能は Android にしか存在しません。
//! 起動時にプラットフォームに応じた実装を 1 つ選び、呼び出し側は trait 越しに使います。
//! - Android: `impls::PackageLauncher`
//! - それ以外: `impls::UnsupportedPlatformLauncher`

use crate::domain::{ApplicationIdentifier, LaunchError, LaunchReceipt, Platform};

/// AppLauncher はアプリ起動の capability
///
/// # 保証
/// - 1 回の呼び出しで「成功 / NotFound / LaunchFailure」のどれか 1 つ
/// - 呼び出しの中では同期的（途中で中断しない）
/// - リトライ・重複排除・キャンセルはしない（必要なら呼び出し側の責任）
pub trait AppLauncher: Send + Sync {
    fn platform(&self) -> Platform;

    fn launch(&self, identifier: &ApplicationIdentifier) -> Result<LaunchReceipt, LaunchError>;
}
