//! Errors - 起動エラーの分類
//!
//! OS 側の例外はすべてここの型に正規化してから呼び出し側へ返します。

use thiserror::Error;

use super::package::ApplicationIdentifier;
use super::platform::Platform;

/// Bridge error code for an identifier with no launchable entry point.
pub const APP_NOT_FOUND: &str = "APP_NOT_FOUND";

/// Generic bridge error code.
pub const GENERIC_ERROR: &str = "ERROR";

/// Bridge error code returned by the non-Android stub.
pub const UNSUPPORTED_PLATFORM: &str = "UNSUPPORTED_PLATFORM";

/// LaunchError は起動の失敗
///
/// # 分類
/// - NotFound: どの tier でも launcher activity が見つからない（リトライしない）
/// - LaunchFailure: OS が解決・起動を拒否した（権限、壊れた intent など）
/// - UnsupportedPlatform: Android 以外のプラットフォーム用スタブのみが返す
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("No launcher activity could be found for {identifier}")]
    NotFound { identifier: ApplicationIdentifier },

    #[error("{message}")]
    LaunchFailure { message: String },

    #[error("Opening applications is not supported on {platform}")]
    UnsupportedPlatform { platform: Platform },
}

impl LaunchError {
    pub fn not_found(identifier: ApplicationIdentifier) -> Self {
        LaunchError::NotFound { identifier }
    }

    /// OS のメッセージが空なら汎用メッセージに置き換える
    pub fn launch_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        LaunchError::LaunchFailure { message }
    }

    /// Bridge に返すエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            LaunchError::NotFound { .. } => APP_NOT_FOUND,
            LaunchError::LaunchFailure { .. } => GENERIC_ERROR,
            LaunchError::UnsupportedPlatform { .. } => UNSUPPORTED_PLATFORM,
        }
    }
}
