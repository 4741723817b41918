//! PackageRegistry port - OS のパッケージレジストリ（読み取り専用）
//!
//! Android では `PackageManager` が実装します。
//! 開発・テスト用には `impls::InMemoryPackageRegistry` を使います。

use crate::domain::{ApplicationIdentifier, ComponentName, LaunchIntent};

/// RegistryError はレジストリ問い合わせ中の OS エラー（SecurityException など）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Unavailable(String),
}

impl RegistryError {
    pub fn message(&self) -> &str {
        match self {
            RegistryError::PermissionDenied(message) | RegistryError::Unavailable(message) => {
                message
            }
        }
    }
}

/// PackageRegistry はインストール済みアプリの問い合わせ口
///
/// # 性質
/// - 問い合わせはブロッキング（OS のレイテンシに依存、リトライなし）
/// - 状態は OS が所有・同期している（こちらは何もロックしない）
pub trait PackageRegistry: Send + Sync {
    /// パッケージのデフォルト起動エントリ（0 または 1 件）
    fn launch_entry_for(
        &self,
        package: &ApplicationIdentifier,
    ) -> Result<Option<ComponentName>, RegistryError>;

    /// intent filter がクエリに一致する activity を列挙
    ///
    /// クエリの宛先がパッケージなら、そのパッケージ内に限定されます。
    /// 並び順は OS が決める（こちらからは不定として扱う）。
    fn query_intent_activities(
        &self,
        query: &LaunchIntent,
    ) -> Result<Vec<ComponentName>, RegistryError>;
}
