//! ActivityStarter port - OS に activity の起動を依頼する

use crate::domain::LaunchIntent;

/// StartError は起動依頼が OS に拒否されたときのエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    ActivityNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl StartError {
    pub fn message(&self) -> &str {
        match self {
            StartError::PermissionDenied(message)
            | StartError::ActivityNotFound(message)
            | StartError::Other(message) => message,
        }
    }
}

/// ActivityStarter は intent を OS に渡して起動させる
///
/// Fire-and-forget: 戻り値は「依頼が受け付けられたか」だけで、
/// 起動後のアプリの状態は分かりません。取り消しもできません。
pub trait ActivityStarter: Send + Sync {
    fn start_activity(&self, intent: &LaunchIntent) -> Result<(), StartError>;
}
