//! Resolution - パッケージ解決の結果

use serde::{Deserialize, Serialize};

use super::package::ComponentName;

/// 解決の結果（呼び出しごとに作られ、すぐに起動ステップで消費される）
///
/// - `Resolved`: どれかの tier がコンポーネントを見つけた
/// - `NotFound`: どの tier も見つけられなかった
///
/// 「パッケージが無い」と「パッケージはあるが launcher activity が無い」は区別しません。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    Resolved {
        component: ComponentName,
        /// 解決した strategy の名前
        strategy: String,
    },
    NotFound,
}

impl Resolution {
    pub fn resolved(component: ComponentName, strategy: impl Into<String>) -> Self {
        Resolution::Resolved {
            component,
            strategy: strategy.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }

    pub fn component(&self) -> Option<&ComponentName> {
        match self {
            Resolution::Resolved { component, .. } => Some(component),
            Resolution::NotFound => None,
        }
    }
}
