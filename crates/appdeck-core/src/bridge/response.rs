//! BridgeResponse - JS 側の Promise に返す結果
//!
//! JS からは `resolve(value)` か `reject(code, message)` のどちらかに見えます。

use serde::{Deserialize, Serialize};

use crate::domain::errors::GENERIC_ERROR;
use crate::domain::LaunchError;

/// Promise の reject に渡す中身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    pub code: String,
    pub message: String,
}

impl BridgeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 汎用エラー（code = "ERROR"）
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(GENERIC_ERROR, message)
    }
}

impl From<LaunchError> for BridgeError {
    fn from(err: LaunchError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// BridgeResponse は 1 回の呼び出しの結果
///
/// JSON では `{"status":"resolved","value":true}` /
/// `{"status":"rejected","code":"APP_NOT_FOUND","message":"..."}` の形になります。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeResponse {
    Resolved { value: serde_json::Value },
    Rejected(BridgeError),
}

impl BridgeResponse {
    pub fn resolved(value: serde_json::Value) -> Self {
        BridgeResponse::Resolved { value }
    }

    pub fn rejected(error: impl Into<BridgeError>) -> Self {
        BridgeResponse::Rejected(error.into())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, BridgeResponse::Resolved { .. })
    }

    pub fn error(&self) -> Option<&BridgeError> {
        match self {
            BridgeResponse::Rejected(error) => Some(error),
            BridgeResponse::Resolved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolved_shape() {
        let v = serde_json::to_value(BridgeResponse::resolved(json!(true))).unwrap();
        assert_eq!(v, json!({"status": "resolved", "value": true}));
    }

    #[test]
    fn rejected_shape_from_launch_error() {
        let response = BridgeResponse::rejected(LaunchError::not_found("com.example.missing".into()));
        let v = serde_json::to_value(&response).unwrap();
        assert_eq!(
            v,
            json!({
                "status": "rejected",
                "code": "APP_NOT_FOUND",
                "message": "No launcher activity could be found for com.example.missing"
            })
        );
    }

    #[test]
    fn launch_failure_maps_to_generic_code() {
        let err: BridgeError = LaunchError::launch_failure("boom").into();
        assert_eq!(err, BridgeError::generic("boom"));
    }
}
