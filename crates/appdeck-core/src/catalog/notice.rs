//! LaunchNotice - 起動に失敗したときにユーザーへ出す通知文

use serde::Serialize;

use super::entry::CatalogApp;
use crate::bridge::BridgeError;
use crate::domain::errors::{APP_NOT_FOUND, UNSUPPORTED_PLATFORM};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchNotice {
    pub title: String,
    pub body: String,
}

impl LaunchNotice {
    const TITLE: &'static str = "Could not open";

    /// reject された launchApp から通知文を作る
    pub fn for_rejection(app: &CatalogApp, error: &BridgeError) -> Self {
        let headline = match error.code.as_str() {
            APP_NOT_FOUND => format!("\"{}\" is not installed on this device.", app.title),
            UNSUPPORTED_PLATFORM => "Opening apps only works on Android devices.".to_string(),
            _ => format!("Error opening \"{}\": {}", app.title, error.message),
        };
        Self {
            title: Self::TITLE.to_string(),
            body: format!("{headline}\n\nPackage: {}", app.package_name),
        }
    }

    /// ネイティブモジュールが登録されていない（ネイティブ側を再ビルドしていない）とき
    pub fn module_unavailable(module: &str, package: &str) -> Self {
        Self {
            title: "Module unavailable".to_string(),
            body: format!(
                "The {module} native module is not available. Rebuild the native app.\n\nPackage: {package}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{ModuleError, ModuleRegistry};
    use serde_json::json;

    fn wallet() -> CatalogApp {
        CatalogApp {
            id: "1".to_string(),
            title: "Wallet".to_string(),
            short_description: String::new(),
            long_description: String::new(),
            package_name: "com.example.wallet".to_string(),
            icon_url: None,
            local_icon: None,
            order: 0,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn not_found_says_not_installed() {
        let notice = LaunchNotice::for_rejection(
            &wallet(),
            &BridgeError::new("APP_NOT_FOUND", "No launcher activity could be found"),
        );
        assert_eq!(notice.title, "Could not open");
        assert_eq!(
            notice.body,
            "\"Wallet\" is not installed on this device.\n\nPackage: com.example.wallet"
        );
    }

    #[test]
    fn generic_error_includes_message() {
        let notice = LaunchNotice::for_rejection(&wallet(), &BridgeError::generic("Permission Denial"));
        assert!(notice.body.starts_with("Error opening \"Wallet\": Permission Denial"));
    }

    #[test]
    fn unsupported_platform_notice() {
        let notice = LaunchNotice::for_rejection(
            &wallet(),
            &BridgeError::new("UNSUPPORTED_PLATFORM", "not supported"),
        );
        assert!(notice.body.starts_with("Opening apps only works on Android devices."));
    }

    #[tokio::test]
    async fn missing_module_gets_its_own_notice() {
        let modules = ModuleRegistry::new();

        let result = modules
            .call("AppLauncher", "launchApp", json!({"packageName": "com.example.wallet"}))
            .await;
        let module = match result {
            Err(ModuleError::Unavailable(module)) => module,
            other => panic!("expected an unavailable module, got {other:?}"),
        };

        let notice = LaunchNotice::module_unavailable(&module, "com.example.wallet");
        assert_eq!(notice.title, "Module unavailable");
        assert_eq!(
            notice.body,
            "The AppLauncher native module is not available. Rebuild the native app.\n\nPackage: com.example.wallet"
        );
    }
}
