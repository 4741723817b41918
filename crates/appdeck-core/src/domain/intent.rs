//! LaunchIntent - 「このアプリを起動して」という要求の記述
//!
//! Intent は呼び出しごとに新しく作り、永続化しません。
//! 2 つの使い方があります：
//! - パッケージ指定のクエリ（fallback で launcher activity を探す）
//! - コンポーネント指定の起動（解決済みの activity を新しい task で起動）

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::package::{ApplicationIdentifier, ComponentName};

/// Intent の action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntentAction {
    Main,
}

impl IntentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentAction::Main => "android.intent.action.MAIN",
        }
    }
}

impl fmt::Display for IntentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent の category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntentCategory {
    /// ランチャーに表示されるエントリポイント
    Launcher,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Launcher => "android.intent.category.LAUNCHER",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent の宛先
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IntentTarget {
    /// パッケージだけを指定（activity は OS が解決する）
    Package(ApplicationIdentifier),
    /// 解決済みのコンポーネント
    Component(ComponentName),
}

impl IntentTarget {
    pub fn package(&self) -> &ApplicationIdentifier {
        match self {
            IntentTarget::Package(package) => package,
            IntentTarget::Component(component) => &component.package,
        }
    }
}

/// Intent flags (Android の `Intent.FLAG_*` と同じビット値)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchFlags(u32);

impl LaunchFlags {
    pub const NONE: LaunchFlags = LaunchFlags(0);

    /// 呼び出し元の task stack に積まず、新しい task で起動する
    pub const NEW_TASK: LaunchFlags = LaunchFlags(0x1000_0000);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: LaunchFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// LaunchIntent は起動要求（またはクエリ）を表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchIntent {
    pub action: IntentAction,
    pub categories: BTreeSet<IntentCategory>,
    pub target: IntentTarget,
    pub flags: LaunchFlags,
}

impl LaunchIntent {
    /// MAIN/LAUNCHER を持つ activity をパッケージ内で探すためのクエリ
    pub fn launcher_query(package: ApplicationIdentifier) -> Self {
        Self {
            action: IntentAction::Main,
            categories: BTreeSet::from([IntentCategory::Launcher]),
            target: IntentTarget::Package(package),
            flags: LaunchFlags::NONE,
        }
    }

    /// 解決済みコンポーネントを新しい task で起動する intent
    pub fn launch_component(component: ComponentName) -> Self {
        Self {
            action: IntentAction::Main,
            categories: BTreeSet::from([IntentCategory::Launcher]),
            target: IntentTarget::Component(component),
            flags: LaunchFlags::NEW_TASK,
        }
    }

    pub fn has_category(&self, category: IntentCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn component(&self) -> Option<&ComponentName> {
        match &self.target {
            IntentTarget::Component(component) => Some(component),
            IntentTarget::Package(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_query_targets_package_without_flags() {
        let intent = LaunchIntent::launcher_query("com.example.installed".into());

        assert_eq!(intent.action, IntentAction::Main);
        assert!(intent.has_category(IntentCategory::Launcher));
        assert_eq!(intent.target.package().as_str(), "com.example.installed");
        assert!(intent.component().is_none());
        assert_eq!(intent.flags, LaunchFlags::NONE);
    }

    #[test]
    fn launch_component_starts_in_new_task() {
        let component = ComponentName::new("com.example.installed", "com.example.installed.Main");
        let intent = LaunchIntent::launch_component(component.clone());

        assert!(intent.flags.contains(LaunchFlags::NEW_TASK));
        assert_eq!(intent.flags.bits(), 0x1000_0000);
        assert_eq!(intent.component(), Some(&component));
    }

    #[test]
    fn action_and_category_render_android_names() {
        assert_eq!(IntentAction::Main.to_string(), "android.intent.action.MAIN");
        assert_eq!(
            IntentCategory::Launcher.to_string(),
            "android.intent.category.LAUNCHER"
        );
    }
}
