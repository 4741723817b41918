//! Platform - 起動機能を持つ OS の判定

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// アプリが動いているプラットフォーム
///
/// パッケージ起動は Android にしか存在しない機能なので、
/// 起動時に一度だけ判定して実装を選びます（呼び出し側で毎回判定しない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Android,
    Ios,
    Desktop,
}

impl Platform {
    /// ビルドターゲットから判定
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }

    pub fn supports_package_launch(&self) -> bool {
        matches!(self, Platform::Android)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}' (expected android, ios or desktop)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "desktop" => Ok(Platform::Desktop),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::android(Platform::Android, true)]
    #[case::ios(Platform::Ios, false)]
    #[case::desktop(Platform::Desktop, false)]
    fn only_android_supports_package_launch(#[case] platform: Platform, #[case] expected: bool) {
        assert_eq!(platform.supports_package_launch(), expected);
    }

    #[test]
    fn current_matches_build_target() {
        #[cfg(not(any(target_os = "android", target_os = "ios")))]
        assert_eq!(Platform::current(), Platform::Desktop);
        #[cfg(target_os = "android")]
        assert_eq!(Platform::current(), Platform::Android);
    }

    #[test]
    fn platform_deserializes_snake_case() {
        let p: Platform = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(p, Platform::Android);
    }

    #[rstest]
    #[case::android("android", Platform::Android)]
    #[case::upper("IOS", Platform::Ios)]
    #[case::desktop("desktop", Platform::Desktop)]
    fn platform_parses_from_str(#[case] raw: &str, #[case] expected: Platform) {
        assert_eq!(raw.parse::<Platform>(), Ok(expected));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert_eq!(
            "windows".parse::<Platform>(),
            Err(UnknownPlatform("windows".to_string()))
        );
    }
}
