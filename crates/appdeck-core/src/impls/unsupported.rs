//! UnsupportedPlatformLauncher - Android 以外で使うスタブ

use tracing::warn;

use crate::domain::{ApplicationIdentifier, LaunchError, LaunchReceipt, Platform};
use crate::ports::AppLauncher;

/// どのパッケージを渡しても `UnsupportedPlatform` を返す
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedPlatformLauncher {
    platform: Platform,
}

impl UnsupportedPlatformLauncher {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl AppLauncher for UnsupportedPlatformLauncher {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn launch(&self, identifier: &ApplicationIdentifier) -> Result<LaunchReceipt, LaunchError> {
        warn!(package = %identifier, platform = %self.platform, "package launch unsupported");
        Err(LaunchError::UnsupportedPlatform {
            platform: self.platform,
        })
    }
}
