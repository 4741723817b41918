//! Bridge - JS 側（UI）から呼ばれる入口
//!
//! UI のタップハンドラは `AppLauncher.launchApp(packageName)` を呼び、
//! Promise の resolve / reject（`code` と `message`）で結果を受け取ります。

pub mod module;
pub mod registry;
pub mod response;

pub use self::module::{AppLauncherModule, NativeModule};
pub use self::registry::{ModuleError, ModuleRegistry};
pub use self::response::{BridgeError, BridgeResponse};
