//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **PackageLauncher**: Android 用の AppLauncher（2 tier 解決 + 起動）
//! - **UnsupportedPlatformLauncher**: それ以外のプラットフォーム用スタブ
//! - **InMemoryPackageRegistry**: 開発・テスト用のパッケージレジストリ
//! - **RecordingActivityStarter**: 起動依頼を記録するだけの starter
//!
//! 端末上の `PackageManager` / `Context.startActivity` につなぐ実装は
//! ネイティブ側（JNI）で ports を実装して渡します。

pub mod inmem_registry;
pub mod package_launcher;
pub mod recording_starter;
pub mod unsupported;

pub use self::inmem_registry::{ActivityEntry, InMemoryPackageRegistry, InstalledPackage};
pub use self::package_launcher::PackageLauncher;
pub use self::recording_starter::RecordingActivityStarter;
pub use self::unsupported::UnsupportedPlatformLauncher;
