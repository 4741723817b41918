//! appdeck-core
//!
//! Core building blocks for launching installed Android applications by
//! package name.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ApplicationIdentifier, ComponentName, LaunchIntent, Resolution, LaunchError）
//! - **ports**: 抽象化レイヤー（PackageRegistry, ActivityStarter, AppLauncher, Clock, IdGenerator）
//! - **resolve**: 2 tier の解決（ResolverChain, ResolutionStrategy）
//! - **impls**: 実装（PackageLauncher, UnsupportedPlatformLauncher, InMemoryPackageRegistry など）
//! - **app**: 起動時のワイヤリング（LauncherBuilder）
//! - **bridge**: JS 側から呼ばれる入口（AppLauncherModule）
//! - **catalog**: アプリ一覧、カルーセル、通知文
//! - **config**: appdeck.toml

pub mod app;
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod resolve;
