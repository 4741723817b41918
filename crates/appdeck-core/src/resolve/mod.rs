//! Resolve - パッケージ名から起動コンポーネントを解決する
//!
//! 解決は順序付きの strategy リストとして表現します（`ResolverChain`）。

pub mod chain;
pub mod strategy;

pub use self::chain::ResolverChain;
pub use self::strategy::{DefaultLaunchEntry, LauncherActivityScan, ResolutionStrategy, TieBreak};
