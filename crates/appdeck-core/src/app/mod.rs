//! App - 起動時のワイヤリング

pub mod builder;

pub use self::builder::{BuildError, LauncherBuilder};
