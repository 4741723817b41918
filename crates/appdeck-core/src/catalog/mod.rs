//! Catalog - 起動対象アプリの一覧と、その表示まわりのロジック
//!
//! データの取得・キャッシュは外側のアプリの責任です。ここでは取得済みの行だけを扱います。

pub mod carousel;
pub mod entry;
pub mod notice;

pub use self::carousel::LoopingCarousel;
pub use self::entry::{Catalog, CatalogApp};
pub use self::notice::LaunchNotice;
