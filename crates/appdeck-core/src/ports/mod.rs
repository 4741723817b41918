//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は OS の機能（パッケージレジストリ、activity の起動）や
//! 時刻・ID 生成へのインターフェースを提供し、実装の詳細を隠蔽します。

pub mod activity_starter;
pub mod clock;
pub mod id_generator;
pub mod launcher;
pub mod package_registry;

pub use self::activity_starter::{ActivityStarter, StartError};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::launcher::AppLauncher;
pub use self::package_registry::{PackageRegistry, RegistryError};
