//! Domain model (identifiers, intents, resolution results, errors, ...).

pub mod errors;
pub mod ids;
pub mod intent;
pub mod package;
pub mod platform;
pub mod receipt;
pub mod resolution;

pub use self::errors::LaunchError;
pub use self::ids::LaunchId;
pub use self::intent::{IntentAction, IntentCategory, IntentTarget, LaunchFlags, LaunchIntent};
pub use self::package::{ApplicationIdentifier, ComponentName};
pub use self::platform::{Platform, UnknownPlatform};
pub use self::receipt::LaunchReceipt;
pub use self::resolution::Resolution;
