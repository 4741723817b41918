//! Receipt model: what a successful launch reports back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::LaunchId;
use super::package::ComponentName;

/// Returned when a start request was dispatched to the OS.
///
/// A receipt only means the OS accepted the request; there is no way to
/// withdraw it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchReceipt {
    pub launch_id: LaunchId,
    pub component: ComponentName,

    /// Name of the resolution strategy that found `component`.
    pub strategy: String,

    pub dispatched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ulid::Ulid;

    #[test]
    fn receipt_serializes_component_fields() {
        let receipt = LaunchReceipt {
            launch_id: LaunchId::from_ulid(Ulid::new()),
            component: ComponentName::new("com.example.installed", "com.example.installed.Main"),
            strategy: "default_launch_entry".to_string(),
            dispatched_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };

        let v = serde_json::to_value(&receipt).unwrap();
        assert_eq!(v["component"]["package"], "com.example.installed");
        assert_eq!(v["component"]["activity"], "com.example.installed.Main");
        assert_eq!(v["strategy"], "default_launch_entry");
    }
}
