//! Point history tracking.
//!
//! Every point increment a player receives is recorded as an immutable
//! [`HistoryEntry`]. Entries are the unit of undo: the most recent one is
//! popped to reverse the last increment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout used when listing history entries.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record of a single point increment.
///
/// Entries serialize with an ISO-8601 timestamp, so blobs written by the
/// browser version of the score keeper (`2024-03-01T18:22:05.123Z`) load
/// unchanged.
///
/// # Example
///
/// ```rust
/// use muggins::core::HistoryEntry;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 1, 18, 22, 5).unwrap();
/// let entry = HistoryEntry::new(35, at);
///
/// assert_eq!(entry.points, 35);
/// assert_eq!(entry.display_line(), "+35 points @ 2024-03-01 18:22:05");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Points added by this increment
    pub points: u32,
    /// When the increment was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry recorded at `timestamp`.
    pub fn new(points: u32, timestamp: DateTime<Utc>) -> Self {
        Self { points, timestamp }
    }

    /// Create an entry stamped with the current UTC time.
    pub fn now(points: u32) -> Self {
        Self::new(points, Utc::now())
    }

    /// Line shown in the history list, e.g. `+10 points @ 2024-03-01 18:22:05`.
    pub fn display_line(&self) -> String {
        format!(
            "+{} points @ {}",
            self.points,
            self.timestamp.format(DISPLAY_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_line_truncates_to_seconds() {
        let at = Utc
            .with_ymd_and_hms(2023, 12, 31, 23, 59, 59)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(987))
            .unwrap();

        let entry = HistoryEntry::new(5, at);

        assert_eq!(entry.display_line(), "+5 points @ 2023-12-31 23:59:59");
    }

    #[test]
    fn now_uses_current_time() {
        let before = Utc::now();
        let entry = HistoryEntry::now(10);
        let after = Utc::now();

        assert!(entry.timestamp >= before);
        assert!(entry.timestamp <= after);
    }

    #[test]
    fn parses_browser_timestamps() {
        let json = r#"{"points":20,"timestamp":"2024-03-01T18:22:05.123Z"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.points, 20);
        assert_eq!(entry.display_line(), "+20 points @ 2024-03-01 18:22:05");
    }

    #[test]
    fn entry_serializes_correctly() {
        let entry = HistoryEntry::now(15);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }

    #[test]
    fn negative_points_are_rejected() {
        let json = r#"{"points":-5,"timestamp":"2024-03-01T18:22:05Z"}"#;
        assert!(serde_json::from_str::<HistoryEntry>(json).is_err());
    }
}
