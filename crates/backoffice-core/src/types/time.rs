//! Timestamp formatting.

use chrono::{DateTime, Utc};

/// Storage format of `created_at` / `updated_at`.
///
/// Fixed width, so string comparison matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp for storage.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_is_comparable() {
        let early = Utc.with_ymd_and_hms(2023, 9, 1, 8, 5, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(early), "2023-09-01 08:05:00");
        assert!(format_timestamp(early) < format_timestamp(late));
    }
}
