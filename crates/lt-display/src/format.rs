//! Timestamp rendering for table cells.

use chrono::{DateTime, Utc};

/// Locale-style pattern: `Jan 15, 2024, 10:30 AM`.
const DATE_PATTERN: &str = "%b %-d, %Y, %I:%M %p";

/// Render an RFC 3339 timestamp string for display.
///
/// Absent or empty input renders as `"N/A"`; a timestamp that does not
/// parse clamps to `"Invalid date"` rather than propagating. The offset
/// carried by the timestamp itself is kept, so rendering is deterministic
/// regardless of host timezone.
#[must_use]
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        None => "N/A".to_string(),
        Some(raw) if raw.is_empty() => "N/A".to_string(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed.format(DATE_PATTERN).to_string(),
            Err(_) => "Invalid date".to_string(),
        },
    }
}

/// Render an already-parsed UTC timestamp in the same pattern.
#[must_use]
pub fn format_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DATE_PATTERN).to_string()
}
