use chrono::{DateTime, Utc};
use serenity::all::Timestamp;

/// Formats a Discord timestamp as a calendar date, e.g. `2024-05-01`.
///
/// # Arguments
/// - `timestamp` - Timestamp as returned by the Discord API
///
/// # Returns
/// - `String` - `YYYY-MM-DD` in UTC, or `Unknown` for out-of-range timestamps
pub fn date(timestamp: Timestamp) -> String {
    DateTime::<Utc>::from_timestamp(timestamp.unix_timestamp(), 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Formats a stored date and time, e.g. `2024-05-01 13:37:00`.
pub fn date_time(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
