//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod conversation;
pub mod knowledge;
pub mod pool;

use askdesk_types::error::RepositoryError;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format a timestamp for storage.
///
/// Fixed microsecond precision keeps lexical order equal to chronological
/// order, which `ORDER BY timestamp` relies on.
pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp. Also accepts SQLite's `CURRENT_TIMESTAMP` format.
pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Query(format!("invalid datetime '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_fixed_width() {
        let a = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let b = a + chrono::Duration::microseconds(1);
        assert_eq!(format_datetime(&a), "2026-01-02T03:04:05.000000Z");
        assert!(format_datetime(&a) < format_datetime(&b));
    }

    #[test]
    fn test_parse_datetime_roundtrip() {
        let now = Utc::now();
        let parsed = parse_datetime(&format_datetime(&now)).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn test_parse_datetime_sqlite_default_format() {
        let parsed = parse_datetime("2025-06-01 12:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
    }
}
