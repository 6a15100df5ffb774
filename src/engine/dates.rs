//! Parsing of stored acquisition dates.
//!
//! The store keeps `date` as text. Accepted forms are a plain calendar day
//! (`2024-03-01`), an RFC 3339 timestamp (`2024-03-01T10:00:00+02:00`) and a
//! naive timestamp (`2024-03-01T10:00:00`, `2024-03-01 10:00:00`). Offsets
//! are ignored: the day is the one written in the string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::Equipment;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a stored date into a wall-clock timestamp (midnight for plain days)
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Parse a stored date truncated to its calendar day
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    parse_datetime(raw).map(|dt| dt.date())
}

/// Calendar day of a record's acquisition date, if it has a valid one
pub fn record_day(record: &Equipment) -> Option<NaiveDate> {
    record.date.as_deref().and_then(parse_day)
}

/// Acquisition timestamp of a record, if it has a valid one
pub fn record_datetime(record: &Equipment) -> Option<NaiveDateTime> {
    record.date.as_deref().and_then(parse_datetime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_day() {
        assert_eq!(parse_day("2024-03-01"), Some(day(2024, 3, 1)));
        assert_eq!(parse_day(" 2024-03-01 "), Some(day(2024, 3, 1)));
    }

    #[test]
    fn test_timestamp_keeps_written_day() {
        // 23:30 at +02:00 is still the 1st locally even though it is the 1st at 21:30 UTC
        assert_eq!(parse_day("2024-03-01T23:30:00+02:00"), Some(day(2024, 3, 1)));
        // and 00:30 at -05:00 is the 1st locally, the 1st at 05:30 UTC
        assert_eq!(parse_day("2024-03-01T00:30:00-05:00"), Some(day(2024, 3, 1)));
        assert_eq!(parse_day("2024-03-01T10:15:00Z"), Some(day(2024, 3, 1)));
        assert_eq!(parse_day("2024-03-01T10:15:00.123"), Some(day(2024, 3, 1)));
        assert_eq!(parse_day("2024-03-01 10:15:00"), Some(day(2024, 3, 1)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("not a date"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day("01/03/2024"), None);
    }
}
