//! Posting date parsing.
//!
//! Datasets are exported by different tools, so `data_postagem` shows up as
//! RFC 3339 timestamps, naive timestamps or plain dates. Naive values are
//! read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a posting date. Returns `None` when no known format matches.
pub fn parse_posting_date(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_plain_date() {
        let dt = parse_posting_date("2024-01-10").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 10));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_rfc3339_is_converted_to_utc() {
        let dt = parse_posting_date("2023-12-31T22:30:00-03:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!(dt.hour(), 1);
    }

    #[test]
    fn test_naive_timestamps() {
        assert!(parse_posting_date("2024-05-02T10:11:12").is_some());
        assert!(parse_posting_date("2024-05-02 10:11:12.345").is_some());
        assert!(parse_posting_date("2024-05-02T10:11").is_some());
        assert!(parse_posting_date(" 2024/05/02 ").is_some());
    }

    #[test]
    fn test_unparseable() {
        assert!(parse_posting_date("").is_none());
        assert!(parse_posting_date("   ").is_none());
        assert!(parse_posting_date("yesterday").is_none());
        assert!(parse_posting_date("2024-13-01").is_none());
    }
}
