use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rateview_types::FailureReason;

use crate::{Error, Result};

/// ISO-8601 date-times without an offset; read as UTC
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a raw value as a point in time.
///
/// Accepts RFC 3339 (offset required), offset-less ISO-8601 date-times
/// (UTC) and bare calendar dates (midnight UTC). Surrounding whitespace is
/// ignored.
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, FailureReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FailureReason::Empty);
    }

    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) => err,
    };

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(FailureReason::Unparseable(rfc3339_err.to_string()))
}

/// Parse a reference time supplied by an operator (e.g. `--now`).
///
/// Unlike presentation input this is a hard error when malformed.
pub fn parse_reference_time(input: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(input).map_err(|reason| Error::InvalidTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_with_offset_normalizes_to_utc() {
        let ts = parse_timestamp("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_fractional_seconds() {
        let ts = parse_timestamp("2024-05-01T12:00:00.123Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_offsetless_forms_read_as_utc() {
        let expected = parse_timestamp("2024-05-01T12:00:00Z").unwrap();
        assert_eq!(parse_timestamp("2024-05-01T12:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-01 12:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-05-01T12:00").unwrap(), expected);
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let ts = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(parse_timestamp("  2024-05-01T12:00:00Z\n").is_ok());
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(parse_timestamp(""), Err(FailureReason::Empty));
        assert_eq!(parse_timestamp("   "), Err(FailureReason::Empty));
    }

    #[test]
    fn test_garbage_is_unparseable() {
        assert!(matches!(
            parse_timestamp("not-a-date"),
            Err(FailureReason::Unparseable(_))
        ));
        assert!(matches!(
            parse_timestamp("2024-13-45T99:00:00Z"),
            Err(FailureReason::Unparseable(_))
        ));
    }

    #[test]
    fn test_reference_time_error_names_input() {
        let err = parse_reference_time("soon").unwrap_err();
        assert!(err.to_string().contains("'soon'"));
    }
}
