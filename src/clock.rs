//! Canonical clock value helpers.
//!
//! The widget stores a full `DateTime<Local>` and edits only its time of
//! day; date and timezone ride along unchanged. This module holds the
//! rounding, formatting, and clipboard parsing around that value.

use chrono::{DateTime, DurationRound, Local, TimeDelta, Timelike};
use thiserror::Error;

/// Clipboard serialization format: 24-hour, zero-padded.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Why a pasted clock string was rejected.
///
/// Paste is lenient on leading zeros ("13:5:9" is fine) but strict on
/// field count, digit shape, and value ranges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseClockError {
    #[error("expected 3 ':'-separated fields, got {0}")]
    FieldCount(usize),
    #[error("not a 1-2 digit field: {0:?}")]
    BadField(String),
    #[error("value {value} out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },
}

/// Format a clock value for the clipboard: `HH:MM:SS`.
pub fn format_clock(t: DateTime<Local>) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

/// Parse `H:M:S`-shaped text into (hour, minute, second).
///
/// Each field is 1 or 2 ASCII digits; hour must be <= 23, minute and
/// second <= 59. Anything else is rejected.
pub fn parse_clock(text: &str) -> Result<(u32, u32, u32), ParseClockError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 3 {
        return Err(ParseClockError::FieldCount(fields.len()));
    }

    let mut values = [0u32; 3];
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseClockError::BadField(field.to_string()));
        }
        values[i] = field
            .parse()
            .map_err(|_| ParseClockError::BadField(field.to_string()))?;
    }

    let maxes = [23u32, 59, 59];
    for (value, max) in values.into_iter().zip(maxes) {
        if value > max {
            return Err(ParseClockError::OutOfRange { value, max });
        }
    }

    Ok((values[0], values[1], values[2]))
}

/// Replace the time of day of `t`, keeping date and timezone.
///
/// If the resulting wall-clock time does not exist locally (DST gap),
/// `t` is returned unchanged.
pub fn with_clock(t: DateTime<Local>, hour: u32, min: u32, sec: u32) -> DateTime<Local> {
    t.date_naive()
        .and_hms_opt(hour, min, sec)
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
        .unwrap_or(t)
}

/// Round to the nearest minute (ties round up).
pub fn round_to_minute(t: DateTime<Local>) -> DateTime<Local> {
    t.duration_round(TimeDelta::minutes(1)).unwrap_or(t)
}

/// Round to the nearest second (ties round up).
pub fn round_to_second(t: DateTime<Local>) -> DateTime<Local> {
    t.duration_round(TimeDelta::seconds(1)).unwrap_or(t)
}

/// Convenience accessor: (hour, minute, second) of a clock value.
pub fn hms(t: DateTime<Local>) -> (u32, u32, u32) {
    (t.hour(), t.minute(), t.second())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 14, h, m, s).unwrap()
    }

    #[test]
    fn test_format_zero_padded() {
        assert_eq!(format_clock(at(9, 5, 3)), "09:05:03");
        assert_eq!(format_clock(at(23, 59, 59)), "23:59:59");
    }

    #[test]
    fn test_parse_lenient_on_leading_zeros() {
        assert_eq!(parse_clock("13:5:9"), Ok((13, 5, 9)));
        assert_eq!(parse_clock("07:05:09"), Ok((7, 5, 9)));
        assert_eq!(parse_clock("0:0:0"), Ok((0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_clock("notatime").is_err());
        assert!(parse_clock("").is_err());
        assert!(parse_clock("12:30").is_err());
        assert!(parse_clock("12:30:15:00").is_err());
        assert!(parse_clock("12::15").is_err());
        assert!(parse_clock("123:0:0").is_err());
        assert!(parse_clock("1a:0:0").is_err());
        assert!(parse_clock(" 1:0:0").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_clock("24:0:0"),
            Err(ParseClockError::OutOfRange { value: 24, max: 23 })
        );
        assert!(parse_clock("12:60:0").is_err());
        assert!(parse_clock("12:0:60").is_err());
    }

    #[test]
    fn test_with_clock_preserves_date() {
        let t = at(10, 20, 30);
        let u = with_clock(t, 1, 2, 3);
        assert_eq!(u.date_naive(), t.date_naive());
        assert_eq!(hms(u), (1, 2, 3));
    }

    #[test]
    fn test_round_to_minute() {
        let t = at(10, 20, 31);
        assert_eq!(hms(round_to_minute(t)), (10, 21, 0));
        let t = at(10, 20, 29);
        assert_eq!(hms(round_to_minute(t)), (10, 20, 0));
    }

    #[test]
    fn test_round_to_second_is_identity_on_whole_seconds() {
        let t = at(10, 20, 30);
        assert_eq!(round_to_second(t), t);
    }
}
