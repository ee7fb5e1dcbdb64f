//! Day labels in the dashboard's fixed display timezone.
//!
//! The server groups messages by UTC day; the dashboard shows them shifted by a
//! fixed offset (UTC+8) and cut down to `YYYY-MM-DD`.

use crate::consts::cli_consts::charts::TIMEZONE_OFFSET_HOURS;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed display offset.
pub fn display_offset() -> TimeDelta {
    TimeDelta::hours(TIMEZONE_OFFSET_HOURS as i64)
}

/// Reads a day string as a UTC instant.
///
/// Accepts RFC 3339 timestamps, naive date-times (taken as UTC) and plain dates
/// (UTC midnight).
pub fn parse_utc(day: &str) -> Option<NaiveDateTime> {
    let day = day.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(day) {
        return Some(dt.naive_utc());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(day, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(day, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Shifts `day` by `offset` and truncates to a date, or `None` if it does not parse.
pub fn shift_to_date(day: &str, offset: TimeDelta) -> Option<String> {
    let shifted = parse_utc(day)?.checked_add_signed(offset)?;
    Some(shifted.date().format(DATE_FORMAT).to_string())
}

/// Display label for a day string; unparseable input is returned unchanged.
pub fn local_date_label(day: &str) -> String {
    shift_to_date(day, display_offset()).unwrap_or_else(|| day.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_utc_stays_on_same_day() {
        assert_eq!(
            shift_to_date("2024-01-01T00:00:00Z", display_offset()),
            Some("2024-01-01".to_string())
        );
    }

    #[test]
    fn test_late_utc_evening_rolls_over() {
        assert_eq!(local_date_label("2024-01-01T20:00:00Z"), "2024-01-02");
        assert_eq!(local_date_label("2024-12-31 16:00:00"), "2025-01-01");
    }

    #[test]
    fn test_explicit_offset_is_normalised_to_utc_first() {
        // 09:00 at UTC+9 is 00:00 UTC, which is 08:00 at UTC+8.
        assert_eq!(local_date_label("2024-05-05T09:00:00+09:00"), "2024-05-05");
    }

    #[test]
    fn test_plain_dates_are_accepted() {
        assert_eq!(local_date_label("2024-02-29"), "2024-02-29");
    }

    #[test]
    fn test_shift_then_truncate_is_idempotent() {
        let inputs = [
            "2024-01-01T00:00:00Z",
            "2024-01-01T15:59:59Z",
            "2024-01-01T16:00:00Z",
            "2023-06-30 23:30:00",
            "2024-02-29",
        ];
        for input in inputs {
            let once = shift_to_date(input, display_offset()).unwrap();
            let twice = shift_to_date(&once, display_offset()).unwrap();
            assert_eq!(once, twice, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(shift_to_date("yesterday", display_offset()), None);
        assert_eq!(local_date_label("yesterday"), "yesterday");
    }
}
