//! Day-granularity date arithmetic over the UTC calendar
//!
//! Every instant handled here is expected to sit on UTC midnight, so
//! [`day_difference`] is exact even though it rounds.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{Error, Result};

/// Milliseconds in one calendar day.
pub const MS_PER_DAY: i64 = 86_400_000;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a `YYYY-MM-DD` string as UTC midnight.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the string is not a valid ISO calendar date.
pub fn parse_calendar_date(iso_date: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(iso_date.trim(), "%Y-%m-%d")
        .map(calendar_midnight)
        .map_err(|_| Error::InvalidDate(iso_date.to_string()))
}

/// UTC midnight of a calendar date.
#[must_use]
pub fn calendar_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Zero the time-of-day components.
#[must_use]
pub fn truncate_to_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    calendar_midnight(instant.date_naive())
}

/// Offset by `n` whole days (negative `n` moves backwards).
#[must_use]
pub fn add_days(instant: DateTime<Utc>, n: i64) -> DateTime<Utc> {
    instant + Duration::milliseconds(n * MS_PER_DAY)
}

/// Whole days from `a` to `b`, rounded to the nearest day.
#[must_use]
pub fn day_difference(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let ms = (b - a).num_milliseconds();
    // Ties round up, never away from zero.
    (ms as f64 / MS_PER_DAY as f64 + 0.5).floor() as i64
}

/// `YYYY-MM-DD` rendering of an instant's UTC date.
#[must_use]
pub fn format_calendar_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Three-letter month name used on the timeline header.
#[must_use]
pub fn month_label(instant: DateTime<Utc>) -> &'static str {
    MONTHS[instant.month0() as usize]
}

/// Zero-padded day of month used on the timeline header.
#[must_use]
pub fn day_label(instant: DateTime<Utc>) -> String {
    format!("{:02}", instant.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date_is_utc_midnight() {
        let d = parse_calendar_date("2024-01-03").unwrap();
        assert_eq!(d.to_rfc3339(), "2024-01-03T00:00:00+00:00");
    }

    #[test]
    fn test_parse_calendar_date_rejects_garbage() {
        assert!(matches!(
            parse_calendar_date("2024-13-40"),
            Err(Error::InvalidDate(_))
        ));
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_truncate_to_day() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(format_calendar_date(truncate_to_day(t)), "2024-03-09");
        assert_eq!(truncate_to_day(t).time(), NaiveTime::MIN);
    }

    #[test]
    fn test_add_days_negative_and_across_leap_day() {
        let d = parse_calendar_date("2024-03-01").unwrap();
        assert_eq!(format_calendar_date(add_days(d, -1)), "2024-02-29");
        assert_eq!(format_calendar_date(add_days(d, 31)), "2024-04-01");
    }

    #[test]
    fn test_day_difference() {
        let a = parse_calendar_date("2024-01-01").unwrap();
        let b = parse_calendar_date("2024-01-10").unwrap();
        assert_eq!(day_difference(a, b), 9);
        assert_eq!(day_difference(b, a), -9);
        assert_eq!(day_difference(a, a), 0);
    }

    #[test]
    fn test_day_difference_rounds_drift() {
        let a = parse_calendar_date("2024-01-01").unwrap();
        let b = add_days(a, 2) + Duration::hours(11);
        assert_eq!(day_difference(a, b), 2);
        let c = add_days(a, 2) + Duration::hours(13);
        assert_eq!(day_difference(a, c), 3);
    }

    #[test]
    fn test_header_labels() {
        let d = parse_calendar_date("2024-09-05").unwrap();
        assert_eq!(month_label(d), "Sep");
        assert_eq!(day_label(d), "05");
    }
}
