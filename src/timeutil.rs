//! Time arithmetic utilities.
//!
//! Durations inside the engine are minute integers. Strings in the
//! `HH:MM:SS` shape exist only at the storage and annotation boundary;
//! comparisons always happen on the integers, never on the strings.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Parses an `HH:MM:SS` (or `HH:MM`) string into minutes.
///
/// Seconds are truncated; hours may exceed 23, so running totals such as
/// `26:30:00` parse back correctly.
///
/// # Example
///
/// ```
/// use attendance_engine::timeutil::parse_hms;
///
/// assert_eq!(parse_hms("09:30:00").unwrap(), 570);
/// assert_eq!(parse_hms("26:30:00").unwrap(), 1590);
/// assert!(parse_hms("9h30").is_err());
/// ```
pub fn parse_hms(value: &str) -> EngineResult<i64> {
    let invalid = || EngineError::InvalidTime {
        value: value.to_string(),
    };

    let mut parts = value.split(':');
    let hours: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let minutes: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    if let Some(seconds) = parts.next() {
        let _: i64 = seconds.parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() || hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats a minute count as a zero-padded `HH:MM:SS` string.
///
/// Hours are not wrapped at 24 so period totals stay readable.
///
/// # Example
///
/// ```
/// use attendance_engine::timeutil::format_minutes;
///
/// assert_eq!(format_minutes(570), "09:30:00");
/// assert_eq!(format_minutes(1590), "26:30:00");
/// assert_eq!(format_minutes(0), "00:00:00");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

/// Returns the minutes elapsed since midnight for a time of day.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) / 60
}

/// Maps an excess duration onto a fractional day of leave.
///
/// Used by the `leave` penalty mode: up to two hours costs a quarter
/// unit, up to four a half, up to six three quarters, and anything
/// longer a whole unit.
///
/// # Example
///
/// ```
/// use attendance_engine::timeutil::excess_to_day_fraction;
/// use rust_decimal::Decimal;
///
/// assert_eq!(excess_to_day_fraction(90), Decimal::new(25, 2));
/// assert_eq!(excess_to_day_fraction(240), Decimal::new(50, 2));
/// assert_eq!(excess_to_day_fraction(300), Decimal::new(75, 2));
/// assert_eq!(excess_to_day_fraction(400), Decimal::ONE);
/// ```
pub fn excess_to_day_fraction(excess_minutes: i64) -> Decimal {
    match excess_minutes {
        m if m <= 120 => Decimal::new(25, 2),
        m if m <= 240 => Decimal::new(50, 2),
        m if m <= 360 => Decimal::new(75, 2),
        _ => Decimal::ONE,
    }
}
