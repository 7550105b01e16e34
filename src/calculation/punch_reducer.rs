//! Punch log reduction.
//!
//! A day may carry arbitrarily many raw punches (double taps, missed
//! outs, multiple breaks). Classification only cares about the envelope:
//! the earliest and latest punch of the day, regardless of direction,
//! and the capture mode of the latest one.

use chrono::NaiveDateTime;

use crate::models::PunchLogEntry;

/// The punch envelope for one employee-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedPunches {
    /// Timestamp of the earliest punch.
    pub first_in: NaiveDateTime,
    /// Timestamp of the latest punch.
    pub last_out: NaiveDateTime,
    /// Capture mode of the latest punch.
    pub mode: String,
}

impl ReducedPunches {
    /// Minutes between the first and last punch.
    pub fn worked_minutes(&self) -> i64 {
        (self.last_out - self.first_in).num_minutes()
    }
}

/// Reduces a day's raw punches to their envelope.
///
/// Returns `None` for an empty log. A single punch yields an envelope
/// with `first_in == last_out` and zero worked minutes; the classifier
/// still treats the day as worked.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::reduce_punches;
/// use attendance_engine::models::{PunchAction, PunchLogEntry};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let punch = |hms: &str, action| PunchLogEntry {
///     employee_id: "emp_001".to_string(),
///     date,
///     timestamp: NaiveDateTime::parse_from_str(
///         &format!("2026-01-13 {hms}"), "%Y-%m-%d %H:%M:%S").unwrap(),
///     action,
///     mode: "biometric".to_string(),
/// };
///
/// let reduced = reduce_punches(&[
///     punch("13:00:00", PunchAction::Out),
///     punch("09:30:00", PunchAction::In),
///     punch("17:00:00", PunchAction::Out),
/// ]).unwrap();
/// assert_eq!(reduced.worked_minutes(), 450);
/// ```
pub fn reduce_punches(logs: &[PunchLogEntry]) -> Option<ReducedPunches> {
    let first = logs.iter().min_by_key(|l| l.timestamp)?;
    let last = logs.iter().max_by_key(|l| l.timestamp)?;

    Some(ReducedPunches {
        first_in: first.timestamp,
        last_out: last.timestamp,
        mode: last.mode.clone(),
    })
}
