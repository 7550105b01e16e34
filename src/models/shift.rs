//! Shift and holiday models.
//!
//! This module defines the Shift and Holiday structs for representing
//! tenant shift definitions and company holiday calendar entries.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::timeutil::minutes_of_day;

/// The reserved name of the per-tenant fallback shift.
///
/// When an employee has no shift assignment for a weekday, the shift
/// literally named `GeneralShift` is used instead.
pub const GENERAL_SHIFT_NAME: &str = "GeneralShift";

/// Represents a company holiday for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Optional display name (e.g., "New Year's Day").
    #[serde(default)]
    pub name: Option<String>,
}

/// Represents a shift definition with entry and exit times of day.
///
/// A shift is a template, not a dated event: the same definition applies
/// to every date an employee is assigned to it. Exit may wrap past
/// midnight for overnight shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Human-readable shift name (e.g., "GeneralShift", "NightShift").
    pub name: String,
    /// The time of day the shift starts.
    pub entry: NaiveTime,
    /// The time of day the shift ends. May be earlier than `entry`,
    /// meaning the shift ends on the following day.
    pub exit: NaiveTime,
}

impl Shift {
    /// Calculates the shift duration in minutes.
    ///
    /// If `exit` is not after `entry`, the exit is treated as next-day
    /// so overnight shifts produce a positive duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Shift;
    /// use chrono::NaiveTime;
    ///
    /// let night = Shift {
    ///     id: "night".to_string(),
    ///     name: "NightShift".to_string(),
    ///     entry: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     exit: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// };
    /// assert_eq!(night.duration_minutes(), 480);
    /// ```
    pub fn duration_minutes(&self) -> i64 {
        let entry = minutes_of_day(self.entry);
        let exit = minutes_of_day(self.exit);
        if exit > entry {
            exit - entry
        } else {
            exit + 24 * 60 - entry
        }
    }

    /// Returns true if this shift is the tenant's fallback shift.
    pub fn is_general(&self) -> bool {
        self.name == GENERAL_SHIFT_NAME
    }

    /// The shift start as minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        minutes_of_day(self.entry)
    }

    /// The shift end as minutes since midnight (not wrapped).
    pub fn end_minutes(&self) -> i64 {
        minutes_of_day(self.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn make_shift(entry: &str, exit: &str) -> Shift {
        Shift {
            id: "shift_001".to_string(),
            name: "DayShift".to_string(),
            entry: make_time(entry),
            exit: make_time(exit),
        }
    }

    /// SH-001: ordinary 9 hour shift
    #[test]
    fn test_day_shift_duration() {
        let shift = make_shift("09:00:00", "18:00:00");
        assert_eq!(shift.duration_minutes(), 540);
    }

    /// SH-002: overnight shift wraps past midnight
    #[test]
    fn test_overnight_shift_duration_is_positive() {
        let shift = make_shift("22:00:00", "06:00:00");
        assert_eq!(shift.duration_minutes(), 480);
    }

    /// SH-003: exit equal to entry is a full 24h wrap
    #[test]
    fn test_exit_equals_entry_wraps_full_day() {
        let shift = make_shift("09:00:00", "09:00:00");
        assert_eq!(shift.duration_minutes(), 24 * 60);
    }

    #[test]
    fn test_is_general() {
        let mut shift = make_shift("09:00:00", "18:00:00");
        assert!(!shift.is_general());
        shift.name = GENERAL_SHIFT_NAME.to_string();
        assert!(shift.is_general());
    }

    #[test]
    fn test_start_and_end_minutes() {
        let shift = make_shift("09:30:00", "18:15:00");
        assert_eq!(shift.start_minutes(), 570);
        assert_eq!(shift.end_minutes(), 1095);
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = make_shift("09:00:00", "18:00:00");
        let json = serde_json::to_string(&shift).unwrap();
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_holiday_deserialization() {
        let json = r#"{"date": "2026-01-26", "name": "Republic Day"}"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(
            holiday.date,
            NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
        );
        assert_eq!(holiday.name.as_deref(), Some("Republic Day"));
    }

    #[test]
    fn test_holiday_name_defaults_to_none() {
        let json = r#"{"date": "2026-01-26"}"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert!(holiday.name.is_none());
    }
}
