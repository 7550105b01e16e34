//! Calendar and shift resolution.
//!
//! Before a day can be classified, the engine must decide what kind of
//! day it is for the employee (working day, week-off, holiday) and which
//! shift definition applies. Weekday-indexed configuration runs Sunday
//! through Saturday, index 0 = Sunday.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{Employee, GENERAL_SHIFT_NAME, Holiday, Shift};

/// The resolved calendar context for one employee-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    /// The shift the day is measured against.
    pub shift: Shift,
    /// The date falls on the tenant's holiday calendar.
    pub is_holiday: bool,
    /// The date falls on the employee's weekly off.
    pub is_week_off: bool,
}

/// Returns the weekday index for a date, 0 = Sunday through 6 = Saturday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::weekday_index;
/// use chrono::NaiveDate;
///
/// // 2026-01-11 is a Sunday.
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()), 0);
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()), 2);
/// ```
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Resolves the calendar context for one employee-day.
///
/// Shift selection is first-wins over the employee's weekday assignment
/// list; ids that match no known shift are skipped. When nothing is
/// assigned (or nothing matches), the shift literally named
/// `GeneralShift` is the fallback. Returns `None` when no shift resolves
/// at all: such a day cannot be measured and is skipped without a record.
pub fn resolve_day(
    employee: &Employee,
    date: NaiveDate,
    shifts: &[Shift],
    holidays: &[Holiday],
) -> Option<ResolvedDay> {
    let weekday = weekday_index(date);
    let is_holiday = holidays.iter().any(|h| h.date == date);
    let is_week_off = employee.is_week_off(weekday);

    let assigned = employee
        .shifts_for_weekday(weekday)
        .iter()
        .find_map(|id| shifts.iter().find(|s| &s.id == id));
    let shift = assigned
        .or_else(|| shifts.iter().find(|s| s.name == GENERAL_SHIFT_NAME))
        .cloned();

    match shift {
        Some(shift) => Some(ResolvedDay {
            shift,
            is_holiday,
            is_week_off,
        }),
        None => {
            debug!(
                employee_id = %employee.id,
                %date,
                "no shift resolves for employee-day, skipping"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn make_shift(id: &str, name: &str) -> Shift {
        Shift {
            id: id.to_string(),
            name: name.to_string(),
            entry: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            exit: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }
    }

    fn make_employee(assignments: [Vec<String>; 7]) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            week_off: [true, false, false, false, false, false, false],
            shift_assignments: assignments,
            policy_id: None,
            leave_balance: Decimal::ZERO,
        }
    }

    fn tuesday() -> NaiveDate {
        // 2026-01-13 is a Tuesday (weekday index 2).
        NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()
    }

    #[test]
    fn test_weekday_index_starts_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        for offset in 0..7 {
            let date = sunday + chrono::Days::new(offset);
            assert_eq!(weekday_index(date), offset as usize);
        }
    }

    /// RS-001: first assigned shift that resolves wins
    #[test]
    fn test_first_matching_assignment_wins() {
        let shifts = vec![make_shift("a", "A"), make_shift("b", "B")];
        let mut assignments: [Vec<String>; 7] = Default::default();
        assignments[2] = vec!["b".to_string(), "a".to_string()];
        let employee = make_employee(assignments);

        let resolved = resolve_day(&employee, tuesday(), &shifts, &[]).unwrap();
        assert_eq!(resolved.shift.id, "b");
    }

    /// RS-002: unknown assignment ids are skipped, not fatal
    #[test]
    fn test_unknown_assignment_skipped() {
        let shifts = vec![make_shift("a", "A")];
        let mut assignments: [Vec<String>; 7] = Default::default();
        assignments[2] = vec!["ghost".to_string(), "a".to_string()];
        let employee = make_employee(assignments);

        let resolved = resolve_day(&employee, tuesday(), &shifts, &[]).unwrap();
        assert_eq!(resolved.shift.id, "a");
    }

    /// RS-003: empty assignment falls back to GeneralShift
    #[test]
    fn test_general_shift_fallback() {
        let shifts = vec![
            make_shift("a", "A"),
            make_shift("gen", GENERAL_SHIFT_NAME),
        ];
        let employee = make_employee(Default::default());

        let resolved = resolve_day(&employee, tuesday(), &shifts, &[]).unwrap();
        assert_eq!(resolved.shift.id, "gen");
    }

    /// RS-004: no assignment and no GeneralShift is a resolution gap
    #[test]
    fn test_resolution_gap_returns_none() {
        let shifts = vec![make_shift("a", "A")];
        let employee = make_employee(Default::default());

        assert!(resolve_day(&employee, tuesday(), &shifts, &[]).is_none());
    }

    #[test]
    fn test_holiday_and_week_off_flags() {
        let shifts = vec![make_shift("gen", GENERAL_SHIFT_NAME)];
        let employee = make_employee(Default::default());
        let holidays = vec![Holiday {
            date: tuesday(),
            name: Some("Festival".to_string()),
        }];

        let resolved = resolve_day(&employee, tuesday(), &shifts, &holidays).unwrap();
        assert!(resolved.is_holiday);
        assert!(!resolved.is_week_off);

        let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        let resolved = resolve_day(&employee, sunday, &shifts, &[]).unwrap();
        assert!(resolved.is_week_off);
        assert!(!resolved.is_holiday);
    }
}
