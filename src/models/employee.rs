//! Employee model.
//!
//! This module defines the Employee struct representing a worker's
//! attendance-relevant configuration. Employees are owned by the external
//! employee directory and are immutable for the duration of a
//! computation run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to attendance computation.
///
/// Weekday-indexed arrays run Sunday through Saturday (index 0 = Sunday),
/// matching the weekday derivation used by the shift resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Weekly-off flags per weekday; `true` marks a week-off day.
    pub week_off: [bool; 7],
    /// Assigned shift ids per weekday. An empty list means the tenant's
    /// general shift applies for that weekday.
    #[serde(default)]
    pub shift_assignments: [Vec<String>; 7],
    /// Reference to the applicable penalty policy, if any.
    #[serde(default)]
    pub policy_id: Option<String>,
    /// Current leave balance, passed through to period summaries.
    #[serde(default)]
    pub leave_balance: Decimal,
}

impl Employee {
    /// Returns true if the given weekday (0 = Sunday) is a week-off day.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     week_off: [true, false, false, false, false, false, true],
    ///     shift_assignments: Default::default(),
    ///     policy_id: None,
    ///     leave_balance: Decimal::ZERO,
    /// };
    /// assert!(employee.is_week_off(0)); // Sunday
    /// assert!(!employee.is_week_off(3)); // Wednesday
    /// ```
    pub fn is_week_off(&self, weekday: usize) -> bool {
        self.week_off.get(weekday).copied().unwrap_or(false)
    }

    /// Returns the shift ids assigned for the given weekday (0 = Sunday).
    pub fn shifts_for_weekday(&self, weekday: usize) -> &[String] {
        self.shift_assignments
            .get(weekday)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            week_off: [true, false, false, false, false, false, true],
            shift_assignments: [
                vec![],
                vec!["day_shift".to_string()],
                vec!["day_shift".to_string()],
                vec!["day_shift".to_string()],
                vec!["day_shift".to_string()],
                vec!["day_shift".to_string()],
                vec![],
            ],
            policy_id: Some("standard".to_string()),
            leave_balance: Decimal::new(12, 0),
        }
    }

    #[test]
    fn test_week_off_flags() {
        let employee = create_test_employee();
        assert!(employee.is_week_off(0));
        assert!(employee.is_week_off(6));
        for weekday in 1..6 {
            assert!(!employee.is_week_off(weekday));
        }
    }

    #[test]
    fn test_week_off_out_of_range_is_false() {
        let employee = create_test_employee();
        assert!(!employee.is_week_off(7));
    }

    #[test]
    fn test_shifts_for_weekday() {
        let employee = create_test_employee();
        assert!(employee.shifts_for_weekday(0).is_empty());
        assert_eq!(employee.shifts_for_weekday(1), &["day_shift".to_string()]);
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_002",
            "week_off": [true, false, false, false, false, false, true],
            "shift_assignments": [[], ["s1", "s2"], [], [], [], [], []],
            "policy_id": "strict",
            "leave_balance": "8.5"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_002");
        assert_eq!(employee.shifts_for_weekday(1), &["s1", "s2"]);
        assert_eq!(employee.policy_id.as_deref(), Some("strict"));
        assert_eq!(employee.leave_balance, Decimal::new(85, 1));
    }

    #[test]
    fn test_deserialize_employee_defaults() {
        let json = r#"{
            "id": "emp_003",
            "week_off": [false, false, false, false, false, false, false]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.policy_id.is_none());
        assert_eq!(employee.leave_balance, Decimal::ZERO);
        assert!(employee.shifts_for_weekday(2).is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
