//! Period summary model.
//!
//! A summary is a derived, non-persistent aggregate over a date range for
//! one employee. It is recomputed on every aggregation request; the
//! attendance record remains the canonical state.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceStatus, DateRange};

/// Payroll-facing aggregate of a range of attendance records.
///
/// Duration fields are formatted `HH:MM:SS`; hours may exceed 24 for
/// period totals. Overtime buckets carry the platform's external
/// camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The employee the summary covers.
    pub employee_id: String,
    /// The aggregation period.
    pub range: DateRange,
    /// Number of records per status code.
    pub status_counts: BTreeMap<AttendanceStatus, u32>,
    /// Total payable days after period-level adjustments.
    pub payable_days: Decimal,
    /// Late-arrival violations observed over the period.
    pub late_occurrences: u32,
    /// Early-departure violations observed over the period.
    pub early_occurrences: u32,
    /// Insufficient-working-hours violations observed over the period.
    pub under_hours_occurrences: u32,
    /// Late-arrival violations that exceeded the period allowance.
    pub penalized_late: u32,
    /// Early-departure violations that exceeded the period allowance.
    pub penalized_early: u32,
    /// Under-hours violations that exceeded the period allowance.
    pub penalized_under_hours: u32,
    /// Accumulated lateness over the period.
    pub total_late: String,
    /// Accumulated early departure over the period.
    pub total_early: String,
    /// Accumulated currency penalties over the period.
    pub penalty_amount: Decimal,
    /// Overtime worked on ordinary working days.
    #[serde(rename = "workingDayOT")]
    pub working_day_ot: String,
    /// Overtime worked on week-off days.
    #[serde(rename = "weekOffOT")]
    pub week_off_ot: String,
    /// Overtime worked on holidays.
    #[serde(rename = "holidayOT")]
    pub holiday_ot: String,
    /// Overtime worked on work-from-home days.
    #[serde(rename = "workFromHomeOT")]
    pub work_from_home_ot: String,
    /// Leave balance passed through from the employee configuration.
    pub leave_balance: Decimal,
}

impl AttendanceSummary {
    /// Creates a zeroed summary: all counters 0, all durations `00:00:00`.
    pub fn zeroed(employee_id: impl Into<String>, range: DateRange, leave_balance: Decimal) -> Self {
        Self {
            employee_id: employee_id.into(),
            range,
            status_counts: BTreeMap::new(),
            payable_days: Decimal::ZERO,
            late_occurrences: 0,
            early_occurrences: 0,
            under_hours_occurrences: 0,
            penalized_late: 0,
            penalized_early: 0,
            penalized_under_hours: 0,
            total_late: "00:00:00".to_string(),
            total_early: "00:00:00".to_string(),
            penalty_amount: Decimal::ZERO,
            working_day_ot: "00:00:00".to_string(),
            week_off_ot: "00:00:00".to_string(),
            holiday_ot: "00:00:00".to_string(),
            work_from_home_ot: "00:00:00".to_string(),
            leave_balance,
        }
    }

    /// The count recorded for a status (0 when absent from the map).
    pub fn status_count(&self, status: AttendanceStatus) -> u32 {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}
