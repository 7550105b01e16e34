//! Attendance status and record models.
//!
//! The attendance record is the canonical computed (or manually-entered)
//! unit of state per (employee, date, tenant). A subset of status codes is
//! manual: those records are created by external approval workflows and
//! must never be overwritten or deleted by recomputation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Shift;

/// Attendance status codes.
///
/// Serialized with the external camelCase codes used by the platform
/// (`weekoffPresent`, `workFromHome`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    /// Punches exist on a working day.
    Present,
    /// No punches on a working day.
    Absent,
    /// A week-off day without punches.
    Weekoff,
    /// A week-off day with punches.
    WeekoffPresent,
    /// A company holiday without punches.
    Holiday,
    /// A company holiday with punches.
    HolidayPresent,
    /// Manual: approved work-from-home day.
    WorkFromHome,
    /// Manual: on-duty assignment away from the workplace.
    OnDuty,
    /// Manual: approved half day.
    HalfDay,
    /// Manual: approved paid leave.
    PaidLeave,
    /// Manual: approved unpaid leave.
    UnPaidLeave,
}

impl AttendanceStatus {
    /// The external camelCase code for this status.
    pub fn as_code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Weekoff => "weekoff",
            AttendanceStatus::WeekoffPresent => "weekoffPresent",
            AttendanceStatus::Holiday => "holiday",
            AttendanceStatus::HolidayPresent => "holidayPresent",
            AttendanceStatus::WorkFromHome => "workFromHome",
            AttendanceStatus::OnDuty => "onDuty",
            AttendanceStatus::HalfDay => "halfDay",
            AttendanceStatus::PaidLeave => "paidLeave",
            AttendanceStatus::UnPaidLeave => "unPaidLeave",
        }
    }

    /// Returns true for statuses owned by external approval workflows.
    ///
    /// Manual records are read-only inputs to recomputation: they are
    /// never deleted, and their dates are skipped during re-classification.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::PaidLeave.is_manual());
    /// assert!(!AttendanceStatus::Present.is_manual());
    /// ```
    pub fn is_manual(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::WorkFromHome
                | AttendanceStatus::OnDuty
                | AttendanceStatus::HalfDay
                | AttendanceStatus::PaidLeave
                | AttendanceStatus::UnPaidLeave
        )
    }

    /// The default context word written for a freshly-classified record.
    pub fn context_word(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Weekoff => "Weekoff",
            AttendanceStatus::WeekoffPresent => "WeekoffPresent",
            AttendanceStatus::Holiday => "Holiday",
            AttendanceStatus::HolidayPresent => "HolidayPresent",
            AttendanceStatus::WorkFromHome => "WFH",
            AttendanceStatus::OnDuty => "OnDuty",
            AttendanceStatus::HalfDay => "HalfDay",
            AttendanceStatus::PaidLeave => "PaidLeave",
            AttendanceStatus::UnPaidLeave => "UnPaidLeave",
        }
    }

    /// The per-day payable fraction before any period-level adjustment.
    ///
    /// Week-off and holiday inclusion into payable totals is a
    /// period-level policy decision; the per-day default counts worked
    /// days and plain week-offs, not unworked holidays.
    pub fn default_payable_fraction(&self) -> Decimal {
        match self {
            AttendanceStatus::Present
            | AttendanceStatus::Weekoff
            | AttendanceStatus::WeekoffPresent
            | AttendanceStatus::HolidayPresent
            | AttendanceStatus::WorkFromHome
            | AttendanceStatus::OnDuty
            | AttendanceStatus::PaidLeave => Decimal::ONE,
            AttendanceStatus::HalfDay => Decimal::new(5, 1),
            AttendanceStatus::Absent
            | AttendanceStatus::Holiday
            | AttendanceStatus::UnPaidLeave => Decimal::ZERO,
        }
    }
}

/// The computed (or manually-entered) attendance state for one
/// (employee, date, tenant).
///
/// At most one record may exist per (employee, date, tenant); the
/// [`idempotency_key`](AttendanceRecord::idempotency_key) enforces that
/// invariant in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The tenant namespace.
    pub tenant_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The attendance status code.
    pub status: AttendanceStatus,
    /// The encoded context annotation (see the codec module).
    pub context: String,
    /// Earliest punch of the day, if any.
    pub first_in: Option<NaiveTime>,
    /// Latest punch of the day, if any.
    pub last_out: Option<NaiveTime>,
    /// Worked duration in minutes.
    pub working_minutes: i64,
    /// Overtime beyond the policy minimum, in minutes.
    pub overtime_minutes: i64,
    /// Minutes arrived after shift start.
    pub late_minutes: i64,
    /// Minutes departed before shift end.
    pub early_minutes: i64,
    /// Snapshot of the shift the day was classified against.
    pub shift: Option<Shift>,
    /// Accumulated currency penalty for the day.
    pub penalty_amount: Decimal,
    /// Fraction of the day counted toward payroll.
    pub payable_day: Decimal,
}

impl AttendanceRecord {
    /// The deterministic key enforcing at-most-one-record per
    /// (employee, date, tenant).
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     tenant_id: "acme".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     status: AttendanceStatus::Present,
    ///     context: "Present".to_string(),
    ///     first_in: None,
    ///     last_out: None,
    ///     working_minutes: 0,
    ///     overtime_minutes: 0,
    ///     late_minutes: 0,
    ///     early_minutes: 0,
    ///     shift: None,
    ///     penalty_amount: Decimal::ZERO,
    ///     payable_day: Decimal::ONE,
    /// };
    /// assert_eq!(record.idempotency_key(), "2026-01-13_emp_001_acme");
    /// ```
    pub fn idempotency_key(&self) -> String {
        format!("{}_{}_{}", self.date, self.employee_id, self.tenant_id)
    }

    /// Returns true if this record is manual and protected from
    /// recomputation.
    pub fn is_manual(&self) -> bool {
        self.status.is_manual()
    }
}
