//! Period aggregation.
//!
//! Builds the payroll-facing summary for one employee over a date range.
//! Exceedance counts are recomputed fresh from the stored per-day metrics
//! rather than read back out of context annotations, so a summary is
//! always consistent with the records it covers regardless of how the
//! period boundaries were drawn when the records were computed.

use rust_decimal::Decimal;

use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, CyclePolicy, DateRange, Employee,
    Policy,
};
use crate::timeutil::format_minutes;

/// Summarizes an employee's attendance records over a range.
///
/// Records outside the range are ignored; the rest are walked in date
/// order. Whether unworked week-offs and holidays count toward payable
/// days comes from the cycle policy, overriding the per-day defaults.
pub fn summarize(
    employee: &Employee,
    records: &[AttendanceRecord],
    policy: Option<&Policy>,
    range: DateRange,
    cycle: &CyclePolicy,
) -> AttendanceSummary {
    let mut in_range: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.employee_id == employee.id && range.contains(r.date))
        .collect();
    in_range.sort_by_key(|r| r.date);

    let mut summary = AttendanceSummary::zeroed(&employee.id, range, employee.leave_balance);

    let mut total_late = 0i64;
    let mut total_early = 0i64;
    let mut working_day_ot = 0i64;
    let mut week_off_ot = 0i64;
    let mut holiday_ot = 0i64;
    let mut work_from_home_ot = 0i64;

    for record in &in_range {
        *summary.status_counts.entry(record.status).or_insert(0) += 1;

        summary.payable_days += match record.status {
            AttendanceStatus::Weekoff if !cycle.include_weekoffs => Decimal::ZERO,
            AttendanceStatus::Weekoff => Decimal::ONE,
            AttendanceStatus::Holiday if cycle.include_holidays => Decimal::ONE,
            _ => record.payable_day,
        };

        total_late += record.late_minutes;
        total_early += record.early_minutes;
        summary.penalty_amount += record.penalty_amount;

        match record.status {
            AttendanceStatus::Present => working_day_ot += record.overtime_minutes,
            AttendanceStatus::WeekoffPresent => week_off_ot += record.overtime_minutes,
            AttendanceStatus::HolidayPresent => holiday_ot += record.overtime_minutes,
            AttendanceStatus::WorkFromHome => work_from_home_ot += record.overtime_minutes,
            _ => {}
        }

        // Violations only arise on plain working days.
        if record.status != AttendanceStatus::Present {
            continue;
        }
        if let Some(policy) = policy {
            if let Some(rule) = &policy.late {
                if record.late_minutes > rule.limit_minutes {
                    summary.late_occurrences += 1;
                }
            }
            if let Some(rule) = &policy.early {
                if record.early_minutes > rule.limit_minutes {
                    summary.early_occurrences += 1;
                }
            }
            if let Some(rule) = &policy.under_hours {
                if record.working_minutes < rule.limit_minutes {
                    summary.under_hours_occurrences += 1;
                }
            }
        }
    }

    if let Some(policy) = policy {
        if let Some(rule) = &policy.late {
            summary.penalized_late = summary.late_occurrences.saturating_sub(rule.allowed_count);
        }
        if let Some(rule) = &policy.early {
            summary.penalized_early =
                summary.early_occurrences.saturating_sub(rule.allowed_count);
        }
        if let Some(rule) = &policy.under_hours {
            summary.penalized_under_hours = summary
                .under_hours_occurrences
                .saturating_sub(rule.allowed_count);
        }
    }

    summary.total_late = format_minutes(total_late);
    summary.total_early = format_minutes(total_early);
    summary.working_day_ot = format_minutes(working_day_ot);
    summary.week_off_ot = format_minutes(week_off_ot);
    summary.holiday_ot = format_minutes(holiday_ot);
    summary.work_from_home_ot = format_minutes(work_from_home_ot);

    summary
}
