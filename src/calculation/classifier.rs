//! Day classification.
//!
//! Turns one employee-day (resolved calendar context plus raw punches)
//! into exactly one attendance record. Days without punches classify by
//! calendar alone; days with punches get measured against the shift and,
//! on ordinary working days, run through the penalty policy.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::codec::encode_annotation;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, Policy, PunchLogEntry,
};

use super::penalty::{DayMetrics, ViolationCounters, apply_policy};
use super::punch_reducer::reduce_punches;
use super::resolver::ResolvedDay;

/// Everything needed to classify one employee-day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The employee being classified.
    pub employee: &'a Employee,
    /// The tenant namespace.
    pub tenant_id: &'a str,
    /// The calendar day.
    pub date: NaiveDate,
    /// Resolved shift and calendar flags for the day.
    pub resolved: &'a ResolvedDay,
    /// Raw punches for the day, possibly empty.
    pub punches: &'a [PunchLogEntry],
    /// The applicable penalty policy, if any.
    pub policy: Option<&'a Policy>,
}

fn minutes_since_midnight_of(date: NaiveDate, ts: NaiveDateTime) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    (ts - midnight).num_minutes()
}

fn empty_day_record(ctx: &DayContext<'_>, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: ctx.employee.id.clone(),
        tenant_id: ctx.tenant_id.to_string(),
        date: ctx.date,
        status,
        context: status.context_word().to_string(),
        first_in: None,
        last_out: None,
        working_minutes: 0,
        overtime_minutes: 0,
        late_minutes: 0,
        early_minutes: 0,
        shift: Some(ctx.resolved.shift.clone()),
        penalty_amount: Decimal::ZERO,
        payable_day: status.default_payable_fraction(),
    }
}

/// Classifies one employee-day into an attendance record.
///
/// Without punches the calendar decides: holiday beats week-off beats
/// absent. With punches the day is a presence variant of the same
/// ordering, measured against the resolved shift. Overnight shifts are
/// measured on an extended axis where the shift end may pass 24:00, so a
/// 22:00 to 06:00 shift worked in full is 480 minutes with no early
/// departure.
///
/// Policy evaluation mutates the caller's period counters and only runs
/// for plain working days; presence on a week-off or holiday is never a
/// violation.
pub fn classify_day(
    ctx: &DayContext<'_>,
    counters: &mut ViolationCounters,
) -> AttendanceRecord {
    let Some(reduced) = reduce_punches(ctx.punches) else {
        let status = if ctx.resolved.is_holiday {
            AttendanceStatus::Holiday
        } else if ctx.resolved.is_week_off {
            AttendanceStatus::Weekoff
        } else {
            AttendanceStatus::Absent
        };
        return empty_day_record(ctx, status);
    };

    let status = if ctx.resolved.is_holiday {
        AttendanceStatus::HolidayPresent
    } else if ctx.resolved.is_week_off {
        AttendanceStatus::WeekoffPresent
    } else {
        AttendanceStatus::Present
    };

    let shift = &ctx.resolved.shift;
    let shift_start = shift.start_minutes();
    let shift_end = shift_start + shift.duration_minutes();
    let first_in_minutes = minutes_since_midnight_of(ctx.date, reduced.first_in);
    let last_out_minutes = minutes_since_midnight_of(ctx.date, reduced.last_out);

    let working_minutes = reduced.worked_minutes();
    let late_minutes = (first_in_minutes - shift_start).max(0);
    let early_minutes = (shift_end - last_out_minutes).max(0);
    let required_minutes = ctx
        .policy
        .map(|p| p.min_working_minutes)
        .unwrap_or_else(|| shift.duration_minutes());
    let overtime_minutes = (working_minutes - required_minutes).max(0);

    let metrics = DayMetrics {
        working_minutes,
        late_minutes,
        early_minutes,
    };
    let outcome = match ctx.policy {
        Some(policy) if status == AttendanceStatus::Present => {
            apply_policy(policy, &metrics, counters)
        }
        _ => Default::default(),
    };

    let payable_day =
        (status.default_payable_fraction() - outcome.payable_deduction).max(Decimal::ZERO);

    AttendanceRecord {
        employee_id: ctx.employee.id.clone(),
        tenant_id: ctx.tenant_id.to_string(),
        date: ctx.date,
        status,
        context: encode_annotation(status, &outcome.deductions),
        first_in: Some(reduced.first_in.time()),
        last_out: Some(reduced.last_out.time()),
        working_minutes,
        overtime_minutes,
        late_minutes,
        early_minutes,
        shift: Some(shift.clone()),
        penalty_amount: outcome.penalty_amount,
        payable_day,
    }
}
