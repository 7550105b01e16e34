//! Threshold-based penalty evaluation.
//!
//! Policies are evaluated per day, but their allowance counters live at
//! the aggregation period: the caller threads one [`ViolationCounters`]
//! through every day of the period, in date order. A violation always
//! increments its counter; a penalty is applied only once the counter
//! exceeds the rule's allowed count. Checks run late, then early, then
//! under-hours.

use rust_decimal::Decimal;

use crate::codec::{Deduction, DeductionFraction, DeductionKind, DeductionReason};
use crate::models::{DayFraction, PenaltyMode, PenaltyRule, Policy};
use crate::timeutil::excess_to_day_fraction;

/// Leave-type code assumed when a `leave`-mode rule names none.
const DEFAULT_LEAVE_TYPE: &str = "CL";

/// Period-scoped violation state for one employee.
///
/// Carries the occurrence counters and the running totals written by
/// `fixed`-mode rules. Reset at the start of every aggregation period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationCounters {
    /// Late-arrival violations so far this period.
    pub late: u32,
    /// Early-departure violations so far this period.
    pub early: u32,
    /// Under-hours violations so far this period.
    pub under_hours: u32,
    /// Running total minutes accumulated by a `fixed`-mode late rule.
    pub fixed_late_minutes: i64,
    /// Running total minutes accumulated by a `fixed`-mode early rule.
    pub fixed_early_minutes: i64,
    /// Running total minutes accumulated by a `fixed`-mode under-hours rule.
    pub fixed_under_minutes: i64,
}

/// The measured quantities a policy is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMetrics {
    /// Worked duration in minutes.
    pub working_minutes: i64,
    /// Minutes arrived after shift start.
    pub late_minutes: i64,
    /// Minutes departed before shift end.
    pub early_minutes: i64,
}

/// The result of evaluating a policy for one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenaltyOutcome {
    /// Deductions to encode into the record's context annotation.
    pub deductions: Vec<Deduction>,
    /// Day fraction to subtract from the record's payable day.
    pub payable_deduction: Decimal,
    /// Currency amount to add to the record's penalty amount.
    pub penalty_amount: Decimal,
}

fn day_fraction_token(fraction: DayFraction) -> DeductionFraction {
    match fraction {
        DayFraction::Quarter => DeductionFraction::Quarter,
        DayFraction::Half => DeductionFraction::Half,
        DayFraction::Full => DeductionFraction::Whole,
    }
}

fn apply_rule(
    rule: &PenaltyRule,
    excess_minutes: i64,
    counter: &mut u32,
    fixed_total: &mut i64,
    reason: DeductionReason,
    outcome: &mut PenaltyOutcome,
) {
    *counter += 1;
    if *counter <= rule.allowed_count {
        return;
    }

    match rule.mode {
        PenaltyMode::Lop => {
            outcome.payable_deduction += rule.day_fraction.fraction();
            outcome.deductions.push(Deduction {
                fraction: day_fraction_token(rule.day_fraction),
                kind: DeductionKind::Lop,
                reason,
            });
        }
        PenaltyMode::Leave => {
            let fraction = excess_to_day_fraction(excess_minutes);
            let code = rule
                .leave_type
                .clone()
                .unwrap_or_else(|| DEFAULT_LEAVE_TYPE.to_string());
            outcome.deductions.push(Deduction {
                fraction: DeductionFraction::from_decimal(fraction),
                kind: DeductionKind::Leave(code),
                reason,
            });
        }
        PenaltyMode::Fixed => {
            *fixed_total += excess_minutes;
            outcome.deductions.push(Deduction {
                fraction: DeductionFraction::Whole,
                kind: DeductionKind::Duration(*fixed_total),
                reason,
            });
        }
        PenaltyMode::Amount => {
            outcome.penalty_amount += rule.amount;
        }
    }
}

/// Evaluates a policy against one day's metrics.
///
/// Mutates the period counters: every violation is counted even while
/// still inside the allowance. The under-hours check compares worked
/// minutes against the rule's limit; the shortfall is its excess.
pub fn apply_policy(
    policy: &Policy,
    metrics: &DayMetrics,
    counters: &mut ViolationCounters,
) -> PenaltyOutcome {
    let mut outcome = PenaltyOutcome::default();

    if let Some(rule) = &policy.late {
        if metrics.late_minutes > rule.limit_minutes {
            apply_rule(
                rule,
                metrics.late_minutes - rule.limit_minutes,
                &mut counters.late,
                &mut counters.fixed_late_minutes,
                DeductionReason::DueToLate,
                &mut outcome,
            );
        }
    }

    if let Some(rule) = &policy.early {
        if metrics.early_minutes > rule.limit_minutes {
            apply_rule(
                rule,
                metrics.early_minutes - rule.limit_minutes,
                &mut counters.early,
                &mut counters.fixed_early_minutes,
                DeductionReason::Early,
                &mut outcome,
            );
        }
    }

    if let Some(rule) = &policy.under_hours {
        if metrics.working_minutes < rule.limit_minutes {
            apply_rule(
                rule,
                rule.limit_minutes - metrics.working_minutes,
                &mut counters.under_hours,
                &mut counters.fixed_under_minutes,
                DeductionReason::UnderHours,
                &mut outcome,
            );
        }
    }

    outcome
}
