//! Attendance policy models.
//!
//! A policy configures how late arrival, early departure, and insufficient
//! working hours are handled for the employees it applies to. Allowance
//! counters always apply to an aggregation period (a payroll cycle), not
//! to individual days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a penalty is applied once the period allowance is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyMode {
    /// Deduct a day fraction from payable days (loss of pay).
    Lop,
    /// Convert the excess duration into leave-type units.
    Leave,
    /// Accumulate a running total duration across the period.
    Fixed,
    /// Add a configured fixed currency amount to the record.
    Amount,
}

/// The day fraction deducted by `lop`-mode penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayFraction {
    /// A quarter of a payable day.
    Quarter,
    /// Half of a payable day.
    Half,
    /// A whole payable day.
    #[default]
    Full,
}

impl DayFraction {
    /// The numeric fraction of a payable day.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::DayFraction;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DayFraction::Quarter.fraction(), Decimal::new(25, 2));
    /// assert_eq!(DayFraction::Half.fraction(), Decimal::new(50, 2));
    /// assert_eq!(DayFraction::Full.fraction(), Decimal::ONE);
    /// ```
    pub fn fraction(&self) -> Decimal {
        match self {
            DayFraction::Quarter => Decimal::new(25, 2),
            DayFraction::Half => Decimal::new(50, 2),
            DayFraction::Full => Decimal::ONE,
        }
    }
}

/// A single threshold rule within a policy.
///
/// The meaning of `limit_minutes` depends on the check the rule is
/// attached to: for late arrival and early departure it is the tolerated
/// deviation from the shift boundary; for the working-hours check it is
/// the minimum required working duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRule {
    /// The threshold in minutes (see type-level docs for semantics).
    pub limit_minutes: i64,
    /// Violations tolerated per aggregation period before penalties apply.
    pub allowed_count: u32,
    /// How the penalty is applied once the allowance is exceeded.
    pub mode: PenaltyMode,
    /// Day fraction used by `lop` mode.
    #[serde(default)]
    pub day_fraction: DayFraction,
    /// Currency amount used by `amount` mode.
    #[serde(default)]
    pub amount: Decimal,
    /// Leave-type code used by `leave` mode (e.g., "CL", "SL").
    #[serde(default)]
    pub leave_type: Option<String>,
}

/// Per-employee (or policy-group) attendance policy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier for the policy.
    pub id: String,
    /// Minimum working duration per day, in minutes.
    pub min_working_minutes: i64,
    /// Rule for late arrival, if the check is enabled.
    #[serde(default)]
    pub late: Option<PenaltyRule>,
    /// Rule for early departure, if the check is enabled.
    #[serde(default)]
    pub early: Option<PenaltyRule>,
    /// Rule for insufficient working hours, if the check is enabled.
    #[serde(default)]
    pub under_hours: Option<PenaltyRule>,
}
