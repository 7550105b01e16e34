//! On-disk configuration shapes.
//!
//! Configuration files carry times and durations as `HH:MM:SS` strings;
//! the raw shapes here convert them into the minute-based model types at
//! load time so nothing downstream ever parses a time string again.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CyclePolicy, DayFraction, Employee, Holiday, PenaltyMode, PenaltyRule, Policy, Shift,
};
use crate::timeutil::parse_hms;

/// `tenant.yaml`: tenant identity and cycle flags.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantConfig {
    /// The tenant namespace all other files belong to.
    pub tenant_id: String,
    /// Period-level aggregation flags.
    #[serde(default)]
    pub cycle: CyclePolicy,
}

/// `shifts.yaml` wrapper.
#[derive(Debug, Deserialize)]
pub struct ShiftsFile {
    /// The tenant's shift definitions.
    pub shifts: Vec<RawShift>,
}

/// A shift definition with textual times.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Human-readable shift name.
    pub name: String,
    /// Shift start, `HH:MM:SS`.
    pub entry: String,
    /// Shift end, `HH:MM:SS`. May precede `entry` for overnight shifts.
    pub exit: String,
}

fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
        })
}

impl RawShift {
    /// Converts into the model shift, parsing the time strings.
    pub fn into_shift(self) -> EngineResult<Shift> {
        Ok(Shift {
            entry: parse_time_of_day(&self.entry)?,
            exit: parse_time_of_day(&self.exit)?,
            id: self.id,
            name: self.name,
        })
    }
}

/// `holidays.yaml` wrapper.
#[derive(Debug, Deserialize)]
pub struct HolidaysFile {
    /// The tenant's holiday calendar.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// `policies.yaml` wrapper.
#[derive(Debug, Deserialize)]
pub struct PoliciesFile {
    /// The tenant's attendance policies.
    pub policies: Vec<RawPolicy>,
}

/// A threshold rule with a textual duration limit.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    /// The threshold duration, `HH:MM:SS`.
    pub limit: String,
    /// Violations tolerated per period.
    pub allowed_count: u32,
    /// Penalty mode once the allowance is exceeded.
    pub mode: PenaltyMode,
    /// Day fraction for `lop` mode.
    #[serde(default)]
    pub day_fraction: DayFraction,
    /// Currency amount for `amount` mode.
    #[serde(default)]
    pub amount: Decimal,
    /// Leave-type code for `leave` mode.
    #[serde(default)]
    pub leave_type: Option<String>,
}

impl RawRule {
    fn into_rule(self) -> EngineResult<PenaltyRule> {
        Ok(PenaltyRule {
            limit_minutes: parse_hms(&self.limit)?,
            allowed_count: self.allowed_count,
            mode: self.mode,
            day_fraction: self.day_fraction,
            amount: self.amount,
            leave_type: self.leave_type,
        })
    }
}

/// A policy with textual durations.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPolicy {
    /// Unique identifier for the policy.
    pub id: String,
    /// Minimum working duration per day, `HH:MM:SS`.
    pub min_working_hours: String,
    /// Late-arrival rule.
    #[serde(default)]
    pub late: Option<RawRule>,
    /// Early-departure rule.
    #[serde(default)]
    pub early: Option<RawRule>,
    /// Working-hours rule.
    #[serde(default)]
    pub under_hours: Option<RawRule>,
}

impl RawPolicy {
    /// Converts into the model policy, parsing all duration strings.
    pub fn into_policy(self) -> EngineResult<Policy> {
        Ok(Policy {
            min_working_minutes: parse_hms(&self.min_working_hours)?,
            late: self.late.map(RawRule::into_rule).transpose()?,
            early: self.early.map(RawRule::into_rule).transpose()?,
            under_hours: self.under_hours.map(RawRule::into_rule).transpose()?,
            id: self.id,
        })
    }
}

/// `employees.yaml` wrapper. Employees need no conversion.
#[derive(Debug, Deserialize)]
pub struct EmployeesFile {
    /// The tenant's employees.
    pub employees: Vec<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_shift_conversion() {
        let raw = RawShift {
            id: "night".to_string(),
            name: "NightShift".to_string(),
            entry: "22:00:00".to_string(),
            exit: "06:00:00".to_string(),
        };
        let shift = raw.into_shift().unwrap();
        assert_eq!(shift.duration_minutes(), 480);
    }

    #[test]
    fn test_raw_shift_rejects_bad_time() {
        let raw = RawShift {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            entry: "9am".to_string(),
            exit: "18:00:00".to_string(),
        };
        assert!(raw.into_shift().is_err());
    }

    #[test]
    fn test_raw_policy_conversion() {
        let yaml = r#"
id: standard
min_working_hours: "09:00:00"
late:
  limit: "00:15:00"
  allowed_count: 2
  mode: lop
  day_fraction: half
"#;
        let raw: RawPolicy = serde_yaml::from_str(yaml).unwrap();
        let policy = raw.into_policy().unwrap();
        assert_eq!(policy.min_working_minutes, 540);
        let late = policy.late.unwrap();
        assert_eq!(late.limit_minutes, 15);
        assert_eq!(late.day_fraction, DayFraction::Half);
    }

    #[test]
    fn test_tenant_config_cycle_defaults() {
        let config: TenantConfig = serde_yaml::from_str("tenant_id: acme").unwrap();
        assert!(config.cycle.include_weekoffs);
        assert!(config.cycle.include_holidays);
    }
}
