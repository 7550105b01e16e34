//! Punch log models.
//!
//! Raw time-clock events as delivered by the external punch log store.
//! Logs are append-only and ordered by timestamp; a day may carry
//! arbitrarily many entries for one employee.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The direction of a punch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchAction {
    /// A clock-in event.
    In,
    /// A clock-out event.
    Out,
}

/// A single raw time-clock event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchLogEntry {
    /// The employee who punched.
    pub employee_id: String,
    /// The attendance date the punch belongs to.
    pub date: NaiveDate,
    /// The moment the punch was recorded.
    pub timestamp: NaiveDateTime,
    /// Whether the punch was a clock-in or clock-out.
    pub action: PunchAction,
    /// The capture channel (e.g., "biometric", "mobile", "web").
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punch_action_serialization() {
        assert_eq!(serde_json::to_string(&PunchAction::In).unwrap(), "\"in\"");
        assert_eq!(serde_json::to_string(&PunchAction::Out).unwrap(), "\"out\"");
    }

    #[test]
    fn test_deserialize_punch_entry() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2026-01-13",
            "timestamp": "2026-01-13T09:30:00",
            "action": "in",
            "mode": "biometric"
        }"#;

        let entry: PunchLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.employee_id, "emp_001");
        assert_eq!(entry.action, PunchAction::In);
        assert_eq!(entry.mode, "biometric");
    }

    #[test]
    fn test_round_trip() {
        let entry = PunchLogEntry {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            timestamp: NaiveDateTime::parse_from_str(
                "2026-01-13 17:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            action: PunchAction::Out,
            mode: "mobile".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: PunchLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
