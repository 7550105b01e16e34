//! Core data models for the Attendance Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod period;
mod policy;
mod punch;
mod shift;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use period::{CyclePolicy, DateRange};
pub use policy::{DayFraction, PenaltyMode, PenaltyRule, Policy};
pub use punch::{PunchAction, PunchLogEntry};
pub use shift::{GENERAL_SHIFT_NAME, Holiday, Shift};
pub use summary::AttendanceSummary;
