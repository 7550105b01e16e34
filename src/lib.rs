//! Attendance Computation and Reconciliation Engine
//!
//! This crate turns raw time-clock punches into canonical per-day
//! attendance records for a multi-tenant workforce platform, applies
//! threshold-based penalty policies over payroll periods, and aggregates
//! the records into payroll-facing period summaries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod stores;
pub mod timeutil;
