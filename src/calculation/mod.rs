//! The attendance computation pipeline.
//!
//! Classification flows bottom-up: the resolver fixes the calendar
//! context of an employee-day, the punch reducer collapses raw punches
//! to an envelope, the classifier turns both into a record while the
//! penalty engine threads period counters through the days, and the
//! orchestrator runs the whole thing batch-wise against the stores. The
//! aggregator reads the persisted records back into period summaries.

mod aggregator;
mod classifier;
mod orchestrator;
mod penalty;
mod punch_reducer;
mod resolver;

pub use aggregator::summarize;
pub use classifier::{DayContext, classify_day};
pub use orchestrator::{
    BatchFailure, DEFAULT_BATCH_SIZE, DEFAULT_INSERT_BATCH_SIZE, RecomputeOptions,
    RecomputeReport, RecomputeRequest, recompute,
};
pub use penalty::{DayMetrics, PenaltyOutcome, ViolationCounters, apply_policy};
pub use punch_reducer::{ReducedPunches, reduce_punches};
pub use resolver::{ResolvedDay, resolve_day, weekday_index};
