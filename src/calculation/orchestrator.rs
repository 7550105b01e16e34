//! Recomputation orchestration.
//!
//! A recomputation run replaces the computed attendance records for a
//! tenant over a date range: validate the request, delete the stale
//! computed records, re-classify every employee-day from punches and
//! reference data, and persist the fresh records in sub-batches. Manual
//! records are never touched; their dates are skipped entirely.
//!
//! Employees are processed in batches, but violation counters are scoped
//! per employee over the full range, so results never depend on how the
//! batches were cut.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, DateRange, Employee, Holiday, Policy, PunchLogEntry, Shift,
};
use crate::stores::TenantStores;

use super::classifier::{DayContext, classify_day};
use super::penalty::ViolationCounters;
use super::resolver::resolve_day;

/// Default number of employees processed per batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default number of records per persistence sub-batch.
pub const DEFAULT_INSERT_BATCH_SIZE: usize = 100;

/// A request to recompute attendance for a tenant over a range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// The tenant to recompute.
    pub tenant_id: String,
    /// Restrict the run to these employees; `None` means all.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    /// The date range to recompute, inclusive.
    pub range: DateRange,
}

/// Tuning knobs for a recomputation run.
#[derive(Debug, Clone, Copy)]
pub struct RecomputeOptions {
    /// Employees per batch.
    pub batch_size: usize,
    /// Records per persistence sub-batch.
    pub insert_batch_size: usize,
}

impl Default for RecomputeOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            insert_batch_size: DEFAULT_INSERT_BATCH_SIZE,
        }
    }
}

/// A batch (or employee) that failed without aborting the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    /// The employees affected by the failure.
    pub employee_ids: Vec<String>,
    /// What went wrong.
    pub message: String,
}

/// The outcome of a recomputation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeReport {
    /// Correlation id of the run.
    pub run_id: Uuid,
    /// The tenant that was recomputed.
    pub tenant_id: String,
    /// The range that was recomputed.
    pub range: DateRange,
    /// Employees that completed classification.
    pub employees_processed: usize,
    /// Fresh records persisted.
    pub records_written: usize,
    /// Stale computed records deleted.
    pub records_deleted: usize,
    /// Employee-days skipped because a manual record owns the date.
    pub manual_days_skipped: usize,
    /// Employee-days skipped because no shift resolved.
    pub unresolved_days_skipped: usize,
    /// Failures that did not abort the run.
    pub failures: Vec<BatchFailure>,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}

fn validate(request: &RecomputeRequest, options: &RecomputeOptions) -> EngineResult<()> {
    if request.tenant_id.trim().is_empty() {
        return Err(EngineError::Validation {
            field: "tenant_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if request.range.end < request.range.start {
        return Err(EngineError::Validation {
            field: "range.end".to_string(),
            message: "must not precede range.start".to_string(),
        });
    }
    if let Some(ids) = &request.employee_ids {
        if ids.is_empty() {
            return Err(EngineError::Validation {
                field: "employee_ids".to_string(),
                message: "must not be an empty list".to_string(),
            });
        }
    }
    if options.batch_size == 0 || options.insert_batch_size == 0 {
        return Err(EngineError::Validation {
            field: "batch_size".to_string(),
            message: "must be positive".to_string(),
        });
    }
    Ok(())
}

struct BatchOutcome {
    records: Vec<AttendanceRecord>,
    deleted: usize,
    manual_days_skipped: usize,
    unresolved_days_skipped: usize,
    employees_processed: usize,
    failures: Vec<BatchFailure>,
}

fn process_batch(
    stores: &impl TenantStores,
    request: &RecomputeRequest,
    batch: &[Employee],
    shifts: &[Shift],
    holidays: &[Holiday],
) -> EngineResult<BatchOutcome> {
    let tenant_id = &request.tenant_id;
    let ids: Vec<String> = batch.iter().map(|e| e.id.clone()).collect();

    let existing = stores.query_records(tenant_id, &ids, request.range)?;
    let mut manual_dates: HashSet<(String, NaiveDate)> = HashSet::new();
    let mut stale_keys = Vec::new();
    for record in &existing {
        if record.is_manual() {
            manual_dates.insert((record.employee_id.clone(), record.date));
        } else {
            stale_keys.push(record.idempotency_key());
        }
    }
    let deleted = stores.delete_records(tenant_id, &stale_keys)?;

    let logs = stores.list_logs(tenant_id, &ids, request.range)?;
    let mut punches_by_day: HashMap<(String, NaiveDate), Vec<PunchLogEntry>> = HashMap::new();
    for log in logs {
        punches_by_day
            .entry((log.employee_id.clone(), log.date))
            .or_default()
            .push(log);
    }

    let mut outcome = BatchOutcome {
        records: Vec::new(),
        deleted,
        manual_days_skipped: 0,
        unresolved_days_skipped: 0,
        employees_processed: 0,
        failures: Vec::new(),
    };

    for employee in batch {
        let policy: Option<Policy> = match &employee.policy_id {
            Some(policy_id) => match stores.get_policy(tenant_id, policy_id)? {
                Some(policy) => Some(policy),
                None => {
                    let error = EngineError::PolicyNotFound {
                        policy_id: policy_id.clone(),
                    };
                    warn!(employee_id = %employee.id, %error, "skipping employee");
                    outcome.failures.push(BatchFailure {
                        employee_ids: vec![employee.id.clone()],
                        message: error.to_string(),
                    });
                    continue;
                }
            },
            None => None,
        };

        let mut counters = ViolationCounters::default();
        for date in request.range.iter_days() {
            if manual_dates.contains(&(employee.id.clone(), date)) {
                outcome.manual_days_skipped += 1;
                continue;
            }
            let Some(resolved) = resolve_day(employee, date, shifts, holidays) else {
                outcome.unresolved_days_skipped += 1;
                continue;
            };
            let punches = punches_by_day
                .get(&(employee.id.clone(), date))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let ctx = DayContext {
                employee,
                tenant_id,
                date,
                resolved: &resolved,
                punches,
                policy: policy.as_ref(),
            };
            outcome.records.push(classify_day(&ctx, &mut counters));
        }
        outcome.employees_processed += 1;
    }

    Ok(outcome)
}

/// Runs a full recomputation for the requested tenant and range.
///
/// Reference data problems for a batch are recorded as failures and the
/// run moves on to the next batch; only request validation and run-level
/// reference fetches abort the whole run.
pub fn recompute(
    stores: &impl TenantStores,
    request: &RecomputeRequest,
    options: &RecomputeOptions,
) -> EngineResult<RecomputeReport> {
    validate(request, options)?;
    let started = Instant::now();
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        tenant_id = %request.tenant_id,
        start = %request.range.start,
        end = %request.range.end,
        "starting recomputation run"
    );

    let reference = |error: EngineError| EngineError::ReferenceData {
        tenant_id: request.tenant_id.clone(),
        message: error.to_string(),
    };
    let mut employees = stores
        .list_employees(&request.tenant_id)
        .map_err(reference)?;
    if let Some(ids) = &request.employee_ids {
        employees.retain(|e| ids.contains(&e.id));
    }
    let shifts = stores.list_shifts(&request.tenant_id).map_err(reference)?;
    let holidays = stores
        .list_holidays(&request.tenant_id, request.range)
        .map_err(reference)?;

    let mut report = RecomputeReport {
        run_id,
        tenant_id: request.tenant_id.clone(),
        range: request.range,
        employees_processed: 0,
        records_written: 0,
        records_deleted: 0,
        manual_days_skipped: 0,
        unresolved_days_skipped: 0,
        failures: Vec::new(),
        elapsed_ms: 0,
    };

    for batch in employees.chunks(options.batch_size) {
        let outcome = match process_batch(stores, request, batch, &shifts, &holidays) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%run_id, %error, "batch failed");
                report.failures.push(BatchFailure {
                    employee_ids: batch.iter().map(|e| e.id.clone()).collect(),
                    message: error.to_string(),
                });
                continue;
            }
        };

        report.records_deleted += outcome.deleted;
        report.manual_days_skipped += outcome.manual_days_skipped;
        report.unresolved_days_skipped += outcome.unresolved_days_skipped;
        report.employees_processed += outcome.employees_processed;
        report.failures.extend(outcome.failures);

        for sub_batch in outcome.records.chunks(options.insert_batch_size) {
            match stores.bulk_insert(sub_batch) {
                Ok(written) => report.records_written += written,
                Err(error) => {
                    warn!(%run_id, %error, "insert sub-batch failed");
                    report.failures.push(BatchFailure {
                        employee_ids: sub_batch
                            .iter()
                            .map(|r| r.employee_id.clone())
                            .collect(),
                        message: error.to_string(),
                    });
                }
            }
        }
    }

    report.elapsed_ms = started.elapsed().as_millis() as u64;
    info!(
        %run_id,
        employees = report.employees_processed,
        written = report.records_written,
        deleted = report.records_deleted,
        failures = report.failures.len(),
        elapsed_ms = report.elapsed_ms,
        "recomputation run finished"
    );
    Ok(report)
}
