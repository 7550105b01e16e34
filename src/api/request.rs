//! Request types for the Attendance Computation Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{RecomputeOptions, RecomputeRequest};
use crate::models::{CyclePolicy, DateRange};

/// Body of `POST /recompute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeApiRequest {
    /// The tenant to recompute.
    pub tenant_id: String,
    /// Restrict the run to these employees; omitted means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ids: Option<Vec<String>>,
    /// First day of the range, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the range, inclusive.
    pub end_date: NaiveDate,
    /// Override the employee batch size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    /// Override the persistence sub-batch size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_batch_size: Option<usize>,
}

impl RecomputeApiRequest {
    /// Splits the API request into the engine request and options.
    pub fn into_parts(self) -> (RecomputeRequest, RecomputeOptions) {
        let defaults = RecomputeOptions::default();
        let options = RecomputeOptions {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            insert_batch_size: self.insert_batch_size.unwrap_or(defaults.insert_batch_size),
        };
        let request = RecomputeRequest {
            tenant_id: self.tenant_id,
            employee_ids: self.employee_ids,
            range: DateRange {
                start: self.start_date,
                end: self.end_date,
            },
        };
        (request, options)
    }
}

/// Body of `POST /summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The tenant to summarize.
    pub tenant_id: String,
    /// Restrict the summary to these employees; omitted means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ids: Option<Vec<String>>,
    /// First day of the period, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the period, inclusive.
    pub end_date: NaiveDate,
    /// Period-level aggregation flags; both default to true.
    #[serde(default)]
    pub cycle: CyclePolicy,
}

impl SummarizeRequest {
    /// The requested period as a range.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}
