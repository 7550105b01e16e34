//! Date range and aggregation-cycle models.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert_eq!(range.iter_days().count(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Checks whether a date falls within the range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the days of the range in ascending order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut current = Some(self.start);
        let end = self.end;
        std::iter::from_fn(move || {
            let date = current?;
            if date > end {
                return None;
            }
            current = date.checked_add_days(Days::new(1));
            Some(date)
        })
    }
}

/// Period-level aggregation flags.
///
/// Whether week-offs and holidays count toward payable days is decided per
/// payroll cycle, not per day; the aggregator applies these flags over the
/// per-day defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePolicy {
    /// Count unworked week-off days toward payable days.
    #[serde(default = "default_true")]
    pub include_weekoffs: bool,
    /// Count unworked holidays toward payable days.
    #[serde(default = "default_true")]
    pub include_holidays: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CyclePolicy {
    fn default() -> Self {
        Self {
            include_weekoffs: true,
            include_holidays: true,
        }
    }
}
