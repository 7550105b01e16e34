//! Storage abstractions.
//!
//! The engine reads reference data (employees, shifts, holidays,
//! policies), reads punch logs, and reads/writes attendance records
//! through narrow traits so the computation pipeline never depends on a
//! concrete backend. The bundled [`MemoryStore`] backs tests and the
//! demo configuration.

mod memory;

pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, DateRange, Employee, Holiday, Policy, PunchLogEntry, Shift,
};

/// Read access to the tenant's employee directory.
pub trait EmployeeDirectory {
    /// Lists all employees of a tenant.
    fn list_employees(&self, tenant_id: &str) -> EngineResult<Vec<Employee>>;
}

/// Read access to the tenant's shift definitions and holiday calendar.
pub trait CalendarStore {
    /// Lists all shift definitions of a tenant.
    fn list_shifts(&self, tenant_id: &str) -> EngineResult<Vec<Shift>>;

    /// Lists the tenant's holidays falling within a range.
    fn list_holidays(&self, tenant_id: &str, range: DateRange) -> EngineResult<Vec<Holiday>>;
}

/// Read access to attendance policies.
pub trait PolicyStore {
    /// Fetches a policy by id. `Ok(None)` when the id is unknown.
    fn get_policy(&self, tenant_id: &str, policy_id: &str) -> EngineResult<Option<Policy>>;
}

/// Read access to raw punch logs.
pub trait PunchLogStore {
    /// Lists punches for a set of employees over a range, ordered by
    /// timestamp.
    fn list_logs(
        &self,
        tenant_id: &str,
        employee_ids: &[String],
        range: DateRange,
    ) -> EngineResult<Vec<PunchLogEntry>>;
}

/// Read/write access to computed attendance records.
///
/// Implementations must uphold the uniqueness invariant: at most one
/// record per idempotency key.
pub trait AttendanceStore {
    /// Queries records for a set of employees over a range.
    fn query_records(
        &self,
        tenant_id: &str,
        employee_ids: &[String],
        range: DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Deletes the records with the given idempotency keys. Missing keys
    /// are ignored. Returns the number actually deleted.
    fn delete_records(&self, tenant_id: &str, keys: &[String]) -> EngineResult<usize>;

    /// Inserts a batch of records, rejecting any whose idempotency key is
    /// already present. Returns the number inserted.
    fn bulk_insert(&self, records: &[AttendanceRecord]) -> EngineResult<usize>;
}

/// The full set of backends a recomputation run needs.
pub trait TenantStores:
    EmployeeDirectory + CalendarStore + PolicyStore + PunchLogStore + AttendanceStore
{
}

impl<T> TenantStores for T where
    T: EmployeeDirectory + CalendarStore + PolicyStore + PunchLogStore + AttendanceStore
{
}
