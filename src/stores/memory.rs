//! In-memory store backing tests and the demo configuration.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, DateRange, Employee, Holiday, Policy, PunchLogEntry, Shift,
};

use super::{
    AttendanceStore, CalendarStore, EmployeeDirectory, PolicyStore, PunchLogStore,
};

#[derive(Debug, Default)]
struct TenantData {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    holidays: Vec<Holiday>,
    policies: HashMap<String, Policy>,
    punches: Vec<PunchLogEntry>,
    // Keyed by idempotency key; the map itself enforces uniqueness.
    records: HashMap<String, AttendanceRecord>,
}

/// A thread-safe in-memory implementation of every store trait.
///
/// Data is namespaced per tenant. Seeding methods replace (or extend)
/// the tenant's data wholesale; they are intended for configuration
/// loading and test setup, not concurrent mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tenants: RwLock<HashMap<String, TenantData>>,
}

fn lock_error() -> EngineError {
    EngineError::Store {
        message: "store lock poisoned".to_string(),
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a tenant's employee list.
    pub fn seed_employees(&self, tenant_id: &str, employees: Vec<Employee>) {
        if let Ok(mut tenants) = self.tenants.write() {
            tenants.entry(tenant_id.to_string()).or_default().employees = employees;
        }
    }

    /// Replaces a tenant's shift definitions.
    pub fn seed_shifts(&self, tenant_id: &str, shifts: Vec<Shift>) {
        if let Ok(mut tenants) = self.tenants.write() {
            tenants.entry(tenant_id.to_string()).or_default().shifts = shifts;
        }
    }

    /// Replaces a tenant's holiday calendar.
    pub fn seed_holidays(&self, tenant_id: &str, holidays: Vec<Holiday>) {
        if let Ok(mut tenants) = self.tenants.write() {
            tenants.entry(tenant_id.to_string()).or_default().holidays = holidays;
        }
    }

    /// Adds policies to a tenant, keyed by policy id.
    pub fn seed_policies(&self, tenant_id: &str, policies: Vec<Policy>) {
        if let Ok(mut tenants) = self.tenants.write() {
            let data = tenants.entry(tenant_id.to_string()).or_default();
            for policy in policies {
                data.policies.insert(policy.id.clone(), policy);
            }
        }
    }

    /// Appends punch log entries for a tenant.
    pub fn seed_punches(&self, tenant_id: &str, punches: Vec<PunchLogEntry>) {
        if let Ok(mut tenants) = self.tenants.write() {
            let data = tenants.entry(tenant_id.to_string()).or_default();
            data.punches.extend(punches);
            data.punches.sort_by_key(|p| p.timestamp);
        }
    }

    /// Inserts attendance records directly, bypassing uniqueness checks.
    /// Test and configuration seeding only.
    pub fn seed_records(&self, tenant_id: &str, records: Vec<AttendanceRecord>) {
        if let Ok(mut tenants) = self.tenants.write() {
            let data = tenants.entry(tenant_id.to_string()).or_default();
            for record in records {
                data.records.insert(record.idempotency_key(), record);
            }
        }
    }
}

impl EmployeeDirectory for MemoryStore {
    fn list_employees(&self, tenant_id: &str) -> EngineResult<Vec<Employee>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        Ok(tenants
            .get(tenant_id)
            .map(|t| t.employees.clone())
            .unwrap_or_default())
    }
}

impl CalendarStore for MemoryStore {
    fn list_shifts(&self, tenant_id: &str) -> EngineResult<Vec<Shift>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        Ok(tenants
            .get(tenant_id)
            .map(|t| t.shifts.clone())
            .unwrap_or_default())
    }

    fn list_holidays(&self, tenant_id: &str, range: DateRange) -> EngineResult<Vec<Holiday>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        Ok(tenants
            .get(tenant_id)
            .map(|t| {
                t.holidays
                    .iter()
                    .filter(|h| range.contains(h.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl PolicyStore for MemoryStore {
    fn get_policy(&self, tenant_id: &str, policy_id: &str) -> EngineResult<Option<Policy>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        Ok(tenants
            .get(tenant_id)
            .and_then(|t| t.policies.get(policy_id))
            .cloned())
    }
}

impl PunchLogStore for MemoryStore {
    fn list_logs(
        &self,
        tenant_id: &str,
        employee_ids: &[String],
        range: DateRange,
    ) -> EngineResult<Vec<PunchLogEntry>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        Ok(tenants
            .get(tenant_id)
            .map(|t| {
                t.punches
                    .iter()
                    .filter(|p| {
                        range.contains(p.date) && employee_ids.contains(&p.employee_id)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl AttendanceStore for MemoryStore {
    fn query_records(
        &self,
        tenant_id: &str,
        employee_ids: &[String],
        range: DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let tenants = self.tenants.read().map_err(|_| lock_error())?;
        let mut records: Vec<AttendanceRecord> = tenants
            .get(tenant_id)
            .map(|t| {
                t.records
                    .values()
                    .filter(|r| {
                        range.contains(r.date) && employee_ids.contains(&r.employee_id)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| (a.employee_id.as_str(), a.date).cmp(&(b.employee_id.as_str(), b.date)));
        Ok(records)
    }

    fn delete_records(&self, tenant_id: &str, keys: &[String]) -> EngineResult<usize> {
        let mut tenants = self.tenants.write().map_err(|_| lock_error())?;
        let Some(data) = tenants.get_mut(tenant_id) else {
            return Ok(0);
        };
        let mut deleted = 0;
        for key in keys {
            if data.records.remove(key).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn bulk_insert(&self, records: &[AttendanceRecord]) -> EngineResult<usize> {
        let mut tenants = self.tenants.write().map_err(|_| lock_error())?;
        for record in records {
            let data = tenants.entry(record.tenant_id.clone()).or_default();
            let key = record.idempotency_key();
            if data.records.contains_key(&key) {
                return Err(EngineError::Store {
                    message: format!("duplicate attendance record: {key}"),
                });
            }
            data.records.insert(key, record.clone());
        }
        Ok(records.len())
    }
}
