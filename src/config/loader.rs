//! Configuration loading.
//!
//! A tenant's configuration is a directory of YAML files:
//! `tenant.yaml`, `shifts.yaml`, `policies.yaml`, `employees.yaml`, and
//! an optional `holidays.yaml`. The loader parses them into model types
//! and can seed a [`MemoryStore`] for demo and test setups.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Holiday, Policy, Shift};
use crate::stores::MemoryStore;

use super::types::{
    EmployeesFile, HolidaysFile, PoliciesFile, RawPolicy, RawShift, ShiftsFile, TenantConfig,
};

/// A fully-parsed tenant configuration.
#[derive(Debug)]
pub struct TenantBundle {
    /// Tenant identity and cycle flags.
    pub tenant: TenantConfig,
    /// Shift definitions.
    pub shifts: Vec<Shift>,
    /// Holiday calendar, possibly empty.
    pub holidays: Vec<Holiday>,
    /// Attendance policies.
    pub policies: Vec<Policy>,
    /// Employees.
    pub employees: Vec<Employee>,
}

/// Loads tenant configuration from a directory of YAML files.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: display.clone(),
    })?;
    serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
        path: display,
        message: e.to_string(),
    })
}

impl ConfigLoader {
    /// Creates a loader rooted at a tenant configuration directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Parses the whole directory into a bundle.
    pub fn load(&self) -> EngineResult<TenantBundle> {
        let tenant: TenantConfig = read_yaml(&self.dir.join("tenant.yaml"))?;

        let shifts_file: ShiftsFile = read_yaml(&self.dir.join("shifts.yaml"))?;
        let shifts = shifts_file
            .shifts
            .into_iter()
            .map(RawShift::into_shift)
            .collect::<EngineResult<Vec<_>>>()?;

        let policies_file: PoliciesFile = read_yaml(&self.dir.join("policies.yaml"))?;
        let policies = policies_file
            .policies
            .into_iter()
            .map(RawPolicy::into_policy)
            .collect::<EngineResult<Vec<_>>>()?;

        let employees_file: EmployeesFile = read_yaml(&self.dir.join("employees.yaml"))?;

        // The holiday calendar is the one optional file.
        let holidays_path = self.dir.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            let file: HolidaysFile = read_yaml(&holidays_path)?;
            file.holidays
        } else {
            Vec::new()
        };

        Ok(TenantBundle {
            tenant,
            shifts,
            holidays,
            policies,
            employees: employees_file.employees,
        })
    }

    /// Loads the directory and seeds a memory store with its contents.
    ///
    /// Returns the tenant config so callers know the tenant id and cycle
    /// flags they just seeded.
    pub fn seed(&self, store: &MemoryStore) -> EngineResult<TenantConfig> {
        let bundle = self.load()?;
        let tenant_id = &bundle.tenant.tenant_id;
        info!(
            %tenant_id,
            shifts = bundle.shifts.len(),
            policies = bundle.policies.len(),
            employees = bundle.employees.len(),
            holidays = bundle.holidays.len(),
            "seeding store from configuration"
        );
        store.seed_shifts(tenant_id, bundle.shifts);
        store.seed_holidays(tenant_id, bundle.holidays);
        store.seed_policies(tenant_id, bundle.policies);
        store.seed_employees(tenant_id, bundle.employees);
        Ok(bundle.tenant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::EmployeeDirectory;

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/tenant_default")
    }

    #[test]
    fn test_load_bundled_configuration() {
        let bundle = ConfigLoader::new(fixture_dir()).load().unwrap();
        assert_eq!(bundle.tenant.tenant_id, "tenant_default");
        assert!(!bundle.shifts.is_empty());
        assert!(!bundle.policies.is_empty());
        assert!(!bundle.employees.is_empty());
        assert!(bundle.shifts.iter().any(|s| s.is_general()));
    }

    #[test]
    fn test_seed_populates_store() {
        let store = MemoryStore::new();
        let tenant = ConfigLoader::new(fixture_dir()).seed(&store).unwrap();
        let employees = store.list_employees(&tenant.tenant_id).unwrap();
        assert!(!employees.is_empty());
    }

    #[test]
    fn test_missing_directory_is_config_not_found() {
        let err = ConfigLoader::new("/nonexistent").load().unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }
}
