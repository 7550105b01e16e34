//! Tenant configuration: YAML file shapes and the directory loader.

mod loader;
mod types;

pub use loader::{ConfigLoader, TenantBundle};
pub use types::{
    EmployeesFile, HolidaysFile, PoliciesFile, RawPolicy, RawRule, RawShift, ShiftsFile,
    TenantConfig,
};
