//! Application state for the Attendance Computation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::stores::MemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the seeded store backing every tenant.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a new application state around a store.
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
