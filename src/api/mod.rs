//! HTTP API module for the Attendance Computation Engine.
//!
//! This module provides the REST API endpoints for triggering
//! recomputation runs and producing payroll-period summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RecomputeApiRequest, SummarizeRequest};
pub use response::{ApiError, SummarizeResponse};
pub use state::AppState;
