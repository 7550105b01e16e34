//! HTTP request handlers for the Attendance Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{recompute, summarize};
use crate::error::EngineError;
use crate::models::AttendanceSummary;
use crate::stores::{AttendanceStore, EmployeeDirectory, PolicyStore};

use super::request::{RecomputeApiRequest, SummarizeRequest};
use super::response::{ApiError, ApiErrorResponse, SummarizeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recompute", post(recompute_handler))
        .route("/summarize", post(summarize_handler))
        .with_state(state)
}

fn json_error_response(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Unwraps a JSON body, mapping axum rejections onto API errors.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(json_error_response(error))
        }
    }
}

/// Handler for POST /recompute endpoint.
///
/// Accepts a recomputation request and returns the run report.
async fn recompute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recompute request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };
    let (engine_request, options) = request.into_parts();

    match recompute(state.store(), &engine_request, &options) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %report.run_id,
                records_written = report.records_written,
                failures = report.failures.len(),
                "Recompute completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Recompute failed");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /summarize endpoint.
///
/// Aggregates the persisted attendance records of a tenant into one
/// period summary per employee.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match build_summaries(&state, &request) {
        Ok(summaries) => {
            info!(
                correlation_id = %correlation_id,
                tenant_id = %request.tenant_id,
                employees = summaries.len(),
                "Summarize completed"
            );
            let range = request.range();
            let response = SummarizeResponse {
                tenant_id: request.tenant_id,
                range,
                summaries,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Summarize failed");
            engine_error_response(err)
        }
    }
}

fn build_summaries(
    state: &AppState,
    request: &SummarizeRequest,
) -> Result<Vec<AttendanceSummary>, EngineError> {
    if request.tenant_id.trim().is_empty() {
        return Err(EngineError::Validation {
            field: "tenant_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if request.end_date < request.start_date {
        return Err(EngineError::Validation {
            field: "end_date".to_string(),
            message: "must not precede start_date".to_string(),
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

    let store = state.store();
    let range = request.range();
    let mut employees = store.list_employees(&request.tenant_id)?;
    if let Some(ids) = &request.employee_ids {
        employees.retain(|e| ids.contains(&e.id));
    }
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    let mut summaries = Vec::with_capacity(employees.len());
    for employee in &employees {
        let records =
            store.query_records(&request.tenant_id, &[employee.id.clone()], range)?;
        let policy = match &employee.policy_id {
            Some(policy_id) => {
                let policy = store.get_policy(&request.tenant_id, policy_id)?;
                if policy.is_none() {
                    warn!(
                        employee_id = %employee.id,
                        %policy_id,
                        "policy reference unresolved, summarizing without policy"
                    );
                }
                policy
            }
            None => None,
        };
        summaries.push(summarize(
            employee,
            &records,
            policy.as_ref(),
            range,
            &request.cycle,
        ));
    }
    Ok(summaries)
}
