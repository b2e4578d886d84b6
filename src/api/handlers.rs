//! HTTP request handlers for the gross-up engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_batch, compute_gross_up};
use crate::models::{Employee, SalaryComponents};

use super::request::{BatchCalculationRequest, CalculationRequest, EmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, BatchCalculationResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(calculate_batch_handler))
        .route(
            "/employees",
            post(save_employee_handler).get(list_employees_handler),
        )
        .route(
            "/employees/:code",
            get(find_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .with_state(state)
}

/// Maps a JSON extraction failure onto the API error vocabulary.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else if body_text.contains("invalid type") {
                // A non-numeric value was supplied for a numeric field.
                ApiError::new("INVALID_INPUT", "value must be numeric")
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a flat record of salary components and returns the rounded
/// gross-up quote.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let components: SalaryComponents = request.into();
    match compute_gross_up(&components) {
        Ok(quote) => {
            let response = CalculationResponse::new(&quote);
            info!(
                correlation_id = %correlation_id,
                calculation_id = %response.calculation_id,
                gross_salary = quote.gross_salary,
                net_salary = quote.net_salary,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /calculate/batch endpoint.
///
/// Every row is calculated independently; the response always carries a
/// per-row outcome so a bad row never hides the good ones.
async fn calculate_batch_handler(
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rows: Vec<SalaryComponents> = request.rows.into_iter().map(Into::into).collect();
    let results = compute_batch(&rows);
    let response = BatchCalculationResponse::from_results(&results);

    info!(
        correlation_id = %correlation_id,
        rows = response.rows.len(),
        succeeded = response.succeeded,
        failed = response.failed,
        "Batch calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /employees endpoint.
async fn save_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee: Employee = request.into();
    let code = employee.code.clone();
    match state.employees().save(employee) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, code = %code, "Employee saved");
            StatusCode::CREATED.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee save failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /employees endpoint.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.employees().list() {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /employees/:code endpoint.
async fn find_employee_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.employees().find(&code) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for PUT /employees/:code endpoint.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.code != code {
        let error = ApiError::new(
            "INVALID_INPUT",
            "employee code in path and body must match",
        );
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let employee: Employee = request.into();
    match state.employees().update(employee) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, code = %code, "Employee updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee update failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for DELETE /employees/:code endpoint.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.employees().delete(&code) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, code = %code, "Employee deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee delete failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
