//! Response types for the gross-up engine API.
//!
//! This module defines the success envelopes, the error response
//! structures, and the presentation rounding: the engine computes in
//! unrounded double precision, and amounts are only rounded to two
//! decimal places here, on the way out.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryQuote;

/// Rounds an amount to two decimal places for presentation.
///
/// The fixed two-digit scale makes the value serialize as a string like
/// `"76136.36"` rather than a bare float.
fn currency(value: f64) -> Decimal {
    // Inputs are validated finite before a quote exists, so the
    // conversion cannot fail for any value we are handed here.
    let mut amount = Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    amount
}

/// A salary quote with every figure rounded for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryQuoteView {
    /// Base pay, echoed from the request.
    pub basic_pay: Decimal,
    /// House rent allowance, echoed from the request.
    pub hra: Decimal,
    /// Overtime pay, echoed from the request.
    pub over_time: Decimal,
    /// Other allowances, echoed from the request.
    pub other_allowances: Decimal,
    /// Deduction percentage, echoed from the request.
    pub deduction_percent: Decimal,
    /// Flat other deductions, echoed from the request.
    pub other_deductions: Decimal,
    /// Sum of all inclusion components.
    pub total_inclusions: Decimal,
    /// The rate-based deduction on basic pay.
    pub deduction_amount: Decimal,
    /// The grossed-up salary.
    pub gross_salary: Decimal,
    /// Rate-based plus flat deductions.
    pub total_deductions: Decimal,
    /// The take-home amount.
    pub net_salary: Decimal,
}

impl From<&SalaryQuote> for SalaryQuoteView {
    fn from(quote: &SalaryQuote) -> Self {
        SalaryQuoteView {
            basic_pay: currency(quote.components.basic_pay),
            hra: currency(quote.components.hra),
            over_time: currency(quote.components.over_time),
            other_allowances: currency(quote.components.other_allowances),
            deduction_percent: currency(quote.components.deduction_percent),
            other_deductions: currency(quote.components.other_deductions),
            total_inclusions: currency(quote.total_inclusions),
            deduction_amount: currency(quote.deduction_amount),
            gross_salary: currency(quote.gross_salary),
            total_deductions: currency(quote.total_deductions),
            net_salary: currency(quote.net_salary),
        }
    }
}

/// Success envelope for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The rounded salary quote.
    pub quote: SalaryQuoteView,
}

impl CalculationResponse {
    /// Wraps a computed quote in a response envelope.
    pub fn new(quote: &SalaryQuote) -> Self {
        CalculationResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            quote: quote.into(),
        }
    }
}

/// The outcome of a single batch row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRowResponse {
    /// The zero-based position of the row in the request.
    pub row: usize,
    /// The rounded quote, present when the row succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<SalaryQuoteView>,
    /// The error, present when the row failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Response body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationResponse {
    /// Per-row outcomes, in request order.
    pub rows: Vec<BatchRowResponse>,
    /// How many rows produced a quote.
    pub succeeded: usize,
    /// How many rows failed validation.
    pub failed: usize,
}

impl BatchCalculationResponse {
    /// Builds the per-row outcomes from batch calculation results.
    pub fn from_results(results: &[EngineResult<SalaryQuote>]) -> Self {
        let rows: Vec<BatchRowResponse> = results
            .iter()
            .enumerate()
            .map(|(row, result)| match result {
                Ok(quote) => BatchRowResponse {
                    row,
                    quote: Some(quote.into()),
                    error: None,
                },
                Err(err) => BatchRowResponse {
                    row,
                    quote: None,
                    error: Some(ApiError::from_engine_error(err)),
                },
            })
            .collect();

        let succeeded = rows.iter().filter(|r| r.quote.is_some()).count();
        let failed = rows.len() - succeeded;

        BatchCalculationResponse {
            rows,
            succeeded,
            failed,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error body for an engine error, without a status.
    pub fn from_engine_error(error: &EngineError) -> Self {
        match error {
            // The validation reason is surfaced verbatim.
            EngineError::InvalidInput { message } => Self::new("INVALID_INPUT", message.clone()),
            EngineError::EmployeeNotFound { code } => Self::with_details(
                "EMPLOYEE_NOT_FOUND",
                format!("Employee not found: {}", code),
                "No record exists for the requested employee code",
            ),
            EngineError::DuplicateEmployee { code } => Self::with_details(
                "DUPLICATE_EMPLOYEE",
                format!("Employee already exists: {}", code),
                "A record with this employee code is already stored",
            ),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            EngineError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::DuplicateEmployee { .. } => StatusCode::CONFLICT,
        };
        ApiErrorResponse {
            status,
            error: ApiError::from_engine_error(&error),
        }
    }
}
