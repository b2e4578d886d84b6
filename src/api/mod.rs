//! HTTP API module for the gross-up calculation engine.
//!
//! This module provides the REST endpoints for single and batch salary
//! calculations and for employee record management.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, CalculationRequest, EmployeeRequest};
pub use response::{
    ApiError, BatchCalculationResponse, BatchRowResponse, CalculationResponse, SalaryQuoteView,
};
pub use state::AppState;
