//! Error types for the gross-up calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation and
//! employee record handling.

use thiserror::Error;

/// The main error type for the gross-up calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use grossup_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     message: "Basic Pay must be greater than 0".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid salary input: Basic Pay must be greater than 0"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary input failed validation.
    ///
    /// This is the only error kind the calculator itself produces. The
    /// reason is human-readable and is surfaced to the caller verbatim.
    #[error("Invalid salary input: {message}")]
    InvalidInput {
        /// A description of what made the input invalid.
        message: String,
    },

    /// No employee record exists for the given code.
    #[error("Employee not found: {code}")]
    EmployeeNotFound {
        /// The employee code that was not found.
        code: String,
    },

    /// An employee record with the given code already exists.
    #[error("Employee already exists: {code}")]
    DuplicateEmployee {
        /// The employee code that was already present.
        code: String,
    },
}

impl EngineError {
    /// Creates an `InvalidInput` error from any displayable reason.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_reason() {
        let error = EngineError::invalid_input("deduction percent must be between 0 and 100");
        assert_eq!(
            error.to_string(),
            "Invalid salary input: deduction percent must be between 0 and 100"
        );
    }

    #[test]
    fn test_employee_not_found_displays_code() {
        let error = EngineError::EmployeeNotFound {
            code: "EMP042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP042");
    }

    #[test]
    fn test_duplicate_employee_displays_code() {
        let error = EngineError::DuplicateEmployee {
            code: "EMP001".to_string(),
        };
        assert_eq!(error.to_string(), "Employee already exists: EMP001");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::invalid_input("value must be numeric"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
