//! Salary input components for the gross-up calculation.
//!
//! This module defines the SalaryComponents struct, the flat record of
//! named numeric fields that a calculation request supplies.

use serde::{Deserialize, Serialize};

/// The provident fund deduction percentage applied when none is supplied.
pub const DEFAULT_DEDUCTION_PERCENT: f64 = 12.0;

fn default_deduction_percent() -> f64 {
    DEFAULT_DEDUCTION_PERCENT
}

/// The salary inputs for a single gross-up calculation.
///
/// All amounts are currency-denominated, double-precision values. Only
/// `basic_pay` is required; every other field defaults when absent:
/// the deduction percentage to [`DEFAULT_DEDUCTION_PERCENT`], everything
/// else to zero.
///
/// # Example
///
/// ```
/// use grossup_engine::models::SalaryComponents;
///
/// let components: SalaryComponents =
///     serde_json::from_str(r#"{"basic_pay": 30000}"#).unwrap();
/// assert_eq!(components.basic_pay, 30000.0);
/// assert_eq!(components.deduction_percent, 12.0);
/// assert_eq!(components.hra, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Base pay. Required, must be strictly positive; the deduction
    /// amount is always calculated from this figure.
    pub basic_pay: f64,
    /// House rent allowance (inclusion component).
    #[serde(default)]
    pub hra: f64,
    /// Overtime pay (inclusion component).
    #[serde(default)]
    pub over_time: f64,
    /// Any further allowances (inclusion component).
    #[serde(default)]
    pub other_allowances: f64,
    /// Provident fund deduction percentage, in [0, 100).
    #[serde(default = "default_deduction_percent")]
    pub deduction_percent: f64,
    /// Flat deduction not subject to the gross-up.
    #[serde(default)]
    pub other_deductions: f64,
}

impl SalaryComponents {
    /// Returns the deduction percentage as a proportional rate.
    pub fn deduction_rate(&self) -> f64 {
        self.deduction_percent / 100.0
    }
}
