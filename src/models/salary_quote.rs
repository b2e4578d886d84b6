//! The salary quote produced by a gross-up calculation.

use serde::{Deserialize, Serialize};

use super::SalaryComponents;

/// The complete result of a gross-up calculation.
///
/// The input components are echoed verbatim alongside the derived figures
/// so the quote serializes as a single flat record. A quote is constructed
/// fresh on each calculation and never mutated.
///
/// All amounts are unrounded double-precision values; rounding to two
/// decimal places happens only at presentation time.
///
/// # Example
///
/// ```
/// use grossup_engine::calculation::compute_gross_up;
/// use grossup_engine::models::SalaryComponents;
///
/// let components: SalaryComponents =
///     serde_json::from_str(r#"{"basic_pay": 30000}"#).unwrap();
/// let quote = compute_gross_up(&components).unwrap();
///
/// let json = serde_json::to_value(&quote).unwrap();
/// assert_eq!(json["basic_pay"], 30000.0);
/// assert_eq!(json["total_inclusions"], 30000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryQuote {
    /// The input components, echoed unchanged.
    #[serde(flatten)]
    pub components: SalaryComponents,
    /// Sum of basic pay and all inclusion allowances.
    pub total_inclusions: f64,
    /// The rate-based deduction, always calculated on basic pay alone.
    pub deduction_amount: f64,
    /// The grossed-up salary: `total_inclusions / (1 - rate)`.
    pub gross_salary: f64,
    /// The rate-based deduction plus the flat other deductions.
    pub total_deductions: f64,
    /// The take-home amount: `gross_salary - total_deductions`.
    pub net_salary: f64,
}
