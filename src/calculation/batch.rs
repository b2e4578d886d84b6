//! Batch driver for the gross-up computation.
//!
//! Batch callers (a spreadsheet import, a payroll run) hand over a
//! collection of rows, each of which maps to one independent calculation.

use crate::error::EngineResult;
use crate::models::{SalaryComponents, SalaryQuote};

use super::compute_gross_up;

/// Computes a gross-up quote for every row of a batch.
///
/// Each row is processed independently of the others: one row failing
/// validation never affects the rest, and the result order matches the
/// input order. The caller decides whether to skip or re-submit failed
/// rows.
///
/// # Examples
///
/// ```
/// use grossup_engine::calculation::compute_batch;
/// use grossup_engine::models::SalaryComponents;
///
/// let rows: Vec<SalaryComponents> = serde_json::from_str(
///     r#"[{"basic_pay": 30000}, {"basic_pay": 0}]"#,
/// ).unwrap();
///
/// let results = compute_batch(&rows);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn compute_batch(rows: &[SalaryComponents]) -> Vec<EngineResult<SalaryQuote>> {
    rows.iter().map(compute_gross_up).collect()
}
