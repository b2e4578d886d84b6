//! The gross-up salary computation.
//!
//! When the take-home figure must be preserved, the gross salary is
//! derived from the inclusion components rather than the other way
//! around: `gross = inclusions / (1 - rate)`. After the rate-based
//! deduction is withheld from that gross, the employee keeps exactly the
//! intended inclusion total. The deduction amount itself is always
//! calculated on basic pay alone, never on the grossed-up figure.

use crate::error::{EngineError, EngineResult};
use crate::models::{SalaryComponents, SalaryQuote};

/// Computes a grossed-up salary quote from a set of salary components.
///
/// The computation is a pure, single-shot transformation: no I/O, no
/// shared state, and no partial results. All validation happens before
/// any output is produced.
///
/// # Arguments
///
/// * `components` - The salary inputs to quote
///
/// # Returns
///
/// Returns a fully populated [`SalaryQuote`], or `InvalidInput` if:
/// - any field is not a finite number
/// - `basic_pay` is not strictly positive
/// - `deduction_percent` lies outside [0, 100)
///
/// # Examples
///
/// ```
/// use grossup_engine::calculation::compute_gross_up;
/// use grossup_engine::models::SalaryComponents;
///
/// let components: SalaryComponents =
///     serde_json::from_str(r#"{"basic_pay": 30000, "deduction_percent": 12}"#).unwrap();
/// let quote = compute_gross_up(&components).unwrap();
///
/// assert_eq!(quote.total_inclusions, 30000.0);
/// assert_eq!(quote.deduction_amount, 3600.0);
/// assert!((quote.gross_salary - 34090.91).abs() < 0.01);
/// assert!((quote.net_salary - 30490.91).abs() < 0.01);
/// ```
pub fn compute_gross_up(components: &SalaryComponents) -> EngineResult<SalaryQuote> {
    validate(components)?;

    let rate = components.deduction_rate();

    let total_inclusions = components.basic_pay
        + components.hra
        + components.over_time
        + components.other_allowances;

    // Always on basic pay, never on the grossed-up salary.
    let deduction_amount = components.basic_pay * rate;

    let gross_salary = total_inclusions / (1.0 - rate);
    let total_deductions = deduction_amount + components.other_deductions;
    let net_salary = gross_salary - total_deductions;

    Ok(SalaryQuote {
        components: *components,
        total_inclusions,
        deduction_amount,
        gross_salary,
        total_deductions,
        net_salary,
    })
}

fn validate(components: &SalaryComponents) -> EngineResult<()> {
    let fields = [
        components.basic_pay,
        components.hra,
        components.over_time,
        components.other_allowances,
        components.deduction_percent,
        components.other_deductions,
    ];
    if fields.iter().any(|value| !value.is_finite()) {
        return Err(EngineError::invalid_input("value must be numeric"));
    }

    if components.basic_pay <= 0.0 {
        return Err(EngineError::invalid_input(
            "Basic Pay must be greater than 0",
        ));
    }

    if components.deduction_percent >= 100.0 {
        return Err(EngineError::invalid_input(
            "deduction percent cannot be 100% or more (division would be undefined)",
        ));
    }
    if components.deduction_percent < 0.0 {
        return Err(EngineError::invalid_input(
            "deduction percent must be between 0 and 100",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn components(
        basic_pay: f64,
        hra: f64,
        over_time: f64,
        other_allowances: f64,
        deduction_percent: f64,
        other_deductions: f64,
    ) -> SalaryComponents {
        SalaryComponents {
            basic_pay,
            hra,
            over_time,
            other_allowances,
            deduction_percent,
            other_deductions,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn invalid_input_message(result: EngineResult<SalaryQuote>) -> String {
        match result.unwrap_err() {
            EngineError::InvalidInput { message } => message,
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// GU-001: the fully populated scenario
    #[test]
    fn test_full_component_set() {
        let quote =
            compute_gross_up(&components(50000.0, 10000.0, 5000.0, 2000.0, 12.0, 1000.0)).unwrap();

        assert_eq!(quote.total_inclusions, 67000.0);
        assert_eq!(quote.deduction_amount, 6000.0);
        assert_eq!(quote.total_deductions, 7000.0);
        assert_close(quote.gross_salary, 76136.36);
        assert_close(quote.net_salary, 69136.36);
    }

    /// GU-002: basic pay alone, everything else defaulted
    #[test]
    fn test_basic_pay_only() {
        let quote = compute_gross_up(&components(30000.0, 0.0, 0.0, 0.0, 12.0, 0.0)).unwrap();

        assert_eq!(quote.total_inclusions, 30000.0);
        assert_eq!(quote.deduction_amount, 3600.0);
        assert_close(quote.gross_salary, 34090.91);
        assert_close(quote.net_salary, 30490.91);
    }

    /// GU-003: higher deduction percentage, no flat deductions
    #[test]
    fn test_fifteen_percent_deduction() {
        let quote =
            compute_gross_up(&components(60000.0, 15000.0, 0.0, 5000.0, 15.0, 0.0)).unwrap();

        assert_eq!(quote.total_inclusions, 80000.0);
        assert_eq!(quote.deduction_amount, 9000.0);
        assert_close(quote.gross_salary, 94117.65);
        assert_close(quote.net_salary, 85117.65);
    }

    /// GU-004: zero percent means the gross is exactly the inclusions
    #[test]
    fn test_zero_percent_deduction() {
        let quote = compute_gross_up(&components(40000.0, 8000.0, 0.0, 0.0, 0.0, 500.0)).unwrap();

        assert_eq!(quote.gross_salary, 48000.0);
        assert_eq!(quote.deduction_amount, 0.0);
        assert_eq!(quote.net_salary, 47500.0);
    }

    #[test]
    fn test_inputs_echoed_verbatim() {
        let input = components(50000.0, 10000.0, 5000.0, 2000.0, 12.0, 1000.0);
        let quote = compute_gross_up(&input).unwrap();
        assert_eq!(quote.components, input);
    }

    #[test]
    fn test_zero_basic_pay_is_rejected() {
        let result = compute_gross_up(&components(0.0, 10000.0, 0.0, 0.0, 12.0, 0.0));
        assert_eq!(
            invalid_input_message(result),
            "Basic Pay must be greater than 0"
        );
    }

    #[test]
    fn test_negative_basic_pay_is_rejected() {
        let result = compute_gross_up(&components(-1.0, 0.0, 0.0, 0.0, 12.0, 0.0));
        assert_eq!(
            invalid_input_message(result),
            "Basic Pay must be greater than 0"
        );
    }

    #[test]
    fn test_full_deduction_percent_is_rejected() {
        let result = compute_gross_up(&components(30000.0, 0.0, 0.0, 0.0, 100.0, 0.0));
        assert_eq!(
            invalid_input_message(result),
            "deduction percent cannot be 100% or more (division would be undefined)"
        );
    }

    #[test]
    fn test_over_full_deduction_percent_is_rejected() {
        let result = compute_gross_up(&components(30000.0, 0.0, 0.0, 0.0, 150.0, 0.0));
        assert_eq!(
            invalid_input_message(result),
            "deduction percent cannot be 100% or more (division would be undefined)"
        );
    }

    #[test]
    fn test_negative_deduction_percent_is_rejected() {
        let result = compute_gross_up(&components(30000.0, 0.0, 0.0, 0.0, -5.0, 0.0));
        assert_eq!(
            invalid_input_message(result),
            "deduction percent must be between 0 and 100"
        );
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let result = compute_gross_up(&components(30000.0, f64::NAN, 0.0, 0.0, 12.0, 0.0));
        assert_eq!(invalid_input_message(result), "value must be numeric");

        let result = compute_gross_up(&components(f64::INFINITY, 0.0, 0.0, 0.0, 12.0, 0.0));
        assert_eq!(invalid_input_message(result), "value must be numeric");
    }

    #[test]
    fn test_non_numeric_is_detected_before_range_checks() {
        // A NaN basic pay would slip past the positivity comparison, so
        // the numeric check has to come first.
        let result = compute_gross_up(&components(f64::NAN, 0.0, 0.0, 0.0, 150.0, 0.0));
        assert_eq!(invalid_input_message(result), "value must be numeric");
    }

    proptest! {
        /// Deducting the rate from the gross recovers the inclusions.
        #[test]
        fn prop_gross_up_preserves_inclusions(
            basic_pay in 1.0f64..500_000.0,
            hra in 0.0f64..200_000.0,
            over_time in 0.0f64..50_000.0,
            other_allowances in 0.0f64..50_000.0,
            deduction_percent in 0.0f64..99.0,
            other_deductions in 0.0f64..50_000.0,
        ) {
            let quote = compute_gross_up(&components(
                basic_pay,
                hra,
                over_time,
                other_allowances,
                deduction_percent,
                other_deductions,
            ))
            .unwrap();

            let retained = quote.gross_salary * (1.0 - deduction_percent / 100.0);
            prop_assert!(
                (retained - quote.total_inclusions).abs()
                    <= 1e-9 * quote.total_inclusions,
                "gross {} at {}% retained {}, inclusions {}",
                quote.gross_salary,
                deduction_percent,
                retained,
                quote.total_inclusions
            );
        }

        /// The net is the gross minus both deduction figures, exactly.
        #[test]
        fn prop_net_is_gross_minus_deductions(
            basic_pay in 1.0f64..500_000.0,
            deduction_percent in 0.0f64..99.0,
            other_deductions in 0.0f64..50_000.0,
        ) {
            let quote = compute_gross_up(&components(
                basic_pay,
                0.0,
                0.0,
                0.0,
                deduction_percent,
                other_deductions,
            ))
            .unwrap();

            prop_assert_eq!(
                quote.total_deductions,
                quote.deduction_amount + other_deductions
            );
            prop_assert_eq!(
                quote.net_salary,
                quote.gross_salary - quote.total_deductions
            );
        }

        /// Holding inclusions fixed, a higher deduction percentage
        /// strictly increases the gross.
        #[test]
        fn prop_gross_is_monotonic_in_percent(
            basic_pay in 1.0f64..500_000.0,
            deduction_percent in 0.0f64..90.0,
            bump in 1.0f64..9.0,
        ) {
            let lower = compute_gross_up(&components(
                basic_pay, 0.0, 0.0, 0.0, deduction_percent, 0.0,
            ))
            .unwrap();
            let higher = compute_gross_up(&components(
                basic_pay, 0.0, 0.0, 0.0, deduction_percent + bump, 0.0,
            ))
            .unwrap();

            prop_assert!(higher.gross_salary > lower.gross_salary);
        }
    }
}
