//! Freelance withholding tax calculation.
//!
//! This module computes the flat 3.3% withholding applied to instructors
//! paid as freelancers rather than as insured employees.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the flat freelance withholding rate (3.3%).
pub fn withholding_tax_rate() -> Decimal {
    Decimal::new(33, 3)
}

/// The result of a withholding tax calculation.
///
/// `tax + net_amount` equals the gross amount the calculation was given,
/// exactly; the floor happens on the tax side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Withholding tax, floored to a whole won.
    pub tax: Decimal,
    /// Gross minus tax.
    pub net_amount: Decimal,
}

/// Computes the 3.3% freelance withholding on a gross amount.
///
/// The tax is floored (rounded toward negative infinity) so the tax
/// authority never receives a fractional won; the sub-won remainder stays
/// in the take-home amount. The deliberate policy is "round down the tax,
/// not the take-home".
///
/// There are no error conditions; zero in yields zero out, and a negative
/// gross flows through unvalidated.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax_33;
/// use rust_decimal::Decimal;
///
/// let result = calculate_tax_33(Decimal::from(1_000_000));
/// assert_eq!(result.tax, Decimal::from(33_000));
/// assert_eq!(result.net_amount, Decimal::from(967_000));
/// ```
pub fn calculate_tax_33(gross_amount: Decimal) -> TaxResult {
    let tax = (gross_amount * withholding_tax_rate()).floor();

    TaxResult {
        tax,
        net_amount: gross_amount - tax,
    }
}
