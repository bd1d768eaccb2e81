//! Hourly pay structure calculation.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::{SalaryComputation, TaxType};

use super::settlement::settle;

/// Computes an hourly instructor's salary for a period.
///
/// `base = hourly_rate × hours_worked`, then
/// `gross = base + bonus − deduction`, then the tax treatment is applied
/// to gross. Inputs are assumed pre-validated non-negative by the caller;
/// the engine does not reject negatives, and a deduction larger than
/// base + bonus flows through as a negative gross.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_salary;
/// use payroll_engine::config::InsuranceRates;
/// use payroll_engine::models::TaxType;
/// use rust_decimal::Decimal;
///
/// let rates = InsuranceRates::korea_2026();
/// let result = calculate_hourly_salary(
///     Decimal::from(15_000),
///     Decimal::from(160),
///     TaxType::None,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &rates,
/// );
///
/// assert_eq!(result.base_amount, Decimal::from(2_400_000));
/// assert_eq!(result.net_amount, Decimal::from(2_400_000));
/// ```
pub fn calculate_hourly_salary(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    tax_type: TaxType,
    bonus: Decimal,
    deduction: Decimal,
    rates: &InsuranceRates,
) -> SalaryComputation {
    let base_amount = hourly_rate * hours_worked;
    let gross_amount = base_amount + bonus - deduction;

    settle(base_amount, gross_amount, tax_type, rates)
}
