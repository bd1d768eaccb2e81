//! Monthly pay structure calculation.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::{SalaryComputation, TaxType};

use super::settlement::settle;

/// Computes a monthly-salaried instructor's pay for a period.
///
/// Unlike the hourly and per-class paths there is no multiplicand: the
/// base amount is the fixed monthly salary itself. Bonus and deduction
/// adjust it into gross, and the tax treatment is applied to gross.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_monthly_salary;
/// use payroll_engine::config::InsuranceRates;
/// use payroll_engine::models::TaxType;
/// use rust_decimal::Decimal;
///
/// let rates = InsuranceRates::korea_2026();
/// let result = calculate_monthly_salary(
///     Decimal::from(3_000_000),
///     TaxType::None,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &rates,
/// );
///
/// assert_eq!(result.base_amount, Decimal::from(3_000_000));
/// assert_eq!(result.net_amount, Decimal::from(3_000_000));
/// ```
pub fn calculate_monthly_salary(
    base_salary: Decimal,
    tax_type: TaxType,
    bonus: Decimal,
    deduction: Decimal,
    rates: &InsuranceRates,
) -> SalaryComputation {
    let base_amount = base_salary;
    let gross_amount = base_amount + bonus - deduction;

    settle(base_amount, gross_amount, tax_type, rates)
}
