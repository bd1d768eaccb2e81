//! Four-insurance deduction calculation.
//!
//! This module computes the four mandatory social-insurance deductions
//! (national pension, health insurance, long-term care, employment
//! insurance) on a gross amount, together with the employer-side burden
//! including employer-only industrial accident insurance.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::{AppliedRates, EmployerBurden, InsuranceResult};

/// Truncates an amount down to the nearest 10 won.
///
/// Salaries are disbursed in 10-won units; the truncated remainder is
/// absorbed, not carried to the next period.
fn truncate_to_nearest_10(amount: Decimal) -> Decimal {
    (amount / Decimal::TEN).floor() * Decimal::TEN
}

/// Computes the four statutory insurance deductions on a gross amount.
///
/// Each component is floored to a whole won independently, in a fixed
/// order. Long-term care is derived from the already-floored
/// health-insurance amount, not from gross; the double rounding differs
/// from a single multiplication and must not be collapsed. The net amount
/// is then truncated down to the nearest 10 won.
///
/// The employer mirror uses the employer-side rates with the same
/// floor-per-component policy, adding industrial accident insurance which
/// has no employee equivalent.
///
/// Total over its inputs: no validation, no error conditions, and a
/// negative gross flows through every step unclamped.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_four_insurance;
/// use payroll_engine::config::InsuranceRates;
/// use rust_decimal::Decimal;
///
/// let rates = InsuranceRates::korea_2026();
/// let result = calculate_four_insurance(Decimal::from(3_000_000), &rates);
///
/// assert_eq!(result.national_pension, Decimal::from(142_500));
/// assert_eq!(result.net_amount, Decimal::from(2_708_470));
/// assert_eq!(result.net_amount % Decimal::TEN, Decimal::ZERO);
/// ```
pub fn calculate_four_insurance(
    gross_amount: Decimal,
    rates: &InsuranceRates,
) -> InsuranceResult {
    let national_pension = (gross_amount * rates.national_pension.employee).floor();
    let employment_insurance = (gross_amount * rates.employment_insurance.employee).floor();
    let health_insurance = (gross_amount * rates.health_insurance.employee).floor();
    // Levied on the floored health-insurance amount, not on gross.
    let long_term_care =
        (health_insurance * rates.long_term_care.employee_ratio_of_health).floor();

    let total_deduction =
        national_pension + health_insurance + long_term_care + employment_insurance;
    let net_amount = truncate_to_nearest_10(gross_amount - total_deduction);

    let employer_pension = (gross_amount * rates.national_pension.employer).floor();
    let employer_health = (gross_amount * rates.health_insurance.employer).floor();
    let employer_long_term_care =
        (employer_health * rates.long_term_care.employer_ratio_of_health).floor();
    let employer_employment = (gross_amount * rates.employment_insurance.employer).floor();
    let industrial_accident = (gross_amount * rates.industrial_accident.employer).floor();

    let total_employer_burden = employer_pension
        + employer_health
        + employer_long_term_care
        + employer_employment
        + industrial_accident;

    InsuranceResult {
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        total_deduction,
        net_amount,
        employer_burden: EmployerBurden {
            national_pension: employer_pension,
            health_insurance: employer_health,
            long_term_care: employer_long_term_care,
            employment_insurance: employer_employment,
            industrial_accident,
        },
        total_employer_burden,
        details: AppliedRates {
            national_pension_rate: rates.national_pension.employee,
            health_insurance_rate: rates.health_insurance.employee,
            long_term_care_rate: rates.long_term_care.employee_ratio_of_health,
            employment_insurance_rate: rates.employment_insurance.employee,
        },
    }
}
