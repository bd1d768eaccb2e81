//! Salary computation result models.
//!
//! This module contains the [`SalaryComputation`] type and the insurance
//! breakdown structures attached to it. Every pay-structure path produces
//! the same shape, so downstream consumers (the salary record writer, the
//! payroll breakdown view) never branch on how a salary was computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the employee-side rates consulted for one insurance
/// calculation.
///
/// Lets callers assert which table produced a breakdown without
/// recomputing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRates {
    /// National pension employee rate.
    pub national_pension_rate: Decimal,
    /// Health insurance employee rate.
    pub health_insurance_rate: Decimal,
    /// Long-term-care employee ratio of the health-insurance amount.
    pub long_term_care_rate: Decimal,
    /// Employment insurance employee rate.
    pub employment_insurance_rate: Decimal,
}

/// The employer-paid share of the insurance programs.
///
/// These amounts are never deducted from the instructor; they are reported
/// so the academy can see its own cost of an insured salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerBurden {
    /// Employer national pension contribution in won.
    pub national_pension: Decimal,
    /// Employer health insurance contribution in won.
    pub health_insurance: Decimal,
    /// Employer long-term-care contribution in won.
    pub long_term_care: Decimal,
    /// Employer employment insurance contribution in won.
    pub employment_insurance: Decimal,
    /// Industrial accident insurance in won; employer-only, no employee
    /// share exists.
    pub industrial_accident: Decimal,
}

/// Full breakdown of a four-insurance deduction.
///
/// All amounts are whole won; each component was floored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceResult {
    /// National pension deduction in won.
    pub national_pension: Decimal,
    /// Health insurance deduction in won.
    pub health_insurance: Decimal,
    /// Long-term-care deduction in won, derived from the floored
    /// health-insurance amount.
    pub long_term_care: Decimal,
    /// Employment insurance deduction in won.
    pub employment_insurance: Decimal,
    /// Sum of the four employee-side deductions.
    pub total_deduction: Decimal,
    /// Take-home amount, truncated down to the nearest 10 won.
    pub net_amount: Decimal,
    /// The employer-side mirror of the deduction.
    pub employer_burden: EmployerBurden,
    /// Sum of the five employer-side components.
    pub total_employer_burden: Decimal,
    /// The rates that produced this breakdown.
    pub details: AppliedRates,
}

/// The uniform output of every pay-structure path.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryComputation;
/// use rust_decimal::Decimal;
///
/// let computation = SalaryComputation {
///     base_amount: Decimal::from(2_400_000),
///     gross_amount: Decimal::from(2_400_000),
///     tax_amount: Decimal::ZERO,
///     insurance_amount: Decimal::ZERO,
///     net_amount: Decimal::from(2_400_000),
///     insurance_details: None,
/// };
/// assert_eq!(computation.gross_amount, computation.net_amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputation {
    /// Pay before adjustments: rate × units, or the monthly base.
    pub base_amount: Decimal,
    /// `base + bonus − deduction`. Never clamped; a deduction larger than
    /// base + bonus flows through as a negative gross.
    pub gross_amount: Decimal,
    /// Withholding tax deducted. Zero unless the 3.3% treatment applies.
    pub tax_amount: Decimal,
    /// Total insurance deducted. Zero unless the insurance treatment
    /// applies.
    pub insurance_amount: Decimal,
    /// Take-home pay.
    pub net_amount: Decimal,
    /// Full insurance breakdown when the insurance treatment applies,
    /// `null` otherwise; the payroll view renders it when present.
    pub insurance_details: Option<InsuranceResult>,
}
