//! Configuration types for the statutory insurance rate table.
//!
//! This module contains the strongly-typed rate structures that are
//! deserialized from YAML configuration files. All rates are fractions
//! between 0 and 1, held as [`Decimal`] so no float rounding can creep in.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Employee/employer contribution split for one insurance program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ContributionSplit {
    /// Fraction of gross withheld from the employee.
    pub employee: Decimal,
    /// Fraction of gross paid by the employer.
    pub employer: Decimal,
}

/// Long-term-care contribution rates.
///
/// Long-term care is not levied on gross pay. Both ratios apply to the
/// already-computed health-insurance amount of the respective side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LongTermCareSplit {
    /// Employee ratio applied to the employee health-insurance amount.
    pub employee_ratio_of_health: Decimal,
    /// Employer ratio applied to the employer health-insurance amount.
    pub employer_ratio_of_health: Decimal,
}

/// Industrial accident insurance rate.
///
/// Employer-only by law; there is no employee share to model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IndustrialAccidentRate {
    /// Fraction of gross paid by the employer.
    pub employer: Decimal,
}

/// The complete statutory insurance rate table.
///
/// Constructed once at startup (from a YAML file or the built-in default)
/// and passed by reference into the insurance calculation. The table is
/// immutable and safe to share across threads without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InsuranceRates {
    /// National pension contribution rates.
    pub national_pension: ContributionSplit,
    /// Health insurance contribution rates.
    pub health_insurance: ContributionSplit,
    /// Long-term-care rates, as ratios of the health-insurance amount.
    pub long_term_care: LongTermCareSplit,
    /// Employment insurance contribution rates.
    pub employment_insurance: ContributionSplit,
    /// Industrial accident insurance rate (employer-only).
    pub industrial_accident: IndustrialAccidentRate,
}

impl InsuranceRates {
    /// Returns the 2026 statutory rate table.
    ///
    /// This is the table the engine falls back to when no rate file is
    /// loaded. Employer-side pension and health mirror the employee share
    /// per the 50/50 statutory split; the employer employment rate includes
    /// the employment-stability levy.
    pub fn korea_2026() -> Self {
        Self {
            national_pension: ContributionSplit {
                employee: Decimal::new(475, 4),
                employer: Decimal::new(475, 4),
            },
            health_insurance: ContributionSplit {
                employee: Decimal::new(3595, 5),
                employer: Decimal::new(3595, 5),
            },
            long_term_care: LongTermCareSplit {
                employee_ratio_of_health: Decimal::new(1314, 4),
                employer_ratio_of_health: Decimal::new(1314, 4),
            },
            employment_insurance: ContributionSplit {
                employee: Decimal::new(9, 3),
                employer: Decimal::new(115, 4),
            },
            industrial_accident: IndustrialAccidentRate {
                employer: Decimal::new(7, 3),
            },
        }
    }
}

/// Rate file structure (`insurance.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// The year these rates took effect.
    pub year: i32,
    /// The statutory notice the rates were transcribed from.
    pub source: String,
    /// The rate table itself.
    pub rates: InsuranceRates,
}
