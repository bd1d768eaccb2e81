//! Instructor salary dispatch.
//!
//! This module routes a period's work data to the pay-structure
//! calculator selected by the instructor's salary type.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{InstructorPayProfile, PeriodWorkData, SalaryComputation};

use super::hourly::calculate_hourly_salary;
use super::monthly::calculate_monthly_salary;
use super::per_class::calculate_per_class_salary;

/// Computes an instructor's salary for a period.
///
/// Branches once on `profile.salary_type`; each call is independent and
/// idempotent. Missing numeric fields are coerced to zero so an absent
/// rate never fails a payroll run; an unrecognized salary *type* is a
/// caller contract violation and returns
/// [`EngineError::UnknownSalaryType`], the engine's only computation-time
/// error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_instructor_salary;
/// use payroll_engine::config::InsuranceRates;
/// use payroll_engine::models::{InstructorPayProfile, PeriodWorkData, TaxType};
/// use rust_decimal::Decimal;
///
/// let rates = InsuranceRates::korea_2026();
/// let profile = InstructorPayProfile {
///     salary_type: "hourly".to_string(),
///     hourly_rate: Some(Decimal::from(15_000)),
///     base_salary: None,
///     tax_type: TaxType::None,
/// };
/// let work = PeriodWorkData {
///     total_hours: Some(Decimal::from(100)),
///     total_classes: None,
/// };
///
/// let result =
///     calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates)
///         .unwrap();
/// assert_eq!(result.base_amount, Decimal::from(1_500_000));
/// ```
pub fn calculate_instructor_salary(
    profile: &InstructorPayProfile,
    work_data: &PeriodWorkData,
    bonus: Decimal,
    deduction: Decimal,
    rates: &InsuranceRates,
) -> EngineResult<SalaryComputation> {
    match profile.salary_type.as_str() {
        "hourly" => Ok(calculate_hourly_salary(
            profile.hourly_rate.unwrap_or(Decimal::ZERO),
            work_data.total_hours.unwrap_or(Decimal::ZERO),
            profile.tax_type,
            bonus,
            deduction,
            rates,
        )),
        // per_class consumes the same rate field as hourly; the upstream
        // instructor record has no separate per-class column.
        "per_class" => Ok(calculate_per_class_salary(
            profile.hourly_rate.unwrap_or(Decimal::ZERO),
            work_data.total_classes.unwrap_or(Decimal::ZERO),
            profile.tax_type,
            bonus,
            deduction,
            rates,
        )),
        "monthly" => Ok(calculate_monthly_salary(
            profile.base_salary.unwrap_or(Decimal::ZERO),
            profile.tax_type,
            bonus,
            deduction,
            rates,
        )),
        other => Err(EngineError::UnknownSalaryType {
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> InsuranceRates {
        InsuranceRates::korea_2026()
    }

    fn profile(
        salary_type: &str,
        hourly_rate: Option<&str>,
        base_salary: Option<&str>,
        tax_type: TaxType,
    ) -> InstructorPayProfile {
        InstructorPayProfile {
            salary_type: salary_type.to_string(),
            hourly_rate: hourly_rate.map(dec),
            base_salary: base_salary.map(dec),
            tax_type,
        }
    }

    /// DS-001: hourly profile routes to the hourly path
    #[test]
    fn test_hourly_routing() {
        let profile = profile("hourly", Some("15000"), None, TaxType::None);
        let work = PeriodWorkData {
            total_hours: Some(dec("100")),
            total_classes: None,
        };

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(result.base_amount, dec("1500000"));
    }

    /// DS-002: per_class reads its rate from the hourly_rate field
    #[test]
    fn test_per_class_routing_reads_hourly_rate_field() {
        let profile = profile("per_class", Some("30000"), None, TaxType::Withholding);
        let work = PeriodWorkData {
            total_hours: None,
            total_classes: Some(dec("20")),
        };

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(result.base_amount, dec("600000"));
        // floor(600,000 * 0.033)
        assert_eq!(result.tax_amount, dec("19800"));
    }

    /// DS-003: monthly profile ignores work data
    #[test]
    fn test_monthly_routing() {
        let profile = profile("monthly", None, Some("3000000"), TaxType::Insurance);
        let work = PeriodWorkData::default();

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(result.base_amount, dec("3000000"));
        assert!(result.insurance_details.is_some());
    }

    /// DS-004: an unknown salary type is the dispatcher's one error
    #[test]
    fn test_unknown_salary_type_fails() {
        let profile = profile("unknown", None, None, TaxType::None);
        let work = PeriodWorkData::default();

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates());

        match result.unwrap_err() {
            EngineError::UnknownSalaryType { value } => {
                assert_eq!(value, "unknown");
            }
            other => panic!("Expected UnknownSalaryType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_salary_type_message() {
        let profile = profile("weekly", None, None, TaxType::None);
        let work = PeriodWorkData::default();

        let error =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap_err();

        assert!(error.to_string().contains("Unknown salary type"));
    }

    /// DS-005: a missing rate is coerced to zero, never an error
    #[test]
    fn test_missing_hourly_rate_defaults_to_zero() {
        let profile = profile("hourly", None, None, TaxType::None);
        let work = PeriodWorkData {
            total_hours: Some(dec("100")),
            total_classes: None,
        };

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(result.base_amount, Decimal::ZERO);
        assert_eq!(result.net_amount, Decimal::ZERO);
    }

    /// DS-006: missing work data is coerced to zero units
    #[test]
    fn test_missing_work_data_defaults_to_zero() {
        let profile = profile("hourly", Some("15000"), None, TaxType::None);
        let work = PeriodWorkData::default();

        let result =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(result.base_amount, Decimal::ZERO);
    }

    /// DS-007: bonus and deduction are forwarded to the selected path
    #[test]
    fn test_bonus_and_deduction_forwarded() {
        let profile = profile("monthly", None, Some("3000000"), TaxType::None);
        let work = PeriodWorkData::default();

        let result =
            calculate_instructor_salary(&profile, &work, dec("500000"), dec("100000"), &rates())
                .unwrap();

        assert_eq!(result.gross_amount, dec("3400000"));
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let profile = profile("per_class", Some("30000"), None, TaxType::Insurance);
        let work = PeriodWorkData {
            total_hours: None,
            total_classes: Some(dec("20")),
        };

        let first =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();
        let second =
            calculate_instructor_salary(&profile, &work, Decimal::ZERO, Decimal::ZERO, &rates())
                .unwrap();

        assert_eq!(first, second);
    }
}
