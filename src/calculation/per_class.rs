//! Per-class pay structure calculation.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::{SalaryComputation, TaxType};

use super::settlement::settle;

/// Computes a per-class instructor's salary for a period.
///
/// Structurally identical to the hourly path with the class count as the
/// multiplicand: `base = per_class_rate × class_count`, then
/// `gross = base + bonus − deduction`, then the tax treatment is applied
/// to gross. As with the hourly path, negative inputs are the caller's
/// responsibility and are not rejected here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_per_class_salary;
/// use payroll_engine::config::InsuranceRates;
/// use payroll_engine::models::TaxType;
/// use rust_decimal::Decimal;
///
/// let rates = InsuranceRates::korea_2026();
/// let result = calculate_per_class_salary(
///     Decimal::from(30_000),
///     Decimal::from(20),
///     TaxType::None,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &rates,
/// );
///
/// assert_eq!(result.base_amount, Decimal::from(600_000));
/// ```
pub fn calculate_per_class_salary(
    per_class_rate: Decimal,
    class_count: Decimal,
    tax_type: TaxType,
    bonus: Decimal,
    deduction: Decimal,
    rates: &InsuranceRates,
) -> SalaryComputation {
    let base_amount = per_class_rate * class_count;
    let gross_amount = base_amount + bonus - deduction;

    settle(base_amount, gross_amount, tax_type, rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> InsuranceRates {
        InsuranceRates::korea_2026()
    }

    /// PC-001: 30,000 won/class × 20 classes with no tax
    #[test]
    fn test_no_tax_identity() {
        let result = calculate_per_class_salary(
            dec("30000"),
            dec("20"),
            TaxType::None,
            Decimal::ZERO,
            Decimal::ZERO,
            &rates(),
        );

        assert_eq!(result.base_amount, dec("600000"));
        assert_eq!(result.net_amount, dec("600000"));
    }

    /// PC-002: 3.3% withholding applied to gross
    #[test]
    fn test_withholding_tax_applied() {
        let result = calculate_per_class_salary(
            dec("50000"),
            dec("10"),
            TaxType::Withholding,
            Decimal::ZERO,
            Decimal::ZERO,
            &rates(),
        );

        assert_eq!(result.tax_amount, dec("16500"));
        assert_eq!(result.net_amount, dec("483500"));
    }

    /// PC-003: bonus and deduction compose into gross
    #[test]
    fn test_bonus_and_deduction_compose() {
        let result = calculate_per_class_salary(
            dec("30000"),
            dec("20"),
            TaxType::None,
            dec("100000"),
            dec("30000"),
            &rates(),
        );

        assert_eq!(result.gross_amount, dec("670000"));
    }

    #[test]
    fn test_insurance_attaches_breakdown() {
        let result = calculate_per_class_salary(
            dec("50000"),
            dec("40"),
            TaxType::Insurance,
            Decimal::ZERO,
            Decimal::ZERO,
            &rates(),
        );

        assert_eq!(result.base_amount, dec("2000000"));
        assert!(result.insurance_details.is_some());
        assert_eq!(result.net_amount % Decimal::TEN, Decimal::ZERO);
    }

    #[test]
    fn test_zero_classes_yields_zero_base() {
        let result = calculate_per_class_salary(
            dec("30000"),
            Decimal::ZERO,
            TaxType::None,
            Decimal::ZERO,
            Decimal::ZERO,
            &rates(),
        );

        assert_eq!(result.base_amount, Decimal::ZERO);
    }
}
