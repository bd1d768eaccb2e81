//! Shared settlement of a gross amount under a tax treatment.
//!
//! The three pay-structure paths differ only in how they derive the base
//! amount; everything from gross onward is identical and lives here so
//! the paths cannot drift apart.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::{SalaryComputation, TaxType};

use super::insurance::calculate_four_insurance;
use super::tax::calculate_tax_33;

/// Applies the selected tax treatment to a gross amount, producing the
/// uniform computation shape shared by all pay structures.
pub(super) fn settle(
    base_amount: Decimal,
    gross_amount: Decimal,
    tax_type: TaxType,
    rates: &InsuranceRates,
) -> SalaryComputation {
    match tax_type {
        TaxType::None => SalaryComputation {
            base_amount,
            gross_amount,
            tax_amount: Decimal::ZERO,
            insurance_amount: Decimal::ZERO,
            net_amount: gross_amount,
            insurance_details: None,
        },
        TaxType::Withholding => {
            let tax = calculate_tax_33(gross_amount);
            SalaryComputation {
                base_amount,
                gross_amount,
                tax_amount: tax.tax,
                insurance_amount: Decimal::ZERO,
                net_amount: tax.net_amount,
                insurance_details: None,
            }
        }
        TaxType::Insurance => {
            let insurance = calculate_four_insurance(gross_amount, rates);
            SalaryComputation {
                base_amount,
                gross_amount,
                tax_amount: Decimal::ZERO,
                insurance_amount: insurance.total_deduction,
                net_amount: insurance.net_amount,
                insurance_details: Some(insurance),
            }
        }
    }
}
