//! Instructor pay profile and period work data models.
//!
//! This module defines the caller-owned inputs to a salary calculation:
//! the instructor's pay settings and the units worked in a period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax treatment applied to an instructor's gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    /// No withholding; net equals gross.
    #[serde(rename = "none")]
    None,
    /// Flat 3.3% freelance withholding tax.
    #[serde(rename = "3.3%")]
    Withholding,
    /// The four statutory insurance deductions.
    #[serde(rename = "insurance")]
    Insurance,
}

/// Pay-structure and tax settings for one instructor.
///
/// Mirrors the upstream instructor record. `salary_type` stays the raw
/// string stored there, so an unrecognized value surfaces as an
/// [`UnknownSalaryType`](crate::error::EngineError::UnknownSalaryType)
/// error at dispatch time instead of being silently remapped; missing
/// numeric fields, by contrast, default to zero during calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorPayProfile {
    /// Pay structure discriminator: "hourly", "per_class", or "monthly".
    pub salary_type: String,
    /// Rate in won. The per-class path reads its per-class rate from this
    /// same field; the upstream record stores both under one column.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Fixed monthly base salary in won.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// The tax treatment applied to gross pay.
    pub tax_type: TaxType,
}

/// Worked units for one pay period.
///
/// The relevant field is selected by the instructor's pay structure; the
/// other may be left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWorkData {
    /// Total hours worked (hourly structure). May be fractional; the
    /// upstream scheduler rounds to two decimals before calling in.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Total classes taught (per-class structure).
    #[serde(default)]
    pub total_classes: Option<Decimal>,
}
