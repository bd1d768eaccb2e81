//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{InstructorPayProfile, PayrollPeriod, PeriodWorkData, TaxType};

/// Request body for the `/calculate` endpoint.
///
/// Contains the instructor's pay settings, the period being settled, the
/// units worked, and the period's manual adjustments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The instructor's pay settings.
    pub instructor: InstructorRequest,
    /// The payroll period being settled.
    pub period: PeriodRequest,
    /// Worked units for the period.
    #[serde(default)]
    pub work_data: WorkDataRequest,
    /// Incentive added on top of base pay this period.
    #[serde(default)]
    pub incentive_amount: Decimal,
    /// Manual deduction applied before the tax treatment.
    #[serde(default)]
    pub total_deduction: Decimal,
}

/// Instructor pay settings in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorRequest {
    /// Pay structure discriminator: "hourly", "per_class", or "monthly".
    pub salary_type: String,
    /// Rate in won; also serves as the per-class rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Fixed monthly base salary in won.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// The tax treatment applied to gross pay.
    pub tax_type: TaxType,
}

/// Payroll period in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

/// Worked units in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkDataRequest {
    /// Total hours worked during the period.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Total classes taught during the period.
    #[serde(default)]
    pub total_classes: Option<Decimal>,
}

impl From<InstructorRequest> for InstructorPayProfile {
    fn from(req: InstructorRequest) -> Self {
        InstructorPayProfile {
            salary_type: req.salary_type,
            hourly_rate: req.hourly_rate,
            base_salary: req.base_salary,
            tax_type: req.tax_type,
        }
    }
}

impl From<PeriodRequest> for PayrollPeriod {
    fn from(req: PeriodRequest) -> Self {
        PayrollPeriod {
            year: req.year,
            month: req.month,
        }
    }
}

impl From<WorkDataRequest> for PeriodWorkData {
    fn from(req: WorkDataRequest) -> Self {
        PeriodWorkData {
            total_hours: req.total_hours,
            total_classes: req.total_classes,
        }
    }
}
