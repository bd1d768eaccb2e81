//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod instructor;
mod period;
mod salary;

pub use instructor::{InstructorPayProfile, PeriodWorkData, TaxType};
pub use period::PayrollPeriod;
pub use salary::{AppliedRates, EmployerBurden, InsuranceResult, SalaryComputation};
