//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type identifying the
//! calendar month a salary is settled for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar month that a salary is computed for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
///
/// let period = PayrollPeriod { year: 2026, month: 7 };
/// assert!(period.is_valid());
/// assert_eq!(period.label(), "2026-07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl PayrollPeriod {
    /// Returns true if the year/month combination names a real calendar
    /// month.
    pub fn is_valid(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).is_some()
    }

    /// Returns the first day of the period, if the period is valid.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns the period label in `YYYY-MM` form, matching the
    /// `year_month` column on upstream salary records.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
