//! Configuration loading and management for the payroll engine.
//!
//! This module provides the statutory insurance rate table, its built-in
//! 2026 default, and a loader that reads alternate tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded rates effective {}", config.year());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionSplit, IndustrialAccidentRate, InsuranceRates, LongTermCareSplit, RateTableConfig,
};
