//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoint through which the
//! payroll-creation flow asks for a salary calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
