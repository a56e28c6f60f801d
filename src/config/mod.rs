//! Configuration loading and management for the Salary Engine.
//!
//! This module loads payroll policy from YAML: display currency, the
//! weekly-off day for attendance, increment limits and overtime defaults.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Currency: {}", config.currency_format().code);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendancePolicy, IncrementPolicy, OvertimePolicy, PayrollConfig};
