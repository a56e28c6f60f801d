//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::CurrencyFormat;

/// Attendance rules.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePolicy {
    /// The weekday excluded from worked and absent day counts.
    pub weekly_off_day: Weekday,
}

/// Salary increment rules.
#[derive(Debug, Clone, Deserialize)]
pub struct IncrementPolicy {
    /// The largest percentage the intake layer accepts.
    pub max_percentage: Decimal,
    /// Pay periods per year, used to annualize monthly increases.
    pub months_per_year: u32,
}

/// Overtime rules.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimePolicy {
    /// Multiplier applied to the hourly rate when an employee has none set.
    pub default_multiplier: Decimal,
}

/// The complete payroll configuration, as read from `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Display currency.
    pub currency: CurrencyFormat,
    /// Attendance rules.
    pub attendance: AttendancePolicy,
    /// Increment rules.
    pub increments: IncrementPolicy,
    /// Overtime rules.
    pub overtime: OvertimePolicy,
}
