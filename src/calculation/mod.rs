//! Calculation logic for the Salary Engine.
//!
//! This module contains the pure calculation functions: salary adjustments
//! (percentage and proportional fixed-amount raises), currency formatting for
//! display, monthly attendance aggregation, and the payslip salary summary.

mod attendance_summary;
mod currency_format;
mod payslip;
mod salary_adjustment;

pub use attendance_summary::{month_bounds, summarize_attendance};
pub use currency_format::CurrencyFormat;
pub use payslip::{
    PayslipCalculation, calculate_absent_deduction, calculate_overtime_pay, calculate_payslip,
};
pub use salary_adjustment::{compute_adjustment, explain_adjustment};
