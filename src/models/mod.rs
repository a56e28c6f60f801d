//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod attendance;
mod audit;
mod compensation;
mod payslip;
mod salary_increment;

pub use adjustment::{AdjustmentMethod, AdjustmentRequest, AdjustmentResult};
pub use attendance::{AttendanceSummary, DailyAttendance};
pub use audit::AuditStep;
pub use compensation::{CompensationBreakdown, Money};
pub use payslip::{PayslipInputs, PayslipSummary};
pub use salary_increment::{
    IncrementDetails, IncrementStatus, IncrementType, RevisionKind, SalaryIncrement,
};
