//! Salary increment workflow.
//!
//! An increment is proposed as `pending`, then approved or rejected. Approved
//! increments are applied either on approval, when already due, or by the
//! daily sweep in [`apply_due_increments`]. Reporting helpers summarize a set
//! of increments for dashboards and budgeting.

mod approval;
mod proposal;
mod statistics;

pub use approval::{apply_due_increments, approve_increment};
pub use proposal::{IncrementBasis, propose_increment};
pub use statistics::{
    DateRange, IncrementStatistics, ProjectedCost, TypeCost, TypeStatistics,
    employee_salary_history, increment_statistics, projected_annual_cost,
};
