//! Salary Engine
//!
//! This crate computes proportional salary adjustments for employees paid a
//! base salary plus food, housing and transport allowances, and carries the
//! surrounding payroll logic: increment approval, attendance aggregation,
//! payslip summaries and currency formatting for display.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod workflow;
