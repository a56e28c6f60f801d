//! Intake of loosely-typed requests.
//!
//! Forms deserialize from JSON as submitted by a client and convert into the
//! strict domain types with explicit errors for ambiguous or invalid input.

mod request;
mod value;

pub use request::{AdjustmentForm, IncrementForm, SalaryForm};
pub use value::money_from_value;
