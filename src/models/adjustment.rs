//! Salary adjustment request and result models.
//!
//! An [`AdjustmentRequest`] is either a percentage raise or a fixed amount;
//! the calculator turns it into an [`AdjustmentResult`] comparing the current
//! and proposed compensation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationBreakdown, Money};
use crate::error::{EngineError, EngineResult};

/// How a raise is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentMethod {
    /// A percentage applied uniformly to every component.
    Percentage,
    /// A fixed amount distributed across components.
    FixedAmount,
}

/// A resolved adjustment instruction.
///
/// Exactly one value is carried, so a request holding both a percentage and
/// an amount (or neither) cannot be constructed.
///
/// # Example
///
/// ```
/// use salary_engine::models::{AdjustmentMethod, AdjustmentRequest};
/// use rust_decimal::Decimal;
///
/// let request = AdjustmentRequest::Percentage(Decimal::from(10));
/// assert_eq!(request.method(), AdjustmentMethod::Percentage);
///
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"method":"percentage","value":"10"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "value", rename_all = "snake_case")]
pub enum AdjustmentRequest {
    /// Raise every component by this percentage (10 means 10%).
    Percentage(Decimal),
    /// Raise the total by this amount, split proportionally.
    FixedAmount(Money),
}

impl AdjustmentRequest {
    /// Returns the method this request uses.
    pub fn method(&self) -> AdjustmentMethod {
        match self {
            AdjustmentRequest::Percentage(_) => AdjustmentMethod::Percentage,
            AdjustmentRequest::FixedAmount(_) => AdjustmentMethod::FixedAmount,
        }
    }

    /// Returns the percentage, if this is a percentage request.
    pub fn percentage(&self) -> Option<Decimal> {
        match self {
            AdjustmentRequest::Percentage(p) => Some(*p),
            AdjustmentRequest::FixedAmount(_) => None,
        }
    }

    /// Returns the amount, if this is a fixed-amount request.
    pub fn amount(&self) -> Option<Money> {
        match self {
            AdjustmentRequest::Percentage(_) => None,
            AdjustmentRequest::FixedAmount(a) => Some(*a),
        }
    }
}

/// The outcome of an adjustment: current and proposed compensation side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// The compensation before the adjustment.
    pub current: CompensationBreakdown,
    /// The compensation after the adjustment.
    pub proposed: CompensationBreakdown,
    /// The increase relative to the current total, in percent.
    pub increase_percentage: Decimal,
}

impl AdjustmentResult {
    /// Builds a result from two explicit breakdowns.
    ///
    /// The increase percentage is derived from the totals and is zero when
    /// the current total is zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdjustment` if either total, or the percentage,
    /// exceeds the decimal range.
    pub fn between(current: CompensationBreakdown, proposed: CompensationBreakdown) -> EngineResult<Self> {
        let current_total = current.checked_total()?;
        let proposed_total = proposed.checked_total()?;
        let increase_percentage = if current_total.is_zero() {
            Decimal::ZERO
        } else {
            (proposed_total - current_total)
                .checked_div(current_total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| EngineError::overflow("increase percentage"))?
        };

        Ok(Self {
            current,
            proposed,
            increase_percentage,
        })
    }

    /// Returns `proposed.total() - current.total()`.
    pub fn increase_amount(&self) -> Money {
        self.proposed.total() - self.current.total()
    }

    /// Returns the yearly cost of the increase over `months` pay periods.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdjustment` if the product exceeds the decimal range.
    pub fn annualized_increase(&self, months: u32) -> EngineResult<Money> {
        self.increase_amount()
            .checked_mul(Decimal::from(months))
            .ok_or_else(|| EngineError::overflow("annualized increase"))
    }
}
