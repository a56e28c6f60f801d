//! Salary increment records and their approval lifecycle.
//!
//! A [`SalaryIncrement`] moves through `pending -> approved -> applied`, or
//! `pending -> rejected`. Transitions are methods on the record and fail with
//! [`EngineError::InvalidTransition`] when the current status does not allow them.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdjustmentResult, AuditStep, CompensationBreakdown, Money};
use crate::error::{EngineError, EngineResult};

/// Where a salary increment is in its approval lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncrementStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved but not yet in effect.
    Approved,
    /// Turned down; terminal.
    Rejected,
    /// In effect; terminal.
    Applied,
}

impl IncrementStatus {
    /// Returns the snake_case name used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementStatus::Pending => "pending",
            IncrementStatus::Approved => "approved",
            IncrementStatus::Rejected => "rejected",
            IncrementStatus::Applied => "applied",
        }
    }
}

impl fmt::Display for IncrementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The business reason category of an increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncrementType {
    /// Percentage raise computed by the calculator.
    Percentage,
    /// Fixed-amount raise computed by the calculator.
    Amount,
    /// New compensation set by a promotion.
    Promotion,
    /// New compensation set by the annual review.
    AnnualReview,
    /// New compensation set for performance.
    Performance,
    /// New compensation set to follow the market.
    MarketAdjustment,
}

impl IncrementType {
    /// Returns the snake_case name used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementType::Percentage => "percentage",
            IncrementType::Amount => "amount",
            IncrementType::Promotion => "promotion",
            IncrementType::AnnualReview => "annual_review",
            IncrementType::Performance => "performance",
            IncrementType::MarketAdjustment => "market_adjustment",
        }
    }
}

/// Increment types whose new compensation is supplied rather than computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionKind {
    /// Promotion to a new position.
    Promotion,
    /// Annual salary review.
    AnnualReview,
    /// Performance-based revision.
    Performance,
    /// Market-rate correction.
    MarketAdjustment,
}

impl From<RevisionKind> for IncrementType {
    fn from(kind: RevisionKind) -> Self {
        match kind {
            RevisionKind::Promotion => IncrementType::Promotion,
            RevisionKind::AnnualReview => IncrementType::AnnualReview,
            RevisionKind::Performance => IncrementType::Performance,
            RevisionKind::MarketAdjustment => IncrementType::MarketAdjustment,
        }
    }
}

/// Descriptive fields supplied by whoever requests an increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementDetails {
    /// Why the increment is requested.
    pub reason: String,
    /// The date the new compensation takes effect.
    pub effective_date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A requested change to an employee's compensation, with its approval state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryIncrement {
    /// Unique identifier for the increment.
    pub id: Uuid,
    /// The employee whose compensation changes.
    pub employee_id: String,
    /// The category of the increment.
    pub increment_type: IncrementType,
    /// The requested percentage, for percentage increments.
    pub increment_percentage: Option<Decimal>,
    /// The requested amount, for fixed-amount increments.
    pub increment_amount: Option<Money>,
    /// Current and proposed compensation.
    #[serde(flatten)]
    pub adjustment: AdjustmentResult,
    /// Reason, effective date and notes.
    #[serde(flatten)]
    pub details: IncrementDetails,
    /// Current lifecycle status.
    pub status: IncrementStatus,
    /// Who requested the increment.
    pub requested_by: String,
    /// When the increment was requested.
    pub requested_at: DateTime<Utc>,
    /// Who approved the increment.
    pub approved_by: Option<String>,
    /// When the increment was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Who rejected the increment.
    pub rejected_by: Option<String>,
    /// When the increment was rejected.
    pub rejected_at: Option<DateTime<Utc>>,
    /// Why the increment was rejected.
    pub rejection_reason: Option<String>,
    /// Who applied the increment.
    pub applied_by: Option<String>,
    /// When the increment was applied.
    pub applied_at: Option<DateTime<Utc>>,
    /// How the proposed compensation was produced.
    pub calculation: AuditStep,
}

impl SalaryIncrement {
    /// Compensation before the increment.
    pub fn current(&self) -> &CompensationBreakdown {
        &self.adjustment.current
    }

    /// Compensation after the increment.
    pub fn proposed(&self) -> &CompensationBreakdown {
        &self.adjustment.proposed
    }

    /// Monthly increase in total compensation.
    pub fn increase_amount(&self) -> Money {
        self.adjustment.increase_amount()
    }

    /// The date the new compensation takes effect.
    pub fn effective_date(&self) -> NaiveDate {
        self.details.effective_date
    }

    /// Returns true while awaiting a decision.
    pub fn is_pending(&self) -> bool {
        self.status == IncrementStatus::Pending
    }

    /// Returns true if the increment may be approved.
    pub fn can_be_approved(&self) -> bool {
        self.is_pending()
    }

    /// Returns true if the increment may be rejected.
    pub fn can_be_rejected(&self) -> bool {
        self.is_pending()
    }

    /// Returns true if the increment may be applied.
    pub fn can_be_applied(&self) -> bool {
        self.status == IncrementStatus::Approved
    }

    /// Marks the increment approved.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the increment is pending.
    pub fn approve(&mut self, approver: &str, at: DateTime<Utc>) -> EngineResult<()> {
        if !self.can_be_approved() {
            return Err(self.transition_error("approved"));
        }
        self.status = IncrementStatus::Approved;
        self.approved_by = Some(approver.to_string());
        self.approved_at = Some(at);
        Ok(())
    }

    /// Marks the increment rejected, recording an optional reason.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the increment is pending.
    pub fn reject(
        &mut self,
        rejector: &str,
        reason: Option<String>,
        at: DateTime<Utc>,
    ) -> EngineResult<()> {
        if !self.can_be_rejected() {
            return Err(self.transition_error("rejected"));
        }
        self.status = IncrementStatus::Rejected;
        self.rejected_by = Some(rejector.to_string());
        self.rejected_at = Some(at);
        self.rejection_reason = reason;
        Ok(())
    }

    /// Marks the increment applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the increment is approved.
    pub fn apply(&mut self, applier: &str, at: DateTime<Utc>) -> EngineResult<()> {
        if !self.can_be_applied() {
            return Err(self.transition_error("applied"));
        }
        self.status = IncrementStatus::Applied;
        self.applied_by = Some(applier.to_string());
        self.applied_at = Some(at);
        Ok(())
    }

    fn transition_error(&self, action: &str) -> EngineError {
        EngineError::InvalidTransition {
            id: self.id,
            from: self.status.to_string(),
            action: action.to_string(),
        }
    }
}
