//! Creating salary increment proposals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{compute_adjustment, explain_adjustment};
use crate::error::EngineResult;
use crate::models::{
    AdjustmentRequest, AdjustmentResult, AuditStep, CompensationBreakdown, IncrementDetails,
    IncrementStatus, IncrementType, RevisionKind, SalaryIncrement,
};

/// What the proposed compensation is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncrementBasis {
    /// Computed from a percentage or fixed-amount adjustment.
    Adjustment(AdjustmentRequest),
    /// Supplied directly for a promotion, review or similar revision.
    Revision {
        /// The kind of revision.
        kind: RevisionKind,
        /// The new compensation.
        proposed: CompensationBreakdown,
    },
}

impl IncrementBasis {
    /// Returns the increment type this basis produces.
    pub fn increment_type(&self) -> IncrementType {
        match self {
            IncrementBasis::Adjustment(AdjustmentRequest::Percentage(_)) => IncrementType::Percentage,
            IncrementBasis::Adjustment(AdjustmentRequest::FixedAmount(_)) => IncrementType::Amount,
            IncrementBasis::Revision { kind, .. } => (*kind).into(),
        }
    }
}

/// Creates a pending salary increment for an employee.
///
/// # Errors
///
/// Propagates `InvalidCompensation` and `InvalidAdjustment` from validating
/// the current or proposed compensation.
///
/// # Examples
///
/// ```
/// use salary_engine::models::{AdjustmentRequest, CompensationBreakdown, IncrementDetails, IncrementStatus};
/// use salary_engine::workflow::{IncrementBasis, propose_increment};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let current = CompensationBreakdown::new(
///     Decimal::from(3000),
///     Decimal::from(500),
///     Decimal::from(800),
///     Decimal::from(300),
/// );
/// let details = IncrementDetails {
///     reason: "Annual raise".to_string(),
///     effective_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
///     notes: None,
/// };
///
/// let increment = propose_increment(
///     "emp_001",
///     &current,
///     IncrementBasis::Adjustment(AdjustmentRequest::Percentage(Decimal::from(10))),
///     details,
///     "hr_manager",
///     Utc::now(),
/// )
/// .unwrap();
///
/// assert_eq!(increment.status, IncrementStatus::Pending);
/// assert_eq!(increment.increase_amount(), Decimal::from(460));
/// ```
pub fn propose_increment(
    employee_id: &str,
    current: &CompensationBreakdown,
    basis: IncrementBasis,
    details: IncrementDetails,
    requested_by: &str,
    requested_at: DateTime<Utc>,
) -> EngineResult<SalaryIncrement> {
    let (adjustment, calculation) = match basis {
        IncrementBasis::Adjustment(request) => {
            let result = compute_adjustment(current, &request)?;
            let step = explain_adjustment(&result, &request, 1);
            (result, step)
        }
        IncrementBasis::Revision { kind, proposed } => {
            current.validate()?;
            proposed.validate()?;
            let result = AdjustmentResult::between(*current, proposed)?;
            let step = explain_revision(&result, kind.into());
            (result, step)
        }
    };

    let request = match basis {
        IncrementBasis::Adjustment(request) => Some(request),
        IncrementBasis::Revision { .. } => None,
    };

    let increment = SalaryIncrement {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        increment_type: basis.increment_type(),
        increment_percentage: request.and_then(|r| r.percentage()),
        increment_amount: request.and_then(|r| r.amount()),
        adjustment,
        details,
        status: IncrementStatus::Pending,
        requested_by: requested_by.to_string(),
        requested_at,
        approved_by: None,
        approved_at: None,
        rejected_by: None,
        rejected_at: None,
        rejection_reason: None,
        applied_by: None,
        applied_at: None,
        calculation,
    };

    debug!(
        increment_id = %increment.id,
        employee_id = %increment.employee_id,
        increment_type = increment.increment_type.as_str(),
        increase_amount = %increment.increase_amount(),
        "Proposed salary increment"
    );

    Ok(increment)
}

fn explain_revision(result: &AdjustmentResult, increment_type: IncrementType) -> AuditStep {
    AuditStep {
        step_number: 1,
        rule_id: "salary_revision".to_string(),
        rule_name: "Salary Revision".to_string(),
        input: serde_json::json!({
            "increment_type": increment_type,
            "current_total": result.current.total().normalize().to_string(),
        }),
        output: serde_json::json!({
            "proposed_total": result.proposed.total().normalize().to_string(),
            "increase_amount": result.increase_amount().normalize().to_string(),
            "increase_percentage": result.increase_percentage.round_dp(2).normalize().to_string(),
        }),
        reasoning: format!(
            "{} revision: ${} -> ${}",
            increment_type.as_str(),
            result.current.total().normalize(),
            result.proposed.total().normalize()
        ),
    }
}
