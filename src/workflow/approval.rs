//! Approval and application of salary increments.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{IncrementStatus, SalaryIncrement};

/// Approves a pending increment, applying it at once if it is already due.
///
/// An increment whose effective date is on or before `today` moves straight
/// to applied, with `approver` recorded as the applier.
///
/// # Errors
///
/// Returns `InvalidTransition` if the increment is not pending.
pub fn approve_increment(
    increment: &mut SalaryIncrement,
    approver: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> EngineResult<()> {
    increment.approve(approver, now)?;
    info!(
        increment_id = %increment.id,
        employee_id = %increment.employee_id,
        approver = %approver,
        "Approved salary increment"
    );

    if increment.effective_date() <= today {
        increment.apply(approver, now)?;
        info!(
            increment_id = %increment.id,
            effective_date = %increment.effective_date(),
            "Applied salary increment on approval"
        );
    }
    Ok(())
}

/// Applies every approved increment that takes effect on `today`.
///
/// Returns the ids of the increments that were applied. A record that fails
/// to apply is logged and skipped. Approved increments whose effective date
/// has already passed are left alone and reported with a warning.
pub fn apply_due_increments(
    increments: &mut [SalaryIncrement],
    applier: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Vec<Uuid> {
    let mut applied = Vec::new();

    for increment in increments
        .iter_mut()
        .filter(|i| i.status == IncrementStatus::Approved && i.effective_date() == today)
    {
        match increment.apply(applier, now) {
            Ok(()) => applied.push(increment.id),
            Err(e) => error!(
                increment_id = %increment.id,
                error = %e,
                "Failed to apply salary increment"
            ),
        }
    }

    for overdue in increments
        .iter()
        .filter(|i| i.status == IncrementStatus::Approved && i.effective_date() < today)
    {
        warn!(
            increment_id = %overdue.id,
            effective_date = %overdue.effective_date(),
            "Approved salary increment is past its effective date"
        );
    }

    info!(date = %today, count = applied.len(), "Applied due salary increments");
    applied
}
