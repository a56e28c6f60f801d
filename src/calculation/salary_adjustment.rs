//! Salary adjustment calculation.
//!
//! This module turns a [`CompensationBreakdown`] and an [`AdjustmentRequest`]
//! into the proposed breakdown. Percentage raises scale every component;
//! fixed amounts are split across components in proportion to their current
//! share of the total.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentRequest, AdjustmentResult, AuditStep, CompensationBreakdown};

/// Computes the proposed compensation for an adjustment.
///
/// - `Percentage(p)`: every component is multiplied by `1 + p/100`, and the
///   reported increase percentage is `p` as given.
/// - `FixedAmount(a)` with a positive current total: each component receives
///   `a * component / total`, so the new total is exactly `a` higher. The
///   reported increase percentage is `a / total * 100`.
/// - `FixedAmount(a)` with a zero current total: the whole amount goes to the
///   base salary and the reported increase percentage is zero.
///
/// Percentages above 100 are accepted; range policy belongs to the caller.
///
/// # Errors
///
/// - `InvalidCompensation` if any current component is negative.
/// - `InvalidAdjustment` if the percentage or amount is negative, or if the
///   proposed compensation or its total exceeds the decimal range.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_adjustment;
/// use salary_engine::models::{AdjustmentRequest, CompensationBreakdown};
/// use rust_decimal::Decimal;
///
/// let current = CompensationBreakdown::new(
///     Decimal::from(3000),
///     Decimal::from(500),
///     Decimal::from(800),
///     Decimal::from(300),
/// );
///
/// let result = compute_adjustment(&current, &AdjustmentRequest::FixedAmount(Decimal::from(460)))
///     .unwrap();
/// assert_eq!(result.proposed.base, Decimal::from(3300));
/// assert_eq!(result.increase_amount(), Decimal::from(460));
/// assert_eq!(result.increase_percentage, Decimal::from(10));
/// ```
pub fn compute_adjustment(
    current: &CompensationBreakdown,
    request: &AdjustmentRequest,
) -> EngineResult<AdjustmentResult> {
    current.validate()?;
    let total = current.checked_total()?;

    let (proposed, increase_percentage) = match *request {
        AdjustmentRequest::Percentage(percentage) => {
            if percentage < Decimal::ZERO {
                return Err(EngineError::InvalidAdjustment {
                    message: format!("percentage cannot be negative: {}", percentage),
                });
            }
            let multiplier = Decimal::ONE
                .checked_add(percentage / Decimal::ONE_HUNDRED)
                .ok_or_else(|| EngineError::overflow("percentage multiplier"))?;
            let proposed = current
                .try_map(|c| c.checked_mul(multiplier))
                .ok_or_else(|| EngineError::overflow("percentage adjustment"))?;
            (proposed, percentage)
        }
        AdjustmentRequest::FixedAmount(amount) => {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidAdjustment {
                    message: format!("amount cannot be negative: {}", amount),
                });
            }
            if total.is_zero() {
                let base = current
                    .base
                    .checked_add(amount)
                    .ok_or_else(|| EngineError::overflow("base salary"))?;
                (CompensationBreakdown { base, ..*current }, Decimal::ZERO)
            } else {
                let proposed = current
                    .try_map(|c| proportional_share(amount, c, total)?.checked_add(c))
                    .ok_or_else(|| EngineError::overflow("fixed amount adjustment"))?;
                let percentage = amount
                    .checked_div(total)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .ok_or_else(|| EngineError::overflow("increase percentage"))?;
                (proposed, percentage)
            }
        }
    };
    proposed.checked_total()?;

    Ok(AdjustmentResult {
        current: *current,
        proposed,
        increase_percentage,
    })
}

/// Returns `amount * component / total`.
///
/// Multiplying first keeps exact shares exact; when that product leaves the
/// decimal range the share is taken first instead.
fn proportional_share(amount: Decimal, component: Decimal, total: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(component)
        .and_then(|product| product.checked_div(total))
        .or_else(|| {
            component
                .checked_div(total)
                .and_then(|share| share.checked_mul(amount))
        })
}

/// Builds an audit step describing how `result` was derived from `request`.
pub fn explain_adjustment(
    result: &AdjustmentResult,
    request: &AdjustmentRequest,
    step_number: u32,
) -> AuditStep {
    let current_total = result.current.total();

    let (rule_id, rule_name, reasoning) = match *request {
        AdjustmentRequest::Percentage(percentage) => (
            "salary_adjustment_percentage",
            "Percentage Salary Adjustment",
            format!(
                "{}% applied to all components: ${} -> ${}",
                percentage.normalize(),
                current_total.normalize(),
                result.proposed.total().normalize()
            ),
        ),
        AdjustmentRequest::FixedAmount(amount) if current_total.is_zero() => (
            "salary_adjustment_fixed",
            "Fixed Amount Salary Adjustment",
            format!(
                "${} assigned to base salary (current total is zero)",
                amount.normalize()
            ),
        ),
        AdjustmentRequest::FixedAmount(amount) => (
            "salary_adjustment_fixed",
            "Fixed Amount Salary Adjustment",
            format!(
                "${} distributed proportionally across ${} total ({}%)",
                amount.normalize(),
                current_total.normalize(),
                result.increase_percentage.round_dp(2).normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "method": request.method(),
            "percentage": request.percentage().map(|p| p.normalize().to_string()),
            "amount": request.amount().map(|a| a.normalize().to_string()),
            "current": breakdown_json(&result.current),
        }),
        output: serde_json::json!({
            "proposed": breakdown_json(&result.proposed),
            "increase_amount": result.increase_amount().normalize().to_string(),
            "increase_percentage": result.increase_percentage.normalize().to_string(),
        }),
        reasoning,
    }
}

fn breakdown_json(breakdown: &CompensationBreakdown) -> serde_json::Value {
    serde_json::json!({
        "base": breakdown.base.normalize().to_string(),
        "food": breakdown.food.normalize().to_string(),
        "housing": breakdown.housing.normalize().to_string(),
        "transport": breakdown.transport.normalize().to_string(),
        "total": breakdown.total().normalize().to_string(),
    })
}
