//! Reporting over collections of salary increments.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IncrementStatus, IncrementType, Money, SalaryIncrement};

/// Per-type figures over applied increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStatistics {
    /// Number of applied increments of this type.
    pub count: usize,
    /// Average requested percentage, when any of them carried one.
    pub average_percentage: Option<Decimal>,
}

/// Summary of increments requested within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementStatistics {
    /// All increments in the period.
    pub total_increments: usize,
    /// Increments awaiting a decision.
    pub pending: usize,
    /// Increments approved but not yet applied.
    pub approved: usize,
    /// Rejected increments.
    pub rejected: usize,
    /// Applied increments.
    pub applied: usize,
    /// Sum of monthly increases over applied increments.
    pub total_increment_amount: Money,
    /// Average requested percentage over applied increments that carry one.
    pub average_increment_percentage: Decimal,
    /// Applied increments grouped by type.
    pub by_type: BTreeMap<IncrementType, TypeStatistics>,
}

/// Requested-at window for [`increment_statistics`]. Both ends are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest request time, if bounded.
    pub from: Option<DateTime<Utc>>,
    /// Latest request time, if bounded.
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Returns true if `at` falls inside the range.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

/// Projected cost of one increment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCost {
    /// Number of pending increments of this type.
    pub count: usize,
    /// Their combined annual cost.
    pub total_annual_cost: Money,
}

/// Annual cost of all pending increments if they were approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedCost {
    /// Number of pending increments.
    pub total_pending_requests: usize,
    /// Combined annual increase.
    pub total_annual_increase: Money,
    /// Breakdown by increment type.
    pub by_type: BTreeMap<IncrementType, TypeCost>,
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>, what: &str) -> EngineResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(value))
        .ok_or_else(|| EngineError::overflow(what))
}

fn average(values: &[Decimal]) -> EngineResult<Option<Decimal>> {
    if values.is_empty() {
        return Ok(None);
    }
    let sum = checked_sum(values.iter().copied(), "average percentage")?;
    Ok(Some(sum / Decimal::from(values.len())))
}

/// Summarizes increments requested within `range`.
///
/// Status counts cover every increment in the range. Amounts, averages and
/// the per-type breakdown only consider applied increments.
///
/// # Errors
///
/// Returns `InvalidAdjustment` if a sum exceeds the decimal range.
pub fn increment_statistics(
    increments: &[SalaryIncrement],
    range: DateRange,
) -> EngineResult<IncrementStatistics> {
    let in_range: Vec<&SalaryIncrement> = increments
        .iter()
        .filter(|i| range.contains(i.requested_at))
        .collect();

    let count = |status: IncrementStatus| in_range.iter().filter(|i| i.status == status).count();
    let applied: Vec<&SalaryIncrement> = in_range
        .iter()
        .copied()
        .filter(|i| i.status == IncrementStatus::Applied)
        .collect();

    let total_increment_amount =
        checked_sum(applied.iter().map(|i| i.increase_amount()), "total increment amount")?;
    let percentages: Vec<Decimal> = applied.iter().filter_map(|i| i.increment_percentage).collect();

    let mut grouped: BTreeMap<IncrementType, Vec<&SalaryIncrement>> = BTreeMap::new();
    for increment in applied.iter().copied() {
        grouped.entry(increment.increment_type).or_default().push(increment);
    }
    let by_type = grouped
        .into_iter()
        .map(|(increment_type, group)| {
            let percentages: Vec<Decimal> =
                group.iter().filter_map(|i| i.increment_percentage).collect();
            let stats = TypeStatistics {
                count: group.len(),
                average_percentage: average(&percentages)?,
            };
            Ok((increment_type, stats))
        })
        .collect::<EngineResult<_>>()?;

    Ok(IncrementStatistics {
        total_increments: in_range.len(),
        pending: count(IncrementStatus::Pending),
        approved: count(IncrementStatus::Approved),
        rejected: count(IncrementStatus::Rejected),
        applied: applied.len(),
        total_increment_amount,
        average_increment_percentage: average(&percentages)?.unwrap_or(Decimal::ZERO),
        by_type,
    })
}

/// Projects the annual cost of all pending increments.
///
/// Each increment contributes its monthly increase times `months_per_year`.
///
/// # Errors
///
/// Returns `InvalidAdjustment` if an annual figure or a running total exceeds
/// the decimal range.
pub fn projected_annual_cost(
    increments: &[SalaryIncrement],
    months_per_year: u32,
) -> EngineResult<ProjectedCost> {
    let mut by_type: BTreeMap<IncrementType, TypeCost> = BTreeMap::new();
    let mut total_pending_requests = 0;
    let mut total_annual_increase = Decimal::ZERO;

    for increment in increments.iter().filter(|i| i.is_pending()) {
        let annual = increment.adjustment.annualized_increase(months_per_year)?;
        total_pending_requests += 1;
        total_annual_increase = total_annual_increase
            .checked_add(annual)
            .ok_or_else(|| EngineError::overflow("projected annual cost"))?;

        let entry = by_type.entry(increment.increment_type).or_insert(TypeCost {
            count: 0,
            total_annual_cost: Decimal::ZERO,
        });
        entry.count += 1;
        entry.total_annual_cost = entry
            .total_annual_cost
            .checked_add(annual)
            .ok_or_else(|| EngineError::overflow("projected annual cost"))?;
    }

    Ok(ProjectedCost {
        total_pending_requests,
        total_annual_increase,
        by_type,
    })
}

/// Returns an employee's increments, latest effective date first.
pub fn employee_salary_history<'a>(
    increments: &'a [SalaryIncrement],
    employee_id: &str,
) -> Vec<&'a SalaryIncrement> {
    let mut history: Vec<&SalaryIncrement> = increments
        .iter()
        .filter(|i| i.employee_id == employee_id)
        .collect();
    history.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
    history
}
