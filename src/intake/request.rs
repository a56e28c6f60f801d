//! Request types accepted from forms and JSON payloads.
//!
//! Salary fields arrive as JSON numbers, numeric strings, empty strings or
//! `null`. These types normalize them into [`Decimal`] and convert into the
//! strict domain types, reporting mismatched fields as errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::money_from_value;
use crate::config::IncrementPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdjustmentMethod, AdjustmentRequest, CompensationBreakdown, IncrementDetails, IncrementType,
    RevisionKind,
};
use crate::workflow::IncrementBasis;

/// Reads an optional decimal from a number or numeric string.
///
/// `null`, a missing field and an empty string all read as `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => money_from_value(&v)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a decimal number, found {v}"))),
    }
}

/// The loose adjustment shape: a method plus whichever value fields were filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentForm {
    /// The selected method.
    pub method: AdjustmentMethod,
    /// The percentage, for percentage raises.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub percentage: Option<Decimal>,
    /// The amount, for fixed-amount raises.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
}

impl AdjustmentForm {
    /// Converts the form and checks the value against the increment policy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestShape` when the fields disagree with the method,
    /// and `InvalidAdjustment` when the value is negative or the percentage
    /// exceeds `policy.max_percentage`.
    pub fn into_request(self, policy: &IncrementPolicy) -> EngineResult<AdjustmentRequest> {
        let request = AdjustmentRequest::try_from(self)?;
        match request {
            AdjustmentRequest::Percentage(p) if p < Decimal::ZERO => {
                Err(EngineError::InvalidAdjustment {
                    message: format!("percentage {p} is negative"),
                })
            }
            AdjustmentRequest::Percentage(p) if p > policy.max_percentage => {
                Err(EngineError::InvalidAdjustment {
                    message: format!(
                        "percentage {} exceeds the maximum of {}",
                        p, policy.max_percentage
                    ),
                })
            }
            AdjustmentRequest::FixedAmount(a) if a < Decimal::ZERO => {
                Err(EngineError::InvalidAdjustment {
                    message: format!("amount {a} is negative"),
                })
            }
            _ => Ok(request),
        }
    }
}

impl TryFrom<AdjustmentForm> for AdjustmentRequest {
    type Error = EngineError;

    fn try_from(form: AdjustmentForm) -> Result<Self, Self::Error> {
        let shape_error = |message: &str| EngineError::InvalidRequestShape {
            message: message.to_string(),
        };

        match (form.method, form.percentage, form.amount) {
            (_, Some(_), Some(_)) => Err(shape_error("both percentage and amount are set")),
            (AdjustmentMethod::Percentage, Some(p), None) => Ok(AdjustmentRequest::Percentage(p)),
            (AdjustmentMethod::FixedAmount, None, Some(a)) => Ok(AdjustmentRequest::FixedAmount(a)),
            (AdjustmentMethod::Percentage, None, Some(_)) => Err(shape_error(
                "percentage method requires a percentage, but an amount was given",
            )),
            (AdjustmentMethod::FixedAmount, Some(_), None) => Err(shape_error(
                "fixed_amount method requires an amount, but a percentage was given",
            )),
            (AdjustmentMethod::Percentage, None, None) => {
                Err(shape_error("percentage method requires a percentage"))
            }
            (AdjustmentMethod::FixedAmount, None, None) => {
                Err(shape_error("fixed_amount method requires an amount"))
            }
        }
    }
}

/// An employee's salary fields as stored or submitted.
///
/// Missing or empty fields read as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryForm {
    /// Base salary.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub basic_salary: Option<Decimal>,
    /// Food allowance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub food_allowance: Option<Decimal>,
    /// Housing allowance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub housing_allowance: Option<Decimal>,
    /// Transport allowance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub transport_allowance: Option<Decimal>,
}

impl TryFrom<SalaryForm> for CompensationBreakdown {
    type Error = EngineError;

    fn try_from(form: SalaryForm) -> Result<Self, Self::Error> {
        let breakdown = CompensationBreakdown::new(
            form.basic_salary.unwrap_or_default(),
            form.food_allowance.unwrap_or_default(),
            form.housing_allowance.unwrap_or_default(),
            form.transport_allowance.unwrap_or_default(),
        );
        breakdown.validate()?;
        Ok(breakdown)
    }
}

/// A request to create a salary increment.
///
/// Percentage and amount increments fill in `percentage` or `amount`.
/// Revisions fill in any of the `new_*` fields; unset fields keep the
/// employee's current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementForm {
    /// The employee whose compensation changes.
    pub employee_id: String,
    /// The category of the increment.
    pub increment_type: IncrementType,
    /// The percentage, for percentage increments.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub percentage: Option<Decimal>,
    /// The amount, for fixed-amount increments.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    /// New base salary, for revisions.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub new_base_salary: Option<Decimal>,
    /// New food allowance, for revisions.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub new_food_allowance: Option<Decimal>,
    /// New housing allowance, for revisions.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub new_housing_allowance: Option<Decimal>,
    /// New transport allowance, for revisions.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub new_transport_allowance: Option<Decimal>,
    /// Why the increment is requested.
    pub reason: String,
    /// When the new compensation takes effect.
    pub effective_date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl IncrementForm {
    /// Resolves the form against the employee's current compensation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestShape` for a blank reason or fields that do not
    /// belong to the increment type, and `InvalidAdjustment` when the value
    /// breaks the increment policy.
    pub fn into_basis(
        self,
        current: &CompensationBreakdown,
        policy: &IncrementPolicy,
    ) -> EngineResult<(IncrementBasis, IncrementDetails)> {
        if self.reason.trim().is_empty() {
            return Err(EngineError::InvalidRequestShape {
                message: "reason is required".to_string(),
            });
        }

        let basis = match self.increment_type {
            IncrementType::Percentage => self.adjustment_basis(AdjustmentMethod::Percentage, policy)?,
            IncrementType::Amount => self.adjustment_basis(AdjustmentMethod::FixedAmount, policy)?,
            IncrementType::Promotion => self.revision_basis(RevisionKind::Promotion, current)?,
            IncrementType::AnnualReview => self.revision_basis(RevisionKind::AnnualReview, current)?,
            IncrementType::Performance => self.revision_basis(RevisionKind::Performance, current)?,
            IncrementType::MarketAdjustment => {
                self.revision_basis(RevisionKind::MarketAdjustment, current)?
            }
        };

        let details = IncrementDetails {
            reason: self.reason,
            effective_date: self.effective_date,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        };
        Ok((basis, details))
    }

    fn adjustment_basis(
        &self,
        method: AdjustmentMethod,
        policy: &IncrementPolicy,
    ) -> EngineResult<IncrementBasis> {
        if self.has_revision_fields() {
            return Err(EngineError::InvalidRequestShape {
                message: format!(
                    "{} increments do not take new salary values",
                    self.increment_type.as_str()
                ),
            });
        }
        let form = AdjustmentForm {
            method,
            percentage: self.percentage,
            amount: self.amount,
        };
        Ok(IncrementBasis::Adjustment(form.into_request(policy)?))
    }

    fn revision_basis(
        &self,
        kind: RevisionKind,
        current: &CompensationBreakdown,
    ) -> EngineResult<IncrementBasis> {
        if self.percentage.is_some() || self.amount.is_some() {
            return Err(EngineError::InvalidRequestShape {
                message: format!(
                    "{} increments take new salary values, not a percentage or amount",
                    self.increment_type.as_str()
                ),
            });
        }
        let proposed = CompensationBreakdown::new(
            self.new_base_salary.unwrap_or(current.base),
            self.new_food_allowance.unwrap_or(current.food),
            self.new_housing_allowance.unwrap_or(current.housing),
            self.new_transport_allowance.unwrap_or(current.transport),
        );
        Ok(IncrementBasis::Revision { kind, proposed })
    }

    fn has_revision_fields(&self) -> bool {
        self.new_base_salary.is_some()
            || self.new_food_allowance.is_some()
            || self.new_housing_allowance.is_some()
            || self.new_transport_allowance.is_some()
    }
}
