//! Compensation breakdown model.
//!
//! This module defines [`Money`] and the [`CompensationBreakdown`] value type
//! that splits an employee's monthly pay into base salary and allowances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A monetary amount. Full precision internally, rounded only for display.
pub type Money = Decimal;

/// The four-component decomposition of an employee's monthly compensation.
///
/// The total is always derived from the components and never stored.
///
/// # Example
///
/// ```
/// use salary_engine::models::CompensationBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = CompensationBreakdown::new(
///     Decimal::from(3000),
///     Decimal::from(500),
///     Decimal::from(800),
///     Decimal::from(300),
/// );
/// assert_eq!(breakdown.total(), Decimal::from(4600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// The base salary component.
    pub base: Money,
    /// The food allowance.
    #[serde(default)]
    pub food: Money,
    /// The housing allowance.
    #[serde(default)]
    pub housing: Money,
    /// The transport allowance.
    #[serde(default)]
    pub transport: Money,
}

impl CompensationBreakdown {
    /// Creates a breakdown from its four components.
    pub fn new(base: Money, food: Money, housing: Money, transport: Money) -> Self {
        Self {
            base,
            food,
            housing,
            transport,
        }
    }

    /// A breakdown with every component at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the sum of all four components.
    pub fn total(&self) -> Money {
        self.base + self.food + self.housing + self.transport
    }

    /// Returns the sum of all four components.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAdjustment` if the sum exceeds the decimal range.
    pub fn checked_total(&self) -> EngineResult<Money> {
        self.components()
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, (_, value)| sum.checked_add(value))
            .ok_or_else(|| EngineError::overflow("compensation total"))
    }

    /// Returns the sum of the three allowance components.
    pub fn allowances(&self) -> Money {
        self.food + self.housing + self.transport
    }

    /// Returns the components paired with their names, base first.
    pub fn components(&self) -> [(&'static str, Money); 4] {
        [
            ("base", self.base),
            ("food", self.food),
            ("housing", self.housing),
            ("transport", self.transport),
        ]
    }

    /// Builds a new breakdown by applying a fallible `f` to every component.
    ///
    /// Returns `None` as soon as `f` does.
    pub fn try_map(&self, mut f: impl FnMut(Money) -> Option<Money>) -> Option<Self> {
        Some(Self {
            base: f(self.base)?,
            food: f(self.food)?,
            housing: f(self.housing)?,
            transport: f(self.transport)?,
        })
    }

    /// Checks that no component is negative.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` naming the first negative component.
    pub fn validate(&self) -> EngineResult<()> {
        match self
            .components()
            .into_iter()
            .find(|(_, value)| *value < Decimal::ZERO)
        {
            Some((component, value)) => Err(EngineError::InvalidCompensation {
                component: component.to_string(),
                value,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> CompensationBreakdown {
        CompensationBreakdown::new(dec("3000"), dec("500"), dec("800"), dec("300"))
    }

    #[test]
    fn test_total_sums_all_components() {
        assert_eq!(sample().total(), dec("4600"));
    }

    #[test]
    fn test_allowances_exclude_base() {
        assert_eq!(sample().allowances(), dec("1600"));
    }

    #[test]
    fn test_zero_breakdown_has_zero_total() {
        assert_eq!(CompensationBreakdown::zero().total(), Decimal::ZERO);
    }

    #[test]
    fn test_try_map_applies_to_every_component() {
        let doubled = sample().try_map(|c| c.checked_mul(Decimal::TWO));
        assert_eq!(
            doubled,
            Some(CompensationBreakdown::new(dec("6000"), dec("1000"), dec("1600"), dec("600")))
        );
    }

    #[test]
    fn test_try_map_stops_at_first_failure() {
        let mut calls = 0;
        let result = sample().try_map(|c| {
            calls += 1;
            if c == dec("500") { None } else { Some(c) }
        });
        assert_eq!(result, None);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_checked_total_matches_total() {
        assert_eq!(sample().checked_total().unwrap(), sample().total());
    }

    #[test]
    fn test_checked_total_reports_overflow() {
        let huge = CompensationBreakdown::new(Decimal::MAX, Decimal::ONE, Decimal::ZERO, Decimal::ZERO);
        assert!(matches!(
            huge.checked_total(),
            Err(EngineError::InvalidAdjustment { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_non_negative() {
        assert!(sample().validate().is_ok());
        assert!(CompensationBreakdown::zero().validate().is_ok());
    }

    #[test]
    fn test_validate_names_negative_component() {
        let mut breakdown = sample();
        breakdown.transport = dec("-1.25");

        match breakdown.validate() {
            Err(EngineError::InvalidCompensation { component, value }) => {
                assert_eq!(component, "transport");
                assert_eq!(value, dec("-1.25"));
            }
            other => panic!("Expected InvalidCompensation, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_strings_and_numbers() {
        let json = r#"{"base": "3000.00", "food": 500, "housing": 800.5}"#;
        let breakdown: CompensationBreakdown = serde_json::from_str(json).unwrap();

        assert_eq!(breakdown.base, dec("3000.00"));
        assert_eq!(breakdown.food, dec("500"));
        assert_eq!(breakdown.housing, dec("800.5"));
        assert_eq!(breakdown.transport, Decimal::ZERO);
    }
}
