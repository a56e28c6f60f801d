//! Null-safe currency formatting for display.
//!
//! Every preview and report renders money the same way, so the rules live
//! here once: missing, `NaN` or unparsable inputs render as zero, and
//! rounding to the display precision happens only at this point.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::intake::money_from_value;
use crate::models::Money;

/// Renders money as `"<CODE> 1,234.50"`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let sar = CurrencyFormat::new("SAR", 2);
/// assert_eq!(sar.format(Some(Decimal::new(123450, 2))), "SAR 1,234.50");
/// assert_eq!(sar.format(None), "SAR 0.00");
/// assert_eq!(sar.format_f64(Some(f64::NAN)), sar.format(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 currency code shown before the amount.
    pub code: String,
    /// Digits shown after the decimal point.
    pub decimal_places: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("SAR", 2)
    }
}

impl CurrencyFormat {
    /// Creates a format for the given currency code and precision.
    pub fn new(code: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            code: code.into(),
            decimal_places,
        }
    }

    /// Formats an optional amount; `None` renders as zero.
    pub fn format(&self, amount: Option<Money>) -> String {
        let rounded = amount.unwrap_or(Decimal::ZERO).round_dp_with_strategy(
            self.decimal_places,
            RoundingStrategy::MidpointAwayFromZero,
        );

        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let digits = format!("{:.*}", self.decimal_places as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!("{}{} {}", sign, self.code, group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Formats a binary float; `None`, `NaN` and infinities render as zero.
    ///
    /// Finite values beyond the decimal range saturate to `Decimal::MAX` or
    /// `Decimal::MIN`.
    pub fn format_f64(&self, amount: Option<f64>) -> String {
        let value = amount
            .filter(|v| v.is_finite())
            .map(|v| match Decimal::from_f64(v) {
                Some(d) => d,
                None if v.abs() < 1.0 => Decimal::ZERO,
                None if v < 0.0 => Decimal::MIN,
                None => Decimal::MAX,
            });
        self.format(value)
    }

    /// Formats a loosely-typed JSON value.
    ///
    /// Numbers and numeric strings are formatted; `null`, booleans, objects
    /// and strings that do not parse render as zero.
    pub fn format_value(&self, amount: &serde_json::Value) -> String {
        self.format(Some(money_from_value(amount).unwrap_or(Decimal::ZERO)))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
