//! Reading money out of loosely-typed JSON values.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::Money;

/// Reads a JSON number or numeric string as money.
///
/// Surrounding whitespace in strings is ignored and scientific notation is
/// accepted. Returns `None` for anything that is not a finite number.
pub fn money_from_value(value: &serde_json::Value) -> Option<Money> {
    match value {
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
        serde_json::Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
