//! Audit records explaining how a figure was produced.

use serde::{Deserialize, Serialize};

/// One explained figure: which rule produced it, from what, and why.
///
/// Increments carry the step that produced their proposed compensation;
/// payslips carry one step per derived amount.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "overtime_pay".to_string(),
///     rule_name: "Overtime Pay".to_string(),
///     input: serde_json::json!({"overtime_hours": "6"}),
///     output: serde_json::json!({"overtime_pay": "135"}),
///     reasoning: "6h x $22.50 = $135".to_string(),
/// };
/// assert_eq!(step.rule_id, "overtime_pay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position within its trail, starting at the caller's step number.
    pub step_number: u32,
    /// Stable rule key, e.g. `salary_adjustment_fixed`.
    pub rule_id: String,
    /// Display name of the rule.
    pub rule_name: String,
    /// Figures the rule read, as decimal strings.
    pub input: serde_json::Value,
    /// Figures the rule produced, as decimal strings.
    pub output: serde_json::Value,
    /// One-line arithmetic a reviewer can check by hand.
    pub reasoning: String,
}
