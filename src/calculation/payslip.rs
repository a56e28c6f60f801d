//! Payslip salary summary.
//!
//! Combines an employee's pay settings with an [`AttendanceSummary`] to
//! produce the salary section of a monthly payslip.

use rust_decimal::Decimal;

use crate::models::{AttendanceSummary, AuditStep, Money, PayslipInputs, PayslipSummary};

/// The payslip summary together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct PayslipCalculation {
    /// The computed salary summary.
    pub summary: PayslipSummary,
    /// Audit steps for overtime pay and absence deduction, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes overtime pay for a number of hours.
///
/// Non-positive hours pay nothing.
pub fn calculate_overtime_pay(inputs: &PayslipInputs, overtime_hours: Decimal) -> Money {
    if overtime_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    inputs.overtime_rate() * overtime_hours
}

/// Computes the deduction for absent days: a daily share of basic salary
/// (basic salary over calendar days) per absent day.
pub fn calculate_absent_deduction(basic_salary: Money, days_in_month: u32, absent_days: u32) -> Money {
    if days_in_month == 0 || absent_days == 0 {
        return Decimal::ZERO;
    }
    basic_salary * Decimal::from(absent_days) / Decimal::from(days_in_month)
}

/// Builds the payslip summary for one month.
///
/// `net_salary = basic + allowances + overtime pay - absent deduction - advance`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_payslip;
/// use salary_engine::models::{AttendanceSummary, CompensationBreakdown, PayslipInputs};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inputs = PayslipInputs {
///     compensation: CompensationBreakdown::new(
///         Decimal::from(3100),
///         Decimal::from(500),
///         Decimal::from(800),
///         Decimal::from(300),
///     ),
///     hourly_rate: Decimal::from(20),
///     overtime_rate_multiplier: Decimal::new(15, 1),
///     overtime_fixed_rate: None,
///     advance_balance: Decimal::from(400),
/// };
/// let attendance = AttendanceSummary {
///     month_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     days_in_month: 31,
///     days_worked: 24,
///     absent_days: 2,
///     total_regular_hours: Decimal::from(192),
///     total_overtime_hours: Decimal::from(10),
/// };
///
/// let result = calculate_payslip(&inputs, &attendance, 1);
/// assert_eq!(result.summary.overtime_pay, Decimal::from(300));
/// assert_eq!(result.summary.absent_deduction, Decimal::from(200));
/// assert_eq!(result.summary.net_salary, Decimal::from(4400));
/// ```
pub fn calculate_payslip(
    inputs: &PayslipInputs,
    attendance: &AttendanceSummary,
    step_number: u32,
) -> PayslipCalculation {
    let basic_salary = inputs.compensation.base;
    let total_allowances = inputs.compensation.allowances();
    let overtime_rate = inputs.overtime_rate();
    let overtime_pay = calculate_overtime_pay(inputs, attendance.total_overtime_hours);
    let absent_deduction =
        calculate_absent_deduction(basic_salary, attendance.days_in_month, attendance.absent_days);
    let advance_payment = inputs.advance_balance;

    let net_salary =
        basic_salary + total_allowances + overtime_pay - absent_deduction - advance_payment;

    let overtime_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": attendance.total_overtime_hours.normalize().to_string(),
            "hourly_rate": inputs.hourly_rate.normalize().to_string(),
            "overtime_rate_multiplier": inputs.overtime_rate_multiplier.normalize().to_string(),
            "overtime_fixed_rate": inputs.overtime_fixed_rate.map(|r| r.normalize().to_string()),
        }),
        output: serde_json::json!({
            "overtime_rate": overtime_rate.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
        }),
        reasoning: format!(
            "{}h x ${} = ${}",
            attendance.total_overtime_hours.normalize(),
            overtime_rate.normalize(),
            overtime_pay.normalize()
        ),
    };

    let absence_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "absent_deduction".to_string(),
        rule_name: "Absent Day Deduction".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "days_in_month": attendance.days_in_month,
            "absent_days": attendance.absent_days,
        }),
        output: serde_json::json!({
            "absent_deduction": absent_deduction.normalize().to_string(),
        }),
        reasoning: if attendance.absent_days == 0 {
            "No absent days - no deduction".to_string()
        } else {
            format!(
                "${} / {} days x {} absent = ${}",
                basic_salary.normalize(),
                attendance.days_in_month,
                attendance.absent_days,
                absent_deduction.round_dp(2).normalize()
            )
        },
    };

    PayslipCalculation {
        summary: PayslipSummary {
            basic_salary,
            total_allowances,
            overtime_pay,
            absent_deduction,
            advance_payment,
            net_salary,
        },
        audit_steps: vec![overtime_step, absence_step],
    }
}
