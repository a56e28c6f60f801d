//! End-to-end tests for the Salary Engine.
//!
//! This test suite drives the public API the way a payroll client would:
//! - Loading the shipped configuration
//! - Form intake to adjustment preview
//! - Increment proposal, approval and the due-increment sweep
//! - Statistics and projected cost
//! - Attendance aggregation feeding the payslip summary
//! - Display formatting of results

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use salary_engine::calculation::{
    calculate_payslip, compute_adjustment, explain_adjustment, summarize_attendance,
};
use salary_engine::config::ConfigLoader;
use salary_engine::error::EngineError;
use salary_engine::intake::{AdjustmentForm, IncrementForm, SalaryForm};
use salary_engine::models::{
    AdjustmentRequest, CompensationBreakdown, DailyAttendance, IncrementStatus, IncrementType,
    PayslipInputs, SalaryIncrement,
};
use salary_engine::workflow::{
    DateRange, apply_due_increments, approve_increment, employee_salary_history,
    increment_statistics, projected_annual_cost, propose_increment,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap()
}

fn employee_salary() -> CompensationBreakdown {
    let form: SalaryForm = serde_json::from_value(json!({
        "basic_salary": "3000.00",
        "food_allowance": 500,
        "housing_allowance": "800",
        "transport_allowance": 300
    }))
    .unwrap();
    CompensationBreakdown::try_from(form).unwrap()
}

fn submit_increment(config: &ConfigLoader, body: Value, requested_day: u32) -> SalaryIncrement {
    let form: IncrementForm = serde_json::from_value(body).unwrap();
    let employee_id = form.employee_id.clone();
    let (basis, details) = form
        .into_basis(&employee_salary(), config.increment_policy())
        .unwrap();
    propose_increment(
        &employee_id,
        &employee_salary(),
        basis,
        details,
        "hr_manager",
        at(requested_day),
    )
    .unwrap()
}

// =============================================================================
// Adjustment preview
// =============================================================================

#[test]
fn test_percentage_preview_from_form() {
    let config = load_config();
    let form: AdjustmentForm =
        serde_json::from_value(json!({"method": "percentage", "percentage": "10"})).unwrap();
    let request = form.into_request(config.increment_policy()).unwrap();

    let result = compute_adjustment(&employee_salary(), &request).unwrap();

    assert_eq!(
        result.proposed,
        CompensationBreakdown::new(decimal("3300"), decimal("550"), decimal("880"), decimal("330"))
    );
    assert_eq!(result.proposed.total(), decimal("5060"));
    assert_eq!(result.increase_amount(), decimal("460"));
    assert_eq!(result.increase_percentage, decimal("10"));

    let format = config.currency_format();
    assert_eq!(format.format(Some(result.proposed.total())), "SAR 5,060.00");
    assert_eq!(format.format(Some(result.increase_amount())), "SAR 460.00");
}

#[test]
fn test_fixed_amount_preview_distributes_proportionally() {
    let form: AdjustmentForm =
        serde_json::from_value(json!({"method": "fixed_amount", "amount": 460})).unwrap();
    let request = AdjustmentRequest::try_from(form).unwrap();

    let result = compute_adjustment(&employee_salary(), &request).unwrap();

    assert_eq!(result.proposed.base, decimal("3300"));
    assert_eq!(result.proposed.food, decimal("550"));
    assert_eq!(result.proposed.housing, decimal("880"));
    assert_eq!(result.proposed.transport, decimal("330"));
    assert_eq!(result.increase_percentage, decimal("10"));

    let step = explain_adjustment(&result, &request, 1);
    assert_eq!(step.rule_id, "salary_adjustment_fixed");
}

#[test]
fn test_fixed_amount_on_empty_salary_goes_to_base() {
    let request = AdjustmentRequest::FixedAmount(decimal("5000"));
    let result = compute_adjustment(&CompensationBreakdown::zero(), &request).unwrap();

    assert_eq!(
        result.proposed,
        CompensationBreakdown::new(decimal("5000"), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    );
    assert_eq!(result.increase_percentage, Decimal::ZERO);
}

#[test]
fn test_ambiguous_form_is_rejected_before_calculation() {
    let form: AdjustmentForm = serde_json::from_value(json!({
        "method": "percentage",
        "percentage": 10,
        "amount": 460
    }))
    .unwrap();

    assert!(matches!(
        AdjustmentRequest::try_from(form),
        Err(EngineError::InvalidRequestShape { .. })
    ));
}

// =============================================================================
// Increment workflow
// =============================================================================

#[test]
fn test_increment_lifecycle_through_sweep() {
    let config = load_config();
    let mut increments = vec![
        submit_increment(
            &config,
            json!({
                "employee_id": "emp_001",
                "increment_type": "percentage",
                "percentage": 10,
                "reason": "Annual raise",
                "effective_date": "2026-04-01"
            }),
            1,
        ),
        submit_increment(
            &config,
            json!({
                "employee_id": "emp_002",
                "increment_type": "promotion",
                "new_base_salary": "4000",
                "reason": "Team lead",
                "effective_date": "2026-03-10"
            }),
            2,
        ),
    ];

    // Future-dated approval waits for the sweep; backdated approval applies at once.
    approve_increment(&mut increments[0], "director", date("2026-03-15"), at(15)).unwrap();
    approve_increment(&mut increments[1], "director", date("2026-03-15"), at(15)).unwrap();
    assert_eq!(increments[0].status, IncrementStatus::Approved);
    assert_eq!(increments[1].status, IncrementStatus::Applied);

    let applied = apply_due_increments(&mut increments, "scheduler", date("2026-04-01"), at(31));
    assert_eq!(applied, vec![increments[0].id]);
    assert_eq!(increments[0].status, IncrementStatus::Applied);

    let result = increments[0].reject("director", None, at(31));
    assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
}

#[test]
fn test_statistics_and_projection() {
    let config = load_config();
    let mut applied = submit_increment(
        &config,
        json!({
            "employee_id": "emp_001",
            "increment_type": "percentage",
            "percentage": "10",
            "reason": "Annual raise",
            "effective_date": "2026-03-01"
        }),
        1,
    );
    approve_increment(&mut applied, "director", date("2026-03-05"), at(5)).unwrap();

    let pending = submit_increment(
        &config,
        json!({
            "employee_id": "emp_002",
            "increment_type": "amount",
            "amount": "250",
            "reason": "Market correction",
            "effective_date": "2026-06-01"
        }),
        2,
    );
    let increments = vec![applied, pending];

    let stats = increment_statistics(&increments, DateRange::default()).unwrap();
    assert_eq!(stats.total_increments, 2);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.total_increment_amount, decimal("460"));
    assert_eq!(stats.average_increment_percentage, decimal("10"));
    assert_eq!(stats.by_type[&IncrementType::Percentage].count, 1);

    let projection = projected_annual_cost(&increments, config.increment_policy().months_per_year).unwrap();
    assert_eq!(projection.total_pending_requests, 1);
    assert_eq!(projection.total_annual_increase, decimal("3000"));
}

#[test]
fn test_salary_history_for_employee() {
    let config = load_config();
    let increments: Vec<SalaryIncrement> = ["2026-01-01", "2026-07-01", "2026-04-01"]
        .iter()
        .enumerate()
        .map(|(i, effective)| {
            submit_increment(
                &config,
                json!({
                    "employee_id": "emp_001",
                    "increment_type": "percentage",
                    "percentage": 5,
                    "reason": "Review",
                    "effective_date": effective
                }),
                i as u32 + 1,
            )
        })
        .collect();

    let history = employee_salary_history(&increments, "emp_001");
    let dates: Vec<NaiveDate> = history.iter().map(|i| i.effective_date()).collect();
    assert_eq!(
        dates,
        vec![date("2026-07-01"), date("2026-04-01"), date("2026-01-01")]
    );
}

#[test]
fn test_increment_serializes_flat_json() {
    let config = load_config();
    let increment = submit_increment(
        &config,
        json!({
            "employee_id": "emp_001",
            "increment_type": "percentage",
            "percentage": 10,
            "reason": "Annual raise",
            "effective_date": "2026-04-01",
            "notes": "Q1 cycle"
        }),
        1,
    );

    let json = serde_json::to_value(&increment).unwrap();
    assert_eq!(json["status"], "pending");
    assert_eq!(json["increment_type"], "percentage");
    assert_eq!(json["effective_date"], "2026-04-01");
    assert_eq!(json["notes"], "Q1 cycle");
    assert_eq!(json["current"]["base"], "3000.00");

    let round_trip: SalaryIncrement = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, increment);
}

// =============================================================================
// Attendance and payslip
// =============================================================================

#[test]
fn test_month_of_attendance_to_payslip() {
    let config = load_config();

    // January 2026: 31 days, Fridays on the 2nd, 9th, 16th, 23rd and 30th.
    let records: Vec<DailyAttendance> = date("2026-01-01")
        .iter_days()
        .take(31)
        .filter(|d| !matches!(d.to_string().as_str(), "2026-01-12" | "2026-01-13"))
        .map(|d| DailyAttendance {
            date: d,
            regular_hours: decimal("8"),
            overtime_hours: if d.to_string() == "2026-01-05" {
                decimal("4")
            } else {
                Decimal::ZERO
            },
        })
        .collect();

    let attendance =
        summarize_attendance(2026, 1, &records, config.weekly_off_day()).unwrap();
    assert_eq!(attendance.days_in_month, 31);
    assert_eq!(attendance.absent_days, 2);
    assert_eq!(attendance.days_worked, 24);
    assert_eq!(attendance.total_overtime_hours, decimal("4"));

    let inputs = PayslipInputs {
        compensation: CompensationBreakdown::new(
            decimal("3100"),
            decimal("500"),
            decimal("800"),
            decimal("300"),
        ),
        hourly_rate: decimal("20"),
        overtime_rate_multiplier: config.default_overtime_multiplier(),
        overtime_fixed_rate: None,
        advance_balance: decimal("150"),
    };

    let payslip = calculate_payslip(&inputs, &attendance, 1);
    let summary = &payslip.summary;

    assert_eq!(summary.overtime_pay, decimal("120"));
    assert_eq!(summary.absent_deduction, decimal("200"));
    assert_eq!(
        summary.net_salary,
        summary.basic_salary + summary.total_allowances + summary.overtime_pay
            - summary.absent_deduction
            - summary.advance_payment
    );
    assert_eq!(summary.net_salary, decimal("4470"));
    assert_eq!(payslip.audit_steps.len(), 2);
    assert_eq!(
        config.currency_format().format(Some(summary.net_salary)),
        "SAR 4,470.00"
    );
}

#[test]
fn test_attendance_outside_month_is_rejected() {
    let records = vec![DailyAttendance {
        date: date("2026-02-01"),
        regular_hours: decimal("8"),
        overtime_hours: Decimal::ZERO,
    }];

    let result = summarize_attendance(2026, 1, &records, load_config().weekly_off_day());
    assert!(matches!(result, Err(EngineError::InvalidAttendance { .. })));
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_formatting_of_missing_and_loose_values() {
    let format = load_config().currency_format().clone();

    assert_eq!(format.format(None), "SAR 0.00");
    assert_eq!(format.format_f64(Some(f64::NAN)), "SAR 0.00");
    assert_eq!(format.format_value(&json!("1234.5")), "SAR 1,234.50");
    assert_eq!(format.format_value(&json!("abc")), "SAR 0.00");
    assert_eq!(format.format(Some(decimal("-12"))), "-SAR 12.00");
}
