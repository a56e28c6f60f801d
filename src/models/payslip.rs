//! Payslip inputs and salary summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationBreakdown, Money};

/// Employee pay settings needed to build a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipInputs {
    /// The employee's monthly compensation.
    pub compensation: CompensationBreakdown,
    /// Hourly rate used to derive the overtime rate.
    #[serde(default)]
    pub hourly_rate: Money,
    /// Multiplier applied to the hourly rate for overtime.
    ///
    /// Required. Callers without a per-employee value take
    /// `ConfigLoader::default_overtime_multiplier`.
    pub overtime_rate_multiplier: Decimal,
    /// Flat overtime rate that overrides the multiplier when positive.
    #[serde(default)]
    pub overtime_fixed_rate: Option<Money>,
    /// Outstanding salary advance deducted from this payslip.
    #[serde(default)]
    pub advance_balance: Money,
}

impl PayslipInputs {
    /// Returns the rate paid per overtime hour.
    ///
    /// A positive fixed rate wins; otherwise the hourly rate times the multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{CompensationBreakdown, PayslipInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = PayslipInputs {
    ///     compensation: CompensationBreakdown::zero(),
    ///     hourly_rate: Decimal::from(20),
    ///     overtime_rate_multiplier: Decimal::new(15, 1),
    ///     overtime_fixed_rate: None,
    ///     advance_balance: Decimal::ZERO,
    /// };
    /// assert_eq!(inputs.overtime_rate(), Decimal::from(30));
    /// ```
    pub fn overtime_rate(&self) -> Money {
        match self.overtime_fixed_rate {
            Some(rate) if rate > Decimal::ZERO => rate,
            _ => self.hourly_rate * self.overtime_rate_multiplier,
        }
    }
}

/// The salary section of a monthly payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSummary {
    /// Monthly basic salary.
    pub basic_salary: Money,
    /// Food, housing and transport allowances combined.
    pub total_allowances: Money,
    /// Pay for overtime hours.
    pub overtime_pay: Money,
    /// Deduction for absent days.
    pub absent_deduction: Money,
    /// Salary advance recovered this month.
    pub advance_payment: Money,
    /// Amount payable after additions and deductions.
    pub net_salary: Money,
}

impl PayslipSummary {
    /// Returns basic salary, allowances and overtime before deductions.
    pub fn gross_salary(&self) -> Money {
        self.basic_salary + self.total_allowances + self.overtime_pay
    }

    /// Returns absent deduction plus advance payment.
    pub fn total_deductions(&self) -> Money {
        self.absent_deduction + self.advance_payment
    }
}
