//! Daily attendance records and their monthly aggregate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours recorded for one employee on one day.
///
/// # Example
///
/// ```
/// use salary_engine::models::DailyAttendance;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = DailyAttendance {
///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
/// };
/// assert!(record.has_hours());
/// assert_eq!(record.total_hours(), Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The day the hours were worked.
    pub date: NaiveDate,
    /// Regular hours worked.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl DailyAttendance {
    /// Returns regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }

    /// Returns true if any regular or overtime hours were recorded.
    pub fn has_hours(&self) -> bool {
        self.regular_hours > Decimal::ZERO || self.overtime_hours > Decimal::ZERO
    }
}

/// Monthly totals derived from daily attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// First day of the month summarized.
    pub month_start: NaiveDate,
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// Days with hours recorded, excluding the weekly-off day.
    pub days_worked: u32,
    /// Days without hours, excluding the weekly-off day.
    pub absent_days: u32,
    /// Sum of regular hours over the month.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours over the month.
    pub total_overtime_hours: Decimal,
}

impl AttendanceSummary {
    /// Returns regular plus overtime hours for the month.
    pub fn total_hours(&self) -> Decimal {
        self.total_regular_hours + self.total_overtime_hours
    }
}
