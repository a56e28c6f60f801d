//! Monthly attendance aggregation.
//!
//! This module folds a month of [`DailyAttendance`] records into an
//! [`AttendanceSummary`]: hour totals, days worked and absent days. Days
//! falling on the weekly-off weekday never count as worked or absent, but
//! any hours recorded on them still count toward the totals.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceSummary, DailyAttendance};

/// Returns the first day of the month and the number of days in it.
///
/// # Errors
///
/// Returns `InvalidAttendance` if the year/month pair is not a real month.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, u32)> {
    let invalid = || EngineError::InvalidAttendance {
        message: format!("invalid month {}-{:02}", year, month),
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((start, (next - start).num_days() as u32))
}

/// Summarizes one month of attendance.
///
/// Every calendar day of the month is considered, so a day without a record
/// counts as absent unless it falls on `weekly_off`.
///
/// # Errors
///
/// Returns `InvalidAttendance` if the month is invalid, a record falls outside
/// the month, a date appears twice, or any hour value is negative.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::summarize_attendance;
/// use salary_engine::models::DailyAttendance;
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let records = vec![DailyAttendance {
///     date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
/// }];
///
/// let summary = summarize_attendance(2026, 2, &records, Weekday::Fri).unwrap();
/// assert_eq!(summary.days_in_month, 28);
/// assert_eq!(summary.days_worked, 1);
/// assert_eq!(summary.absent_days, 23); // 28 days - 4 Fridays - 1 worked
/// assert_eq!(summary.total_hours(), Decimal::from(10));
/// ```
pub fn summarize_attendance(
    year: i32,
    month: u32,
    records: &[DailyAttendance],
    weekly_off: Weekday,
) -> EngineResult<AttendanceSummary> {
    let (month_start, days_in_month) = month_bounds(year, month)?;

    let mut by_date: BTreeMap<NaiveDate, &DailyAttendance> = BTreeMap::new();
    for record in records {
        if record.date.year() != year || record.date.month() != month {
            return Err(EngineError::InvalidAttendance {
                message: format!(
                    "record for {} is outside {}-{:02}",
                    record.date, year, month
                ),
            });
        }
        if record.regular_hours < Decimal::ZERO || record.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                message: format!("negative hours recorded for {}", record.date),
            });
        }
        if by_date.insert(record.date, record).is_some() {
            return Err(EngineError::InvalidAttendance {
                message: format!("duplicate record for {}", record.date),
            });
        }
    }

    let mut days_worked = 0;
    let mut absent_days = 0;
    for date in month_start.iter_days().take(days_in_month as usize) {
        if date.weekday() == weekly_off {
            continue;
        }
        match by_date.get(&date) {
            Some(record) if record.has_hours() => days_worked += 1,
            _ => absent_days += 1,
        }
    }

    Ok(AttendanceSummary {
        month_start,
        days_in_month,
        days_worked,
        absent_days,
        total_regular_hours: records.iter().map(|r| r.regular_hours).sum(),
        total_overtime_hours: records.iter().map(|r| r.overtime_hours).sum(),
    })
}
