//! Whole-day calendar helpers used by the preset rules.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// The calendar date `days` days away from `date` (negative goes back).
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Day 1 of the month `month_offset` months away from `date`'s month.
///
/// The day of month of `date` never spills into the neighbouring month:
/// `first_of_month(2024-03-31, -1)` is 2024-02-01.
pub fn first_of_month(date: NaiveDate, month_offset: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let months = Months::new(month_offset.unsigned_abs());
    if month_offset < 0 {
        first.checked_sub_months(months)
    } else {
        first.checked_add_months(months)
    }
}

/// The Monday starting the week that contains `date`. Sunday belongs to
/// the week that began six days earlier.
pub fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    add_days(date, -i64::from(date.weekday().num_days_from_monday()))
}
