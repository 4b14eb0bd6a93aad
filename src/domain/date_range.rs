use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::calendar;

/// An inclusive span of calendar days, `start <= end`.
///
/// `time` is the wall-clock part of the reference instant the range was
/// computed from. It has no meaning for the range itself and only shows up
/// in the "full" string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    time: NaiveTime,
}

impl DateRange {
    /// Range between two days, given in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            end,
            time: NaiveTime::MIN,
        }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::between(date, date)
    }

    /// Monday through Sunday of the week starting at `start_of_week`.
    pub fn week(start_of_week: NaiveDate) -> Option<Self> {
        let end = calendar::add_days(start_of_week, 6)?;
        Some(Self::between(start_of_week, end))
    }

    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = calendar::add_days(calendar::first_of_month(start, 1)?, -1)?;
        Some(Self::between(start, end))
    }

    /// Same days, carrying `time` as the incidental time-of-day.
    pub fn at(self, time: NaiveTime) -> Self {
        Self { time, ..self }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(self.time)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.end.and_time(self.time)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        (0..=(end - start).num_days()).map(move |i| start + Duration::days(i))
    }
}
