use chrono::{Datelike, NaiveDate, Weekday};
use shared::{DomainError, DomainResult};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::domain::entities::Holiday;

/// Weekday labels used in the exported sheet, Monday first.
pub const WEEKDAY_KANJI: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Day-level view of the target month: day enumeration, weekday lookup and
/// facility holidays.
///
/// Holiday records outside the target month, and records whose date string
/// does not parse as `YYYY-MM-DD`, are dropped on construction.
#[derive(Debug, Clone)]
pub struct MonthCalendar {
    year: i32,
    month: u32,
    first: NaiveDate,
    last_day: u32,
    holidays: BTreeSet<u32>,
}

impl MonthCalendar {
    pub fn new(year: i32, month: u32, holidays: &[Holiday]) -> DomainResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DomainError::InvalidInput(format!("invalid target month: {}-{}", year, month))
        })?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| {
            DomainError::InvalidInput(format!("invalid target month: {}-{}", year, month))
        })?;
        let last_day = next_month.pred_opt().map(|date| date.day()).unwrap_or(31);

        let mut holiday_days = BTreeSet::new();
        for holiday in holidays {
            match NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d") {
                Ok(date) if date.year() == year && date.month() == month => {
                    holiday_days.insert(date.day());
                }
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(date = %holiday.date, "skipping holiday with malformed date");
                }
            }
        }

        Ok(Self {
            year,
            month,
            first,
            last_day,
            holidays: holiday_days,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day numbers of the month, `1..=last_day`.
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.last_day
    }

    pub fn last_day(&self) -> u32 {
        self.last_day
    }

    /// Calendar date of a day number within the month.
    pub fn date(&self, day: u32) -> NaiveDate {
        self.first + chrono::Duration::days(i64::from(day) - 1)
    }

    pub fn weekday(&self, day: u32) -> Weekday {
        self.date(day).weekday()
    }

    /// Kanji label for the day's weekday.
    pub fn weekday_kanji(&self, day: u32) -> &'static str {
        WEEKDAY_KANJI[self.weekday(day).num_days_from_monday() as usize]
    }

    pub fn is_saturday(&self, day: u32) -> bool {
        self.weekday(day) == Weekday::Sat
    }

    pub fn count_saturdays(&self) -> u32 {
        self.days().filter(|&day| self.is_saturday(day)).count() as u32
    }

    pub fn is_facility_holiday(&self, day: u32) -> bool {
        self.holidays.contains(&day)
    }

    /// `YYYY-MM-DD` string for a day number.
    pub fn format_date(&self, day: u32) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, day)
    }
}
