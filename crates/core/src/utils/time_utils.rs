use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::Result;

/// Converts a UTC instant to the calendar date on the farm.
///
/// Month boundaries for month-to-date figures are taken from this date, so a
/// late-evening UTC timestamp lands in the farm's local month.
pub fn farm_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the given farm timezone.
pub fn farm_date_today(tz: Tz) -> NaiveDate {
    farm_date_from_utc(Utc::now(), tz)
}

/// Parses a calendar date from `YYYY-MM-DD` or from a timestamp that starts
/// with one (`2026-10-19T08:30:00Z`).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    Ok(NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?)
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the calendar month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the month `months` before the month containing `date`.
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let start = month_start(date);
    start.checked_sub_months(Months::new(months)).unwrap_or(start)
}

/// `YYYY-MM` key for the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
