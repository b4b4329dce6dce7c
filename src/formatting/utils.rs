use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate};

/// Korean calendar form, e.g. `2024. 3. 5.`
pub fn format_local_date(date: NaiveDate) -> String {
    format!("{}. {}. {}.", date.year(), date.month(), date.day())
}

/// The calendar date of `timestamp` in the local time zone.
pub fn format_local_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    format_local_date(timestamp.with_timezone(&Local).date_naive())
}
