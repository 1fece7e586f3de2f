use chrono::{Datelike, NaiveDate};

/// Canonical `YYYY-MM-DD` key from a date's calendar fields. Callers pass
/// a local date; no UTC conversion happens here or upstream, so a key
/// never shifts a day near midnight.
pub fn local_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `YYYY-MM` key for a date's month.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parses a strict zero-padded `YYYY-MM` month key. Anything else (bad
/// padding, month 0 or 13, garbage) is `None`; callers map that to
/// all-zero stats rather than an error.
pub fn parse_month_key(month: &str) -> Option<(i32, u32)> {
    let (y, m) = month.split_once('-')?;
    if y.len() != 4 || m.len() != 2 {
        return None;
    }
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}
