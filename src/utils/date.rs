use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static MONTH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{4})$").expect("month/year pattern"));

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a record key in "MM/YYYY" form into (month, year).
pub fn parse_month_year(s: &str) -> Option<(u32, i32)> {
    let caps = MONTH_YEAR_RE.captures(s.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let year: i32 = caps[2].parse().ok()?;

    if (1..=12).contains(&month) {
        Some((month, year))
    } else {
        None
    }
}

/// Current month as a record key, e.g. "08/2026".
pub fn current_month_year() -> String {
    let now = today();
    format!("{:02}/{}", now.month(), now.year())
}
