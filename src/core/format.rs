//! Fail-soft value formatters for dates and euro amounts.
//!
//! Both formatters return their input essentially unchanged when it
//! cannot be interpreted; malformed values never abort a projection.

use chrono::{Datelike, NaiveDate};

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Render a date string as German long form, e.g. "24 Dezember 2025".
///
/// Accepts ISO (`YYYY-MM-DD`) and German numeric (`DD.MM.YYYY`) input;
/// any other shape is passed through unchanged.
pub fn format_date_german(value: &str) -> String {
    let parsed = if value.len() == 10 && value.contains('-') {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else if value.len() == 10 && value.contains('.') {
        NaiveDate::parse_from_str(value, "%d.%m.%Y").ok()
    } else {
        None
    };

    match parsed {
        Some(d) => format!(
            "{} {} {}",
            d.day(),
            GERMAN_MONTHS[d.month0() as usize],
            d.year()
        ),
        None => value.to_string(),
    }
}

/// Normalize a rate string to a euro amount, e.g. "25" → "25,00 €".
///
/// Tolerates `.` or `,` as decimal separator and an already-present
/// euro sign. Unparsable input keeps its text, with the currency
/// suffix re-appended after the sign was stripped.
pub fn format_currency_eur(value: &str) -> String {
    let stripped = value.trim().replace('€', "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return String::new();
    }

    let normalized = stripped.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(amount) => format!("{} €", german_decimal(amount)),
        Err(_) => format!("{stripped} €"),
    }
}

/// Two decimals, comma as decimal separator, dot as thousands grouping.
fn german_decimal(amount: f64) -> String {
    let plain = format!("{amount:.2}");
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped},{frac_part}")
}
