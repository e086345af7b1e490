//! Attachment file name generator.
//!
//! Format: NACHNAME,VORNAME,JAHR,MONAT.<ext>, e.g.
//! MUELLER,HANS,2025,12.pdf — the name the payroll office expects.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::month::MonthHeader;
use crate::utils::date::{current_month_year, parse_month_year};

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9_,\-\.]").expect("sanitize pattern"));

fn replace_umlauts(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            other => out.push(other),
        }
    }
    out
}

fn clean_name_part(raw: &str) -> String {
    let upper = replace_umlauts(raw).trim().to_uppercase().replace(' ', "_");
    let cleaned = UNSAFE_CHARS.replace_all(&upper, "_").to_string();

    if cleaned.is_empty() {
        "UNKNOWN".to_string()
    } else {
        cleaned
    }
}

/// Build the standardized attachment name from the header fields.
/// Falls back to the current month when "Monat/Jahr" is malformed.
pub fn generate_filename(header: &MonthHeader, extension: &str) -> String {
    let nachname = clean_name_part(&header.nachname);
    let vorname = clean_name_part(&header.vorname);

    let month_year = header.monat_jahr.trim();
    let (month, year) = parse_month_year(month_year)
        .or_else(|| parse_month_year(&current_month_year()))
        .unwrap_or((1, 1970));

    format!("{nachname},{vorname},{year},{month:02}.{extension}")
}
