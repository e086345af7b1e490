//! A single day-stamped entry supplied by the user.

use serde::{Deserialize, Serialize};

/// One service or work-shift record of a month.
///
/// All fields are kept as raw text; parsing happens lazily during
/// projection so that a malformed entry can be skipped without
/// invalidating the whole record. Service entries carry a church
/// location and an optional rate; work shifts use only the times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Calendar date, ISO "YYYY-MM-DD" as produced by date inputs.
    #[serde(rename = "datum", default)]
    pub date: String,

    #[serde(rename = "beginn", default)]
    pub start: String,

    #[serde(rename = "ende", default)]
    pub end: String,

    /// Church location; present on service entries only.
    #[serde(rename = "kirchort", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Per-service rate as entered, e.g. "25" or "25,50".
    #[serde(rename = "satz", default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
}

impl TimeEntry {
    /// Service entry constructor (location and optional rate).
    pub fn service(date: &str, start: &str, end: &str, location: &str, rate: Option<&str>) -> Self {
        Self {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            location: Some(location.to_string()),
            rate: rate.map(str::to_string),
        }
    }

    /// Work-shift entry constructor (times only).
    pub fn shift(date: &str, start: &str, end: &str) -> Self {
        Self {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            location: None,
            rate: None,
        }
    }
}
