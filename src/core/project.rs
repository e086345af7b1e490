//! Field projector: turns a month record into the slot→value map the
//! rendering collaborator consumes.
//!
//! The projection is best-effort by contract: a malformed entry date,
//! a day without slots or an unparsable rate only affects that single
//! contribution; header fields and all other entries still land.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::activity::Activity;
use crate::core::fields::{
    CHECK_OFF, CHECK_ON, CHECKBOX_PAYOUT_NO, CHECKBOX_PAYOUT_YES, PAYOUT_NO, PAYOUT_YES,
};
use crate::core::format::{format_currency_eur, format_date_german};
use crate::core::merge::join_values;
use crate::core::slots::day_slots;
use crate::models::entry::TimeEntry;
use crate::models::month::MonthData;

/// The completed slot→value map for one month.
///
/// Only identifiers from the field catalogue and the day-slot table are
/// ever present. Ordered for stable snapshots and stable test output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilledForm {
    values: BTreeMap<String, String>,
}

impl FilledForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Merge a contribution into a slot, concatenating with earlier
    /// values from the same day. Empty contributions are dropped.
    pub fn merge(&mut self, field: &str, value: &str) {
        let existing = self.values.get(field).map(String::as_str).unwrap_or("");
        let joined = join_values(existing, value);
        if !joined.is_empty() {
            self.values.insert(field.to_string(), joined);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Assemble the full slot→value map for a month record.
pub fn project(data: &MonthData) -> FilledForm {
    let mut form = FilledForm::new();

    // 1. Scalar header fields; skip blanks, long-format the two dates.
    for (field, raw) in data.header.fields() {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }

        if field.is_date() {
            form.set(field.form_field(), format_date_german(value));
        } else {
            form.set(field.form_field(), value);
        }
    }

    // 2. Payout checkboxes. Both widgets are always emitted; only the
    //    exact markers switch one of them on, so both-on cannot happen.
    let payout = data.header.mehrarbeit_auszahlen.trim();
    form.set(
        CHECKBOX_PAYOUT_YES,
        if payout == PAYOUT_YES { CHECK_ON } else { CHECK_OFF },
    );
    form.set(
        CHECKBOX_PAYOUT_NO,
        if payout == PAYOUT_NO { CHECK_ON } else { CHECK_OFF },
    );

    // 3. Day slots from the authoritative entry collection.
    match Activity::from_header(&data.header.taetigkeit) {
        Activity::Services => apply_services(&mut form, &data.services),
        Activity::Shifts => apply_shifts(&mut form, &data.shifts),
        Activity::None => {}
    }

    form
}

/// Project service entries: location (optionally suffixed with the
/// formatted rate), begin and end per day.
fn apply_services(form: &mut FilledForm, entries: &[TimeEntry]) {
    for entry in entries {
        let Some(slots) = resolve_slots(&entry.date) else {
            continue;
        };

        let mut location = entry
            .location
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string();

        if let Some(rate) = entry.rate.as_deref().map(str::trim)
            && !rate.is_empty()
        {
            location = format!("{location} ({})", format_currency_eur(rate));
        }

        form.merge(slots.location, &location);
        form.merge(slots.start, &entry.start);
        form.merge(slots.end, &entry.end);
    }
}

/// Project work shifts: begin and end only, the location column of the
/// form row stays untouched.
fn apply_shifts(form: &mut FilledForm, entries: &[TimeEntry]) {
    for entry in entries {
        let Some(slots) = resolve_slots(&entry.date) else {
            continue;
        };

        form.merge(slots.start, &entry.start);
        form.merge(slots.end, &entry.end);
    }
}

/// Parse an entry date and resolve its day on the slot table.
/// Unparsable dates and out-of-table days are both "skip".
fn resolve_slots(date: &str) -> Option<&'static crate::core::slots::DaySlots> {
    let parsed = crate::utils::date::parse_date(date.trim())?;
    day_slots(parsed.day())
}
