//! The editable payload of a monthly record: header fields plus the two
//! entry collections. Serialized as one JSON document into the drafts
//! table, keyed with the original form labels.

use serde::{Deserialize, Serialize};

use crate::core::fields::HeaderField;
use crate::models::entry::TimeEntry;
use crate::models::profile::Profile;

fn is_empty(s: &String) -> bool {
    s.is_empty()
}

/// Scalar header fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthHeader {
    #[serde(rename = "Kath. Kirchengemeinde", default, skip_serializing_if = "is_empty")]
    pub kirchengemeinde: String,

    #[serde(rename = "Einsatzort", default, skip_serializing_if = "is_empty")]
    pub einsatzort: String,

    #[serde(rename = "GKZ", default, skip_serializing_if = "is_empty")]
    pub gkz: String,

    #[serde(rename = "Monat/Jahr", default, skip_serializing_if = "is_empty")]
    pub monat_jahr: String,

    #[serde(rename = "Nachname", default, skip_serializing_if = "is_empty")]
    pub nachname: String,

    #[serde(rename = "Vorname", default, skip_serializing_if = "is_empty")]
    pub vorname: String,

    #[serde(rename = "Geburtsdatum", default, skip_serializing_if = "is_empty")]
    pub geburtsdatum: String,

    #[serde(rename = "Pers.-Nr.", default, skip_serializing_if = "is_empty")]
    pub pers_nr: String,

    #[serde(rename = "Tätigkeit", default, skip_serializing_if = "is_empty")]
    pub taetigkeit: String,

    #[serde(rename = "Beschäftigungsumfang", default, skip_serializing_if = "is_empty")]
    pub beschaeftigungsumfang: String,

    #[serde(rename = "Mehrarbeit (Textfeld)", default, skip_serializing_if = "is_empty")]
    pub mehrarbeit_text: String,

    #[serde(rename = "Mehrarbeit Stunden", default, skip_serializing_if = "is_empty")]
    pub mehrarbeit_stunden: String,

    #[serde(rename = "Datum", default, skip_serializing_if = "is_empty")]
    pub datum: String,

    /// Payout question driving the checkbox pair; "Ja", "Nein" or free text.
    #[serde(rename = "Mehrarbeit_auszahlen", default, skip_serializing_if = "is_empty")]
    pub mehrarbeit_auszahlen: String,
}

impl MonthHeader {
    /// Pair every header field with its raw value, in form order.
    pub fn fields(&self) -> [(HeaderField, &str); 13] {
        [
            (HeaderField::Kirchengemeinde, self.kirchengemeinde.as_str()),
            (HeaderField::Einsatzort, self.einsatzort.as_str()),
            (HeaderField::Gkz, self.gkz.as_str()),
            (HeaderField::MonatJahr, self.monat_jahr.as_str()),
            (HeaderField::Nachname, self.nachname.as_str()),
            (HeaderField::Vorname, self.vorname.as_str()),
            (HeaderField::Geburtsdatum, self.geburtsdatum.as_str()),
            (HeaderField::PersNr, self.pers_nr.as_str()),
            (HeaderField::Taetigkeit, self.taetigkeit.as_str()),
            (
                HeaderField::Beschaeftigungsumfang,
                self.beschaeftigungsumfang.as_str(),
            ),
            (HeaderField::MehrarbeitText, self.mehrarbeit_text.as_str()),
            (
                HeaderField::MehrarbeitStunden,
                self.mehrarbeit_stunden.as_str(),
            ),
            (HeaderField::Datum, self.datum.as_str()),
        ]
    }

    /// Overlay master data fetched at submit time.
    ///
    /// Profile values win over whatever was stored in the draft; blank
    /// profile fields leave the draft value untouched.
    pub fn apply_profile(&mut self, profile: &Profile) {
        overlay(&mut self.vorname, &profile.vorname);
        overlay(&mut self.nachname, &profile.nachname);
        overlay(&mut self.geburtsdatum, &profile.geburtsdatum);
        overlay(&mut self.pers_nr, &profile.personalnummer);
        overlay(&mut self.einsatzort, &profile.einsatzort);
        overlay(&mut self.gkz, &profile.gkz);
    }
}

fn overlay(target: &mut String, source: &str) {
    let source = source.trim();
    if !source.is_empty() {
        *target = source.to_string();
    }
}

/// Full payload of one monthly draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthData {
    #[serde(flatten)]
    pub header: MonthHeader,

    /// Service entries (Dienste/Gottesdienste/Proben row on the form).
    #[serde(rename = "Gottesdienste", default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<TimeEntry>,

    /// Generic work shifts for non-organist roles.
    #[serde(rename = "Arbeitszeiten", default, skip_serializing_if = "Vec::is_empty")]
    pub shifts: Vec<TimeEntry>,
}

impl MonthData {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
