//! Per-user master data, merged into the header at submit time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub vorname: String,
    #[serde(default)]
    pub nachname: String,
    #[serde(default)]
    pub geburtsdatum: String,
    #[serde(default)]
    pub personalnummer: String,
    #[serde(default)]
    pub einsatzort: String,
    #[serde(default)]
    pub gkz: String,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.vorname.is_empty()
            && self.nachname.is_empty()
            && self.geburtsdatum.is_empty()
            && self.personalnummer.is_empty()
            && self.einsatzort.is_empty()
            && self.gkz.is_empty()
    }
}
