//! Header field catalogue of the pre-printed time-sheet form.
//!
//! Every logical header key is an enum variant, paired with the exact
//! widget name it occupies on the upstream PDF template. The widget
//! names are authored facts of the template generator and must be
//! emitted verbatim.

/// Logical header fields of the form (first page, master data block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderField {
    Kirchengemeinde,
    Einsatzort,
    Gkz,
    MonatJahr,
    Nachname,
    Vorname,
    Geburtsdatum,
    PersNr,
    Taetigkeit,
    Beschaeftigungsumfang,
    MehrarbeitText,
    MehrarbeitStunden,
    Datum,
}

impl HeaderField {
    /// All header fields in the order they appear on the form.
    pub const ALL: [HeaderField; 13] = [
        HeaderField::Kirchengemeinde,
        HeaderField::Einsatzort,
        HeaderField::Gkz,
        HeaderField::MonatJahr,
        HeaderField::Nachname,
        HeaderField::Vorname,
        HeaderField::Geburtsdatum,
        HeaderField::PersNr,
        HeaderField::Taetigkeit,
        HeaderField::Beschaeftigungsumfang,
        HeaderField::MehrarbeitText,
        HeaderField::MehrarbeitStunden,
        HeaderField::Datum,
    ];

    /// Widget name on the PDF template.
    pub fn form_field(self) -> &'static str {
        match self {
            HeaderField::Kirchengemeinde => "Textfeld 2",
            HeaderField::Einsatzort => "Textfeld 2_2",
            HeaderField::Gkz => "Textfeld 1_6",
            HeaderField::MonatJahr => "Textfeld 1_21",
            HeaderField::Nachname => "Textfeld 1",
            HeaderField::Vorname => "Textfeld 1_3",
            HeaderField::Geburtsdatum => "Textfeld 1_4",
            HeaderField::PersNr => "Textfeld 1_2",
            HeaderField::Taetigkeit => "Textfeld 1_5",
            HeaderField::Beschaeftigungsumfang => "Textfeld 1_7",
            HeaderField::MehrarbeitText => "Textfeld 1_8",
            HeaderField::MehrarbeitStunden => "Textfeld 1_9",
            HeaderField::Datum => "Textfeld 1_10",
        }
    }

    /// Human-readable label, identical to the key used on the paper form
    /// and in saved month records.
    pub fn label(self) -> &'static str {
        match self {
            HeaderField::Kirchengemeinde => "Kath. Kirchengemeinde",
            HeaderField::Einsatzort => "Einsatzort",
            HeaderField::Gkz => "GKZ",
            HeaderField::MonatJahr => "Monat/Jahr",
            HeaderField::Nachname => "Nachname",
            HeaderField::Vorname => "Vorname",
            HeaderField::Geburtsdatum => "Geburtsdatum",
            HeaderField::PersNr => "Pers.-Nr.",
            HeaderField::Taetigkeit => "Tätigkeit",
            HeaderField::Beschaeftigungsumfang => "Beschäftigungsumfang",
            HeaderField::MehrarbeitText => "Mehrarbeit (Textfeld)",
            HeaderField::MehrarbeitStunden => "Mehrarbeit Stunden",
            HeaderField::Datum => "Datum",
        }
    }

    /// Date-shaped fields get the German long-date treatment on projection.
    pub fn is_date(self) -> bool {
        matches!(self, HeaderField::Geburtsdatum | HeaderField::Datum)
    }
}

/// Checkbox pair for the "Mehrarbeitsstunden auszahlen" question.
pub const CHECKBOX_PAYOUT_YES: &str = "Markierfeld 1";
pub const CHECKBOX_PAYOUT_NO: &str = "Markierfeld 1_2";

/// Checkbox widget states expected by the template.
pub const CHECK_ON: &str = "/Yes";
pub const CHECK_OFF: &str = "/Off";

/// Exact payout markers; anything else leaves both checkboxes off.
pub const PAYOUT_YES: &str = "Ja";
pub const PAYOUT_NO: &str = "Nein";

/// Reserved activity marker selecting the service entry collection.
pub const ACTIVITY_ORGANIST: &str = "Organist";
