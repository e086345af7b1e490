//! Library-level tests of the projection engine: day-slot table,
//! merger, formatters, activity dispatch and the full projector.

use zeitaufzeichnung::core::activity::Activity;
use zeitaufzeichnung::core::fields::{
    CHECK_OFF, CHECK_ON, CHECKBOX_PAYOUT_NO, CHECKBOX_PAYOUT_YES,
};
use zeitaufzeichnung::core::format::{format_currency_eur, format_date_german};
use zeitaufzeichnung::core::merge::join_values;
use zeitaufzeichnung::core::project::project;
use zeitaufzeichnung::core::slots::day_slots;
use zeitaufzeichnung::models::entry::TimeEntry;
use zeitaufzeichnung::models::month::MonthData;

#[test]
fn day_slots_reproduce_the_template_numbering() {
    let d1 = day_slots(1).unwrap();
    assert_eq!(d1.location, "Textfeld 1_23");
    assert_eq!(d1.start, "Textfeld 1_29");
    assert_eq!(d1.end, "Textfeld 1_83");

    // the numbering jump between day 21 and day 22 must survive as-is
    let d21 = day_slots(21).unwrap();
    assert_eq!(d21.location, "Textfeld 1_128");
    assert_eq!(d21.end, "Textfeld 1_130");

    let d22 = day_slots(22).unwrap();
    assert_eq!(d22.location, "Textfeld 1_151");
    assert_eq!(d22.start, "Textfeld 1_152");

    let d31 = day_slots(31).unwrap();
    assert_eq!(d31.end, "Textfeld 1_180");
}

#[test]
fn day_slots_outside_the_month_are_none() {
    assert!(day_slots(0).is_none());
    assert!(day_slots(32).is_none());
    assert!(day_slots(100).is_none());
}

#[test]
fn join_values_concatenates_in_first_seen_order() {
    assert_eq!(join_values("", "A"), "A");
    assert_eq!(join_values("A", ""), "A");
    assert_eq!(join_values("", ""), "");
    assert_eq!(join_values("A", "B"), "A | B");
    assert_eq!(join_values("A | B", "C"), "A | B | C");
    assert_eq!(join_values("  A  ", " B "), "A | B");
}

#[test]
fn currency_formatting_normalizes_parsable_amounts() {
    assert_eq!(format_currency_eur("25"), "25,00 €");
    assert_eq!(format_currency_eur("25,5"), "25,50 €");
    assert_eq!(format_currency_eur("25.5"), "25,50 €");
    assert_eq!(format_currency_eur("1234.5"), "1.234,50 €");
    assert_eq!(format_currency_eur(" 30 € "), "30,00 €");
}

#[test]
fn currency_formatting_keeps_unparsable_text() {
    assert_eq!(format_currency_eur("kostenlos"), "kostenlos €");
    assert_eq!(format_currency_eur(""), "");
}

#[test]
fn currency_formatting_reappends_euro_sign_on_unparsable_text() {
    // the sign is stripped before parsing and the suffix branch always
    // adds it back, so an already-suffixed value keeps its sign
    assert_eq!(format_currency_eur("n.V. €"), "n.V. €");
    assert_eq!(format_currency_eur("€ kostenlos"), "kostenlos €");
}

#[test]
fn date_formatting_accepts_both_input_shapes() {
    assert_eq!(format_date_german("2025-12-24"), "24 Dezember 2025");
    assert_eq!(format_date_german("24.12.2025"), "24 Dezember 2025");
    assert_eq!(format_date_german("1980-01-05"), "5 Januar 1980");
}

#[test]
fn date_formatting_passes_junk_through() {
    assert_eq!(format_date_german("Dezember"), "Dezember");
    assert_eq!(format_date_german("2025-13-40"), "2025-13-40");
    assert_eq!(format_date_german(""), "");
}

#[test]
fn activity_dispatch_has_exactly_three_branches() {
    assert_eq!(Activity::from_header("Organist"), Activity::Services);
    assert_eq!(Activity::from_header("Mesner"), Activity::Shifts);
    assert_eq!(Activity::from_header("  Organist  "), Activity::Services);
    assert_eq!(Activity::from_header(""), Activity::None);
    assert_eq!(Activity::from_header("   "), Activity::None);
}

fn organist_month() -> MonthData {
    let mut data = MonthData::default();
    data.header.nachname = "Müller".to_string();
    data.header.vorname = "Hans".to_string();
    data.header.monat_jahr = "12/2025".to_string();
    data.header.taetigkeit = "Organist".to_string();
    data.header.geburtsdatum = "1980-01-05".to_string();
    data.header.mehrarbeit_auszahlen = "Ja".to_string();
    data.services = vec![
        TimeEntry::service("2025-12-24", "18:00", "19:30", "Eisenbach", Some("25")),
        TimeEntry::service("2025-12-24", "21:00", "22:30", "Schollach", None),
        TimeEntry::service("2025-12-28", "10:00", "11:00", "Eisenbach", Some("25,5")),
    ];
    data
}

#[test]
fn projection_writes_headers_checkboxes_and_day_slots() {
    let form = project(&organist_month());

    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
    assert_eq!(form.get("Textfeld 1_3"), Some("Hans"));
    assert_eq!(form.get("Textfeld 1_21"), Some("12/2025"));
    assert_eq!(form.get("Textfeld 1_4"), Some("5 Januar 1980"));

    assert_eq!(form.get(CHECKBOX_PAYOUT_YES), Some(CHECK_ON));
    assert_eq!(form.get(CHECKBOX_PAYOUT_NO), Some(CHECK_OFF));

    // two services on the 24th merge per column
    let d24 = day_slots(24).unwrap();
    assert_eq!(
        form.get(d24.location),
        Some("Eisenbach (25,00 €) | Schollach")
    );
    assert_eq!(form.get(d24.start), Some("18:00 | 21:00"));
    assert_eq!(form.get(d24.end), Some("19:30 | 22:30"));

    let d28 = day_slots(28).unwrap();
    assert_eq!(form.get(d28.location), Some("Eisenbach (25,50 €)"));
}

#[test]
fn projection_skips_blank_headers() {
    let form = project(&organist_month());
    // Kirchengemeinde was never set, its widget must be absent
    assert_eq!(form.get("Textfeld 2"), None);
}

#[test]
fn projection_skips_malformed_entry_dates_only() {
    let mut data = organist_month();
    data.services
        .push(TimeEntry::service("not-a-date", "08:00", "09:00", "Nirgendwo", None));

    let form = project(&data);

    // the bad entry left no trace, the good ones still landed
    assert!(form.iter().all(|(_, v)| !v.contains("Nirgendwo")));
    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
    assert!(form.get(day_slots(24).unwrap().start).is_some());
}

#[test]
fn projection_ignores_out_of_month_entry_dates() {
    let mut data = organist_month();
    // February 30th parses as no date at all
    data.services
        .push(TimeEntry::service("2025-02-30", "08:00", "09:00", "X", None));

    let form = project(&data);
    assert!(form.iter().all(|(_, v)| v != "X"));
}

#[test]
fn non_organist_activity_fills_times_without_location() {
    let mut data = MonthData::default();
    data.header.taetigkeit = "Mesner".to_string();
    data.header.mehrarbeit_auszahlen = "Nein".to_string();
    data.shifts = vec![TimeEntry::shift("2025-12-03", "08:00", "12:00")];
    // service entries must be ignored for non-organist roles
    data.services = vec![TimeEntry::service(
        "2025-12-04",
        "10:00",
        "11:00",
        "Eisenbach",
        None,
    )];

    let form = project(&data);

    let d3 = day_slots(3).unwrap();
    assert_eq!(form.get(d3.start), Some("08:00"));
    assert_eq!(form.get(d3.end), Some("12:00"));
    assert_eq!(form.get(d3.location), None);

    let d4 = day_slots(4).unwrap();
    assert_eq!(form.get(d4.location), None);
    assert_eq!(form.get(d4.start), None);

    assert_eq!(form.get(CHECKBOX_PAYOUT_YES), Some(CHECK_OFF));
    assert_eq!(form.get(CHECKBOX_PAYOUT_NO), Some(CHECK_ON));
}

#[test]
fn empty_activity_leaves_day_slots_untouched() {
    let mut data = MonthData::default();
    data.header.nachname = "Müller".to_string();
    data.services = vec![TimeEntry::service(
        "2025-12-24",
        "18:00",
        "19:30",
        "Eisenbach",
        None,
    )];

    let form = project(&data);

    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
    assert_eq!(form.get(day_slots(24).unwrap().location), None);
    // checkboxes are still always emitted
    assert_eq!(form.get(CHECKBOX_PAYOUT_YES), Some(CHECK_OFF));
    assert_eq!(form.get(CHECKBOX_PAYOUT_NO), Some(CHECK_OFF));
}

#[test]
fn free_text_payout_answer_checks_neither_box() {
    let mut data = MonthData::default();
    data.header.mehrarbeit_auszahlen = "vielleicht".to_string();

    let form = project(&data);
    assert_eq!(form.get(CHECKBOX_PAYOUT_YES), Some(CHECK_OFF));
    assert_eq!(form.get(CHECKBOX_PAYOUT_NO), Some(CHECK_OFF));
}

#[test]
fn payout_boxes_are_mutually_exclusive() {
    for answer in ["Ja", "Nein", "ja", "", "JA "] {
        let mut data = MonthData::default();
        data.header.mehrarbeit_auszahlen = answer.to_string();
        let form = project(&data);
        let both_on = form.get(CHECKBOX_PAYOUT_YES) == Some(CHECK_ON)
            && form.get(CHECKBOX_PAYOUT_NO) == Some(CHECK_ON);
        assert!(!both_on, "both boxes on for answer {answer:?}");
    }
}

#[test]
fn month_payload_roundtrips_with_german_keys() {
    let data = organist_month();
    let json = data.to_json().unwrap();

    assert!(json.contains("\"Nachname\""));
    assert!(json.contains("\"Gottesdienste\""));
    assert!(json.contains("\"kirchort\""));
    // blank header fields stay out of the payload
    assert!(!json.contains("Beschäftigungsumfang"));

    let back = MonthData::from_json(&json).unwrap();
    assert_eq!(back, data);
}
