//! Library-level tests of the draft/submission lifecycle against an
//! in-memory database.

use zeitaufzeichnung::core::project::FilledForm;
use zeitaufzeichnung::core::record::RecordLogic;
use zeitaufzeichnung::core::submit::SubmitLogic;
use zeitaufzeichnung::db::initialize::init_db;
use zeitaufzeichnung::db::pool::DbPool;
use zeitaufzeichnung::db::queries;
use zeitaufzeichnung::errors::AppError;
use zeitaufzeichnung::models::entry::TimeEntry;
use zeitaufzeichnung::models::month::MonthData;
use zeitaufzeichnung::models::profile::Profile;

fn pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("run migrations");
    pool
}

fn december_draft() -> MonthData {
    let mut data = MonthData::default();
    data.header.nachname = "Müller".to_string();
    data.header.taetigkeit = "Organist".to_string();
    data.services = vec![TimeEntry::service(
        "2025-12-24",
        "18:00",
        "19:30",
        "Eisenbach",
        Some("25"),
    )];
    data
}

#[test]
fn save_and_load_roundtrip() {
    let mut pool = pool();
    let data = december_draft();

    RecordLogic::save(&mut pool, "local", "12/2025", &data).unwrap();

    let draft = RecordLogic::load(&mut pool, "local", "12/2025")
        .unwrap()
        .expect("draft exists");
    assert_eq!(draft.user_id, "local");
    assert_eq!(draft.month_year, "12/2025");
    assert_eq!(draft.data, data);
}

#[test]
fn saving_twice_keeps_a_single_row_with_the_second_payload() {
    let mut pool = pool();

    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    let mut second = december_draft();
    second.header.nachname = "Schmidt".to_string();
    RecordLogic::save(&mut pool, "local", "12/2025", &second).unwrap();

    let drafts = RecordLogic::list(&mut pool, "local").unwrap();
    assert_eq!(drafts.len(), 1);

    let draft = RecordLogic::load(&mut pool, "local", "12/2025")
        .unwrap()
        .unwrap();
    assert_eq!(draft.data.header.nachname, "Schmidt");
}

#[test]
fn drafts_are_isolated_per_user() {
    let mut pool = pool();

    RecordLogic::save(&mut pool, "anna", "12/2025", &december_draft()).unwrap();

    assert!(RecordLogic::load(&mut pool, "local", "12/2025")
        .unwrap()
        .is_none());
    assert!(RecordLogic::load(&mut pool, "anna", "12/2025")
        .unwrap()
        .is_some());
}

#[test]
fn malformed_month_key_is_rejected() {
    let mut pool = pool();

    let err = RecordLogic::save(&mut pool, "local", "2025-12", &december_draft()).unwrap_err();
    assert!(matches!(err, AppError::InvalidMonth(_)));

    let err = RecordLogic::save(&mut pool, "local", "13/2025", &december_draft()).unwrap_err();
    assert!(matches!(err, AppError::InvalidMonth(_)));
}

#[test]
fn submit_without_a_draft_fails() {
    let mut pool = pool();

    let err = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap_err();
    assert!(matches!(err, AppError::DraftNotFound { .. }));
}

#[test]
fn every_submit_appends_a_new_row() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    let first = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    let second = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    assert_ne!(first.id, second.id);

    let rows = queries::list_submissions(&pool.conn, "local", Some("12/2025")).unwrap();
    assert_eq!(rows.len(), 2);

    // the draft itself stays editable
    assert!(RecordLogic::load(&mut pool, "local", "12/2025")
        .unwrap()
        .is_some());
}

#[test]
fn submit_overlays_the_current_profile() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    let profile = Profile {
        nachname: "Neumann".to_string(),
        personalnummer: "4711".to_string(),
        ..Profile::default()
    };
    queries::save_profile(&pool.conn, "local", &profile).unwrap();

    let submission = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    let form = FilledForm::from_json(&submission.snapshot).unwrap();

    assert_eq!(form.get("Textfeld 1"), Some("Neumann"));
    assert_eq!(form.get("Textfeld 1_2"), Some("4711"));
}

#[test]
fn blank_profile_fields_leave_draft_values_alone() {
    let mut pool = pool();

    let mut data = december_draft();
    data.header.vorname = "Hans".to_string();
    RecordLogic::save(&mut pool, "local", "12/2025", &data).unwrap();

    // profile has a pers-nr but no name fields
    let profile = Profile {
        personalnummer: "4711".to_string(),
        ..Profile::default()
    };
    queries::save_profile(&pool.conn, "local", &profile).unwrap();

    let submission = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    let form = FilledForm::from_json(&submission.snapshot).unwrap();

    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
    assert_eq!(form.get("Textfeld 1_3"), Some("Hans"));
}

#[test]
fn an_all_blank_profile_row_is_ignored_at_submit() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    queries::save_profile(&pool.conn, "local", &Profile::default()).unwrap();
    assert!(Profile::default().is_empty());

    let submission = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    let form = FilledForm::from_json(&submission.snapshot).unwrap();

    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
}

#[test]
fn snapshots_reflect_the_profile_at_submit_time() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    let mut profile = Profile {
        einsatzort: "Eisenbach".to_string(),
        ..Profile::default()
    };
    queries::save_profile(&pool.conn, "local", &profile).unwrap();
    let first = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();

    profile.einsatzort = "Schollach".to_string();
    queries::save_profile(&pool.conn, "local", &profile).unwrap();
    let second = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();

    let f1 = FilledForm::from_json(&first.snapshot).unwrap();
    let f2 = FilledForm::from_json(&second.snapshot).unwrap();
    assert_eq!(f1.get("Textfeld 2_2"), Some("Eisenbach"));
    assert_eq!(f2.get("Textfeld 2_2"), Some("Schollach"));
}

#[test]
fn snapshot_month_defaults_to_the_record_key() {
    let mut pool = pool();
    // draft never filled the Monat/Jahr header
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();

    let submission = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();
    let form = FilledForm::from_json(&submission.snapshot).unwrap();

    assert_eq!(form.get("Textfeld 1_21"), Some("12/2025"));
}

#[test]
fn deleting_a_draft_keeps_its_submissions() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();
    SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();

    assert!(RecordLogic::delete(&mut pool, "local", "12/2025").unwrap());
    assert!(RecordLogic::load(&mut pool, "local", "12/2025")
        .unwrap()
        .is_none());

    let rows = queries::list_submissions(&pool.conn, "local", None).unwrap();
    assert_eq!(rows.len(), 1);

    // a second delete is a no-op
    assert!(!RecordLogic::delete(&mut pool, "local", "12/2025").unwrap());
}

#[test]
fn frozen_snapshots_survive_later_draft_edits() {
    let mut pool = pool();
    RecordLogic::save(&mut pool, "local", "12/2025", &december_draft()).unwrap();
    let submission = SubmitLogic::submit(&mut pool, "local", "12/2025").unwrap();

    let mut edited = december_draft();
    edited.header.nachname = "Anders".to_string();
    RecordLogic::save(&mut pool, "local", "12/2025", &edited).unwrap();

    let row = queries::get_submission(&pool.conn, submission.id)
        .unwrap()
        .expect("submission row");
    let form = FilledForm::from_json(&row.snapshot).unwrap();
    assert_eq!(form.get("Textfeld 1"), Some("Müller"));
}

#[test]
fn migrations_are_recorded_once() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    // re-running must be a no-op, not an error
    init_db(&pool.conn).unwrap();

    let n: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(n, 1);
}
