#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn zaz() -> Command {
    cargo_bin_cmd!("zeitaufzeichnung")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zeitaufzeichnung.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A December month payload with two services on the 24th and one on the 28th.
pub fn organist_month_json() -> &'static str {
    r#"{
        "Nachname": "Müller",
        "Vorname": "Hans",
        "Monat/Jahr": "12/2025",
        "Tätigkeit": "Organist",
        "Datum": "2025-12-28",
        "Mehrarbeit_auszahlen": "Ja",
        "Gottesdienste": [
            {"datum": "2025-12-24", "beginn": "18:00", "ende": "19:30", "kirchort": "Eisenbach", "satz": "25"},
            {"datum": "2025-12-24", "beginn": "21:00", "ende": "22:30", "kirchort": "Schollach"},
            {"datum": "2025-12-28", "beginn": "10:00", "ende": "11:00", "kirchort": "Eisenbach", "satz": "25,5"}
        ]
    }"#
}

/// Write a payload file for `save --file` and return its path.
pub fn payload_file(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_payload.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write payload file");
    p
}

/// Initialize DB and save the standard December draft for user "local"
pub fn init_db_with_draft(db_path: &str, name: &str) {
    zaz()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let payload = payload_file(name, organist_month_json());

    zaz()
        .args(["--db", db_path, "--test", "save", "12/2025", "--file", &payload])
        .assert()
        .success();
}
