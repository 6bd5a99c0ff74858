#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rattendance::models::record::{AttendanceRecord, RecordId};
use rattendance::models::time_of_day::TimeOfDay;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
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

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    rta()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Quick clock through the CLI with explicit person, date and time
pub fn punch(db_path: &str, field: &str, person: &str, date: &str, at: &str) {
    rta()
        .args([
            "--db", db_path, "punch", field, "--person", person, "--date", date, "--at", at,
        ])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn t(s: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse_lenient(s)
}

/// Record with all four punches given as text (`00:00:00` = unset)
pub fn rec(id: i64, person: &str, date: &str, times: [&str; 4]) -> AttendanceRecord {
    let mut r = AttendanceRecord::new(RecordId(id), person, d(date));
    r.start = t(times[0]);
    r.end = t(times[1]);
    r.break_start = t(times[2]);
    r.break_end = t(times[3]);
    r
}
