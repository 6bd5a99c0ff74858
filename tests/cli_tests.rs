mod common;
use common::{init_db, punch, rta, setup_test_db};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");
    init_db(&db_path);
    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_quick_clock_updates_the_same_record() {
    let db_path = setup_test_db("cli_quick_clock");
    init_db(&db_path);

    punch(&db_path, "start", "cha", "2024-01-01", "09:00:00");

    rta()
        .args([
            "--db", &db_path, "punch", "end", "--person", "cha", "--date", "2024-01-01",
            "--at", "17:30:00",
        ])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("work 08:30:00"));

    let out = rta()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows: Vec<&str> = stdout.lines().filter(|l| l.contains("2024-01-01")).collect();
    assert_eq!(rows.len(), 1, "punches must not create extra records");
    assert!(rows[0].contains("09:00:00"));
    assert!(rows[0].contains("17:30:00"));
}

#[test]
fn test_punch_unknown_person_fails() {
    let db_path = setup_test_db("cli_unknown_person");
    init_db(&db_path);

    rta()
        .args([
            "--db", &db_path, "punch", "start", "--person", "zed", "--date", "2024-01-01",
            "--at", "09:00:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown staff member"));
}

#[test]
fn test_punch_invalid_date_fails() {
    let db_path = setup_test_db("cli_invalid_date");
    init_db(&db_path);

    rta()
        .args([
            "--db", &db_path, "punch", "start", "--person", "cha", "--date", "01/02/2024",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_edit_sets_break_and_recomputes_work() {
    let db_path = setup_test_db("cli_edit");
    init_db(&db_path);

    punch(&db_path, "start", "ou", "2024-01-02", "09:00:00");
    punch(&db_path, "end", "ou", "2024-01-02", "18:00:00");

    rta()
        .args([
            "--db",
            &db_path,
            "edit",
            "1",
            "--break-start",
            "12:00:00",
            "--break-end",
            "13:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("work 08:00:00"));

    rta()
        .args(["--db", &db_path, "list", "--person", "ou"])
        .assert()
        .success()
        .stdout(contains("12:00:00").and(contains("13:00:00")));
}

#[test]
fn test_edit_unknown_id_is_a_noop() {
    let db_path = setup_test_db("cli_edit_unknown");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "edit", "42", "--start", "09:00:00"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_delete_requires_confirmation() {
    let db_path = setup_test_db("cli_del_confirm");
    init_db(&db_path);
    punch(&db_path, "start", "an", "2024-01-03", "09:00:00");

    rta()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rta()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2024-01-03"));

    rta()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rta()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_stats_lists_whole_roster() {
    let db_path = setup_test_db("cli_stats");
    init_db(&db_path);

    punch(&db_path, "start", "cha", "2024-01-01", "09:00:00");
    punch(&db_path, "end", "cha", "2024-01-01", "18:00:00");
    punch(&db_path, "break-start", "cha", "2024-01-01", "12:00:00");
    punch(&db_path, "break-end", "cha", "2024-01-01", "13:00:00");
    punch(&db_path, "start", "cha", "2024-02-01", "09:00:00");

    rta()
        .args(["--db", &db_path, "stats", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("08:00:00"))
        .stdout(contains("查"))
        .stdout(contains("歐"))
        .stdout(contains("安"));
}

#[test]
fn test_stats_rejects_bad_month() {
    let db_path = setup_test_db("cli_stats_bad_month");
    init_db(&db_path);

    rta()
        .args(["--db", &db_path, "stats", "--month", "2024/01"])
        .assert()
        .failure()
        .stderr(contains("Invalid month format"));
}

#[test]
fn test_staff_prints_roster() {
    rta()
        .arg("staff")
        .assert()
        .success()
        .stdout(contains("cha").and(contains("ou")).and(contains("an")));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    punch(&db_path, "start", "cha", "2024-01-01", "09:00:00");

    rta()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("punch"));
}

#[test]
fn test_schema_setup_is_only_reported_by_init() {
    let db_path = setup_test_db("cli_quiet_open");

    rta()
        .args([
            "--db", &db_path, "punch", "start", "--person", "cha", "--date", "2024-01-01",
            "--at", "09:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("Created records table").not())
        .stdout(contains("Migration applied").not());

    let fresh = setup_test_db("cli_init_reports_schema");
    rta()
        .args(["--db", &fresh, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created records table"));
}

#[test]
fn test_db_migrate_reports_steps_on_fresh_file() {
    let db_path = setup_test_db("cli_db_migrate");

    rta()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("is up to date"));
}

#[test]
fn test_deleted_id_is_not_reused_by_next_punch() {
    let db_path = setup_test_db("cli_id_reuse");
    init_db(&db_path);
    punch(&db_path, "start", "cha", "2024-01-01", "09:00:00");

    rta()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    rta()
        .args([
            "--db", &db_path, "punch", "start", "--person", "ou", "--date", "2024-01-01",
            "--at", "08:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("(#2, new record)"));

    rta()
        .args(["--db", &db_path, "edit", "1", "--start", "10:00:00"])
        .assert()
        .success()
        .stdout(contains("not found"));
}
