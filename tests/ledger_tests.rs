mod common;
use common::{d, rec, t};
use rattendance::core::ledger::{LedgerStore, PunchOutcome};
use rattendance::models::punch_field::PunchField;
use rattendance::models::record::RecordId;
use std::collections::HashSet;

#[test]
fn test_start_then_end_punch_builds_one_record() {
    let mut store = LedgerStore::new();

    let first = store.upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"));
    let second = store.upsert_punch("cha", d("2024-01-01"), PunchField::End, t("17:30:00"));

    assert!(matches!(first, PunchOutcome::Created(_)));
    assert_eq!(second, PunchOutcome::Updated(first.id()));
    assert_eq!(store.len(), 1);

    let r = &store.list()[0];
    assert_eq!(r.punch_str(PunchField::Start), "09:00:00");
    assert_eq!(r.punch_str(PunchField::End), "17:30:00");
    assert_eq!(r.punch_str(PunchField::BreakStart), "00:00:00");
    assert_eq!(r.punch_str(PunchField::BreakEnd), "00:00:00");
}

#[test]
fn test_repeated_punch_is_idempotent() {
    let mut store = LedgerStore::new();

    store.upsert_punch("ou", d("2024-02-10"), PunchField::BreakStart, t("12:00:00"));
    let after_first = store.list().to_vec();

    store.upsert_punch("ou", d("2024-02-10"), PunchField::BreakStart, t("12:00:00"));
    assert_eq!(store.list(), after_first.as_slice());
}

#[test]
fn test_punch_overwrites_only_its_field() {
    let mut store = LedgerStore::new();
    let date = d("2024-03-05");

    store.upsert_punch("an", date, PunchField::Start, t("08:00:00"));
    store.upsert_punch("an", date, PunchField::End, t("16:00:00"));
    store.upsert_punch("an", date, PunchField::Start, t("08:30:00"));

    let r = store.find("an", date).expect("record exists");
    assert_eq!(r.start, t("08:30:00"));
    assert_eq!(r.end, t("16:00:00"));
    assert_eq!(r.break_start, None);
}

#[test]
fn test_uniqueness_after_mixed_punches() {
    let mut store = LedgerStore::new();
    let people = ["cha", "ou", "an"];
    let dates = ["2024-01-01", "2024-01-02", "2024-01-01", "2024-01-03"];

    for (i, date) in dates.iter().enumerate() {
        for field in PunchField::ALL {
            let p = people[i % people.len()];
            store.upsert_punch(p, d(date), field, t("10:00:00"));
            store.upsert_punch("cha", d(date), field, t("11:00:00"));
        }
    }

    let keys: HashSet<_> = store.list().iter().map(|r| (r.person_id.clone(), r.date)).collect();
    assert_eq!(keys.len(), store.len());
}

#[test]
fn test_list_is_newest_date_first() {
    let mut store = LedgerStore::new();
    store.upsert_punch("cha", d("2024-01-02"), PunchField::Start, t("09:00:00"));
    store.upsert_punch("cha", d("2024-01-10"), PunchField::Start, t("09:00:00"));
    store.upsert_punch("cha", d("2023-12-31"), PunchField::Start, t("09:00:00"));

    let dates: Vec<String> = store.list().iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, ["2024-01-10", "2024-01-02", "2023-12-31"]);
}

#[test]
fn test_same_date_keeps_sequence_order() {
    // new punches are placed in front, the date sort is stable
    let mut store = LedgerStore::new();
    store.upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"));
    store.upsert_punch("ou", d("2024-01-01"), PunchField::Start, t("09:05:00"));
    store.upsert_punch("cha", d("2024-01-01"), PunchField::End, t("17:00:00"));

    let people: Vec<&str> = store.list().iter().map(|r| r.person_id.as_str()).collect();
    assert_eq!(people, ["ou", "cha"]);
}

#[test]
fn test_edit_buffer_commit_replaces_punches() {
    let mut store = LedgerStore::new();
    let id = store
        .upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"))
        .id();

    let mut buffer = store.begin_edit(id).expect("record exists");
    buffer.set(PunchField::End, t("18:00:00"));
    buffer.set(PunchField::Start, None);

    // staging does not touch the store
    assert_eq!(store.get(id).map(|r| r.end), Some(None));

    assert!(store.commit_edit(buffer));
    let r = store.get(id).expect("record exists");
    assert_eq!(r.id, id);
    assert_eq!(r.start, None);
    assert_eq!(r.end, t("18:00:00"));
}

#[test]
fn test_cancel_edit_leaves_store_untouched() {
    let mut store = LedgerStore::new();
    let id = store
        .upsert_punch("ou", d("2024-01-01"), PunchField::Start, t("09:00:00"))
        .id();
    let before = store.list().to_vec();

    let mut buffer = store.begin_edit(id).expect("record exists");
    buffer.set(PunchField::Start, t("10:00:00"));
    store.cancel_edit(buffer);

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_commit_overwrites_changes_made_after_begin_edit() {
    let mut store = LedgerStore::new();
    let date = d("2024-01-01");
    let id = store.upsert_punch("an", date, PunchField::Start, t("09:00:00")).id();

    let mut buffer = store.begin_edit(id).expect("record exists");
    buffer.set(PunchField::BreakStart, t("12:00:00"));

    // a concurrent punch lands while the buffer is open
    store.upsert_punch("an", date, PunchField::End, t("17:00:00"));

    assert!(store.commit_edit(buffer));
    let r = store.get(id).expect("record exists");
    assert_eq!(r.break_start, t("12:00:00"));
    assert_eq!(r.end, None, "buffer is not rebased");
}

#[test]
fn test_commit_keeps_person_and_date() {
    let mut store = LedgerStore::new();
    let id = store
        .upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"))
        .id();

    let buffer = store.begin_edit(id).expect("record exists");
    assert_eq!(buffer.id(), id);
    assert!(store.commit_edit(buffer));

    let r = store.get(id).expect("record exists");
    assert_eq!(r.person_id, "cha");
    assert_eq!(r.date, d("2024-01-01"));
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut store = LedgerStore::new();
    let id = store
        .upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"))
        .id();

    assert!(store.begin_edit(RecordId(999)).is_none());
    assert!(!store.delete(RecordId(999)));

    let buffer = store.begin_edit(id).expect("record exists");
    assert!(store.delete(id));
    assert!(!store.commit_edit(buffer), "commit after delete is a no-op");
    assert!(store.is_empty());
}

#[test]
fn test_from_records_continues_ids_and_collapses_duplicates() {
    let mut store = LedgerStore::from_records(vec![
        rec(7, "cha", "2024-01-02", ["09:00:00", "00:00:00", "00:00:00", "00:00:00"]),
        rec(3, "ou", "2024-01-01", ["08:00:00", "00:00:00", "00:00:00", "00:00:00"]),
        rec(9, "cha", "2024-01-02", ["10:00:00", "00:00:00", "00:00:00", "00:00:00"]),
    ], 0);

    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].id, RecordId(7));

    let new_id = store
        .upsert_punch("an", d("2024-01-03"), PunchField::Start, t("09:00:00"))
        .id();
    assert!(new_id.0 > 9);
}

#[test]
fn test_insert_if_absent_never_overwrites() {
    let mut store = LedgerStore::new();
    store.upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"));

    let clash = rec(0, "cha", "2024-01-01", ["07:00:00", "15:00:00", "00:00:00", "00:00:00"]);
    assert_eq!(store.insert_if_absent(clash), None);
    assert_eq!(store.find("cha", d("2024-01-01")).map(|r| r.start), Some(t("09:00:00")));

    let fresh = rec(0, "ou", "2024-01-01", ["07:00:00", "15:00:00", "00:00:00", "00:00:00"]);
    let id = store.insert_if_absent(fresh).expect("new key is added");
    assert_ne!(id, RecordId(0));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_deleted_id_is_not_reused_after_reload() {
    let mut store = LedgerStore::new();
    let first = store
        .upsert_punch("cha", d("2024-01-01"), PunchField::Start, t("09:00:00"))
        .id();
    assert!(store.delete(first));

    // reload as from an empty table whose highest id ever was `first`
    let mut reloaded = LedgerStore::from_records(store.list().to_vec(), first.0);
    let next = reloaded
        .upsert_punch("ou", d("2024-01-01"), PunchField::Start, t("08:00:00"))
        .id();

    assert_ne!(next, first);
    assert!(next.0 > first.0);
}
