//! In-memory attendance ledger: the single source of truth for records.
//!
//! The store is an owned value. Callers load it from a backend, apply one or
//! more operations and hand `list()` back to the backend to persist.
//!
//! Invariants:
//! - at most one record per (person_id, date);
//! - ids are assigned here, never change and are never reused;
//! - `list()` is ordered newest date first, ties in relative insertion order.
//!
//! Operations that reference an unknown id do nothing and report it through
//! their return value; they never panic or error.

use crate::models::punch_field::PunchField;
use crate::models::record::{AttendanceRecord, RecordId};
use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct LedgerStore {
    records: Vec<AttendanceRecord>,
    next_id: i64,
}

/// Caller-owned copy of a record being edited.
///
/// Dropping it (or `cancel_edit`) leaves the store untouched; `commit_edit`
/// replaces the stored record wholesale. The buffer is not rebased on
/// changes made to the store after `begin_edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    record: AttendanceRecord,
}

impl EditBuffer {
    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    pub fn set(&mut self, field: PunchField, value: Option<TimeOfDay>) {
        self.record.set_punch(field, value);
    }
}

/// Outcome of a single punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchOutcome {
    Created(RecordId),
    Updated(RecordId),
}

impl PunchOutcome {
    pub fn id(&self) -> RecordId {
        match self {
            PunchOutcome::Created(id) | PunchOutcome::Updated(id) => *id,
        }
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted records, keeping their order.
    ///
    /// `id_high_water` is the largest id ever handed out, deleted records
    /// included, so a removed id is never given to a new record.
    /// Duplicate (person, date) keys are collapsed, the first occurrence wins.
    pub fn from_records(records: Vec<AttendanceRecord>, id_high_water: i64) -> Self {
        let mut store = Self::new();
        store.next_id = id_high_water.saturating_add(1);
        for r in records {
            store.next_id = store.next_id.max(r.id.0 + 1);
            if store.find(&r.person_id, r.date).is_none() {
                store.records.push(r);
            }
        }
        store.next_id = store.next_id.max(1);
        store
    }

    fn alloc_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Quick clock: set one punch on the (person, date) record, creating it
    /// with the other three punches unset when missing.
    ///
    /// Repeating the same call leaves exactly one, identical, record.
    pub fn upsert_punch(
        &mut self,
        person_id: &str,
        date: NaiveDate,
        field: PunchField,
        value: Option<TimeOfDay>,
    ) -> PunchOutcome {
        if let Some(existing) = self.records.iter_mut().find(|r| r.matches(person_id, date)) {
            existing.set_punch(field, value);
            return PunchOutcome::Updated(existing.id);
        }

        let id = self.alloc_id();
        let mut rec = AttendanceRecord::new(id, person_id, date);
        rec.set_punch(field, value);

        self.records.insert(0, rec);
        self.sort();
        PunchOutcome::Created(id)
    }

    pub fn begin_edit(&self, id: RecordId) -> Option<EditBuffer> {
        self.get(id).cloned().map(|record| EditBuffer { record })
    }

    /// Replace the stored record with the buffer's content.
    ///
    /// `person_id` and `date` are kept from the stored record. Returns `false`
    /// (and changes nothing) when the id no longer exists.
    pub fn commit_edit(&mut self, buffer: EditBuffer) -> bool {
        let Some(stored) = self.records.iter_mut().find(|r| r.id == buffer.record.id) else {
            return false;
        };

        let EditBuffer { record } = buffer;
        stored.start = record.start;
        stored.end = record.end;
        stored.break_start = record.break_start;
        stored.break_end = record.break_end;
        true
    }

    pub fn cancel_edit(&self, buffer: EditBuffer) {
        drop(buffer);
    }

    /// Remove a record. Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn list(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find(&self, person_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.matches(person_id, date))
    }

    /// Append a record for a key not yet present, assigning a fresh id.
    ///
    /// Used by import: an existing (person, date) record is never touched.
    /// The caller re-sorts once after a batch with `sort()`.
    pub fn insert_if_absent(&mut self, mut record: AttendanceRecord) -> Option<RecordId> {
        if self.find(&record.person_id, record.date).is_some() {
            return None;
        }
        record.id = self.alloc_id();
        let id = record.id;
        self.records.push(record);
        Some(id)
    }

    /// Newest date first. Stable, so same-date records keep their order.
    pub fn sort(&mut self) {
        self.records.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
