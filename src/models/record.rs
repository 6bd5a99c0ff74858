use super::punch_field::PunchField;
use super::time_of_day::{TimeOfDay, format_punch};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Opaque record identifier, assigned by the ledger and never reused for
/// another record while the original exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One person's punches for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub person_id: String, // ⇔ roster person_id
    pub date: NaiveDate,   // ⇔ "YYYY-MM-DD"
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub break_start: Option<TimeOfDay>,
    pub break_end: Option<TimeOfDay>,
}

impl AttendanceRecord {
    /// New record with every punch unset.
    pub fn new(id: RecordId, person_id: &str, date: NaiveDate) -> Self {
        Self {
            id,
            person_id: person_id.to_string(),
            date,
            start: None,
            end: None,
            break_start: None,
            break_end: None,
        }
    }

    pub fn punch(&self, field: PunchField) -> Option<TimeOfDay> {
        match field {
            PunchField::Start => self.start,
            PunchField::End => self.end,
            PunchField::BreakStart => self.break_start,
            PunchField::BreakEnd => self.break_end,
        }
    }

    pub fn set_punch(&mut self, field: PunchField, value: Option<TimeOfDay>) {
        let slot = match field {
            PunchField::Start => &mut self.start,
            PunchField::End => &mut self.end,
            PunchField::BreakStart => &mut self.break_start,
            PunchField::BreakEnd => &mut self.break_end,
        };
        *slot = value;
    }

    pub fn matches(&self, person_id: &str, date: NaiveDate) -> bool {
        self.person_id == person_id && self.date == date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Punch as boundary text (`00:00:00` when unset).
    pub fn punch_str(&self, field: PunchField) -> String {
        format_punch(self.punch(field))
    }
}
