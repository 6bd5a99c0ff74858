// src/export/model.rs

use crate::core::calculator::daily::work_seconds;
use crate::models::punch_field::PunchField;
use crate::models::record::AttendanceRecord;
use crate::utils::time::format_seconds;
use serde::Serialize;

/// Flat, text-only view of a record for JSON export.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecordExport {
    pub id: i64,
    pub person_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_start: String,
    pub break_end: String,
    pub work_time: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id.0,
            person_id: r.person_id.clone(),
            date: r.date_str(),
            start_time: r.punch_str(PunchField::Start),
            end_time: r.punch_str(PunchField::End),
            break_start: r.punch_str(PunchField::BreakStart),
            break_end: r.punch_str(PunchField::BreakEnd),
            work_time: format_seconds(work_seconds(r)),
        }
    }
}

pub fn to_json(records: &[AttendanceRecord]) -> serde_json::Result<String> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
    serde_json::to_string_pretty(&rows)
}
