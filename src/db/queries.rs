use crate::errors::{AppError, AppResult};
use crate::models::punch_field::PunchField;
use crate::models::record::{AttendanceRecord, RecordId};
use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

/// All records in persisted display order.
pub fn load_records(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, person_id, date, start_time, end_time, break_start, break_end
         FROM records
         ORDER BY position ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    // Stored text is always sentinel-encoded; decoding is lenient.
    let punch = |col: &str| -> Result<Option<TimeOfDay>> {
        let raw: String = row.get(col)?;
        Ok(TimeOfDay::parse_lenient(&raw))
    };

    Ok(AttendanceRecord {
        id: RecordId(row.get("id")?),
        person_id: row.get("person_id")?,
        date,
        start: punch("start_time")?,
        end: punch("end_time")?,
        break_start: punch("break_start")?,
        break_end: punch("break_end")?,
    })
}

/// Rewrite the whole `records` table inside one transaction.
///
/// `position` stores the slice index so that `load_records` restores the
/// exact display order.
pub fn replace_all_records(conn: &mut Connection, records: &[AttendanceRecord]) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM records", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO records
                (id, person_id, date, start_time, end_time, break_start, break_end, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        for (pos, r) in records.iter().enumerate() {
            stmt.execute(params![
                r.id.0,
                r.person_id,
                r.date_str(),
                r.punch_str(PunchField::Start),
                r.punch_str(PunchField::End),
                r.punch_str(PunchField::BreakStart),
                r.punch_str(PunchField::BreakEnd),
                pos as i64,
            ])
            .map_err(|e| {
                AppError::Persistence(format!(
                    "failed to save record {} ({} {}): {}",
                    r.id,
                    r.person_id,
                    r.date_str(),
                    e
                ))
            })?;
        }
    } // <-- stmt dropped before commit

    tx.commit()?;
    Ok(())
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
}
