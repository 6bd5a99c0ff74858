//! Audit trail stored in the `log` table.

use crate::errors::AppResult;
use chrono::{DateTime, Local};
use rusqlite::{Connection, params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    pub id: i64,
    /// RFC 3339 for rows written here; migrations use SQLite's `datetime('now')`.
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn append(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

/// Every audit row, oldest first. Timestamps are normalised to second precision.
pub fn read_all(conn: &Connection) -> AppResult<Vec<AuditRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        let raw: String = row.get(1)?;
        Ok(AuditRow {
            id: row.get(0)?,
            date: DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw),
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
