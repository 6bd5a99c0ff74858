//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::LedgerBackend;
use crate::db::migrate::{record_id_high_water, run_pending_migrations};
use crate::db::queries::{load_records, replace_all_records};
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    /// Schema steps performed while opening, for commands that report them.
    pub applied_migrations: Vec<String>,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        let applied_migrations = run_pending_migrations(&conn)?;
        Ok(Self {
            conn,
            applied_migrations,
        })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}

impl LedgerBackend for DbPool {
    fn load(&mut self) -> AppResult<Vec<AttendanceRecord>> {
        load_records(&self.conn)
    }

    fn id_high_water(&mut self) -> AppResult<i64> {
        Ok(record_id_high_water(&self.conn)?)
    }

    fn save_all(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        self.with_conn(|conn| replace_all_records(conn, records))
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        crate::db::log::append(&self.conn, operation, target, message)
    }
}
