//! Persistence collaborator for the ledger.
//!
//! The core only needs a full load at startup and a full save after every
//! mutation, plus a place to append audit log lines.

pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;

pub trait LedgerBackend {
    /// All records, in their persisted display order.
    fn load(&mut self) -> AppResult<Vec<AttendanceRecord>>;

    /// Largest record id ever persisted, including deleted records.
    fn id_high_water(&mut self) -> AppResult<i64>;

    /// Replace the persisted set with `records` (order included).
    fn save_all(&mut self, records: &[AttendanceRecord]) -> AppResult<()>;

    /// Append an audit line.
    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
