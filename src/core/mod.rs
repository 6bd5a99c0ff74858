pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod ledger;
pub mod log;
pub mod punch;

use crate::db::LedgerBackend;
use crate::errors::AppResult;
use ledger::LedgerStore;

/// Load the persisted ledger into an owned store.
pub fn load_store<B: LedgerBackend>(backend: &mut B) -> AppResult<LedgerStore> {
    let records = backend.load()?;
    let high_water = backend.id_high_water()?;
    Ok(LedgerStore::from_records(records, high_water))
}
