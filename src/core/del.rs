use crate::core::load_store;
use crate::core::log::audit;
use crate::db::LedgerBackend;
use crate::errors::AppResult;
use crate::models::record::{AttendanceRecord, RecordId};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete record `id`. Unknown ids are a no-op and return `Ok(None)`.
    pub fn apply<B: LedgerBackend>(
        backend: &mut B,
        id: RecordId,
    ) -> AppResult<Option<AttendanceRecord>> {
        let mut store = load_store(backend)?;

        let Some(removed) = store.get(id).cloned() else {
            return Ok(None);
        };

        store.delete(id);
        backend.save_all(store.list())?;

        audit(
            backend,
            "del",
            &format!("#{}", id),
            &format!("Deleted record {} {}", removed.person_id, removed.date_str()),
        );

        Ok(Some(removed))
    }
}
