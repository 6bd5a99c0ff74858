use crate::core::calculator::daily::work_seconds;
use crate::core::load_store;
use crate::core::log::audit;
use crate::db::LedgerBackend;
use crate::errors::AppResult;
use crate::models::punch_field::PunchField;
use crate::models::record::{AttendanceRecord, RecordId};
use crate::models::time_of_day::{TimeOfDay, format_punch};
use crate::utils::time::format_seconds;

/// Business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Stage `changes` on a copy of record `id` and commit it.
    ///
    /// Returns `Ok(None)` when the id does not exist (nothing is saved).
    /// With no changes the buffer is cancelled and the record returned as is.
    pub fn apply<B: LedgerBackend>(
        backend: &mut B,
        id: RecordId,
        changes: &[(PunchField, String)],
    ) -> AppResult<Option<AttendanceRecord>> {
        let mut store = load_store(backend)?;

        let Some(mut buffer) = store.begin_edit(id) else {
            return Ok(None);
        };

        if changes.is_empty() {
            let unchanged = buffer.record().clone();
            store.cancel_edit(buffer);
            return Ok(Some(unchanged));
        }

        for (field, raw) in changes {
            buffer.set(*field, TimeOfDay::parse_lenient(raw));
        }

        let edited = buffer.record().clone();
        if !store.commit_edit(buffer) {
            return Ok(None);
        }

        backend.save_all(store.list())?;

        let summary = changes
            .iter()
            .map(|(f, raw)| {
                format!("{}={}", f.pf_as_str(), format_punch(TimeOfDay::parse_lenient(raw)))
            })
            .collect::<Vec<_>>()
            .join(", ");

        audit(
            backend,
            "edit",
            &format!("#{} {} {}", id, edited.person_id, edited.date_str()),
            &format!("{} (work {})", summary, format_seconds(work_seconds(&edited))),
        );

        Ok(store.get(id).cloned())
    }
}
