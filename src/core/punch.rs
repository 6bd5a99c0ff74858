use crate::core::ledger::PunchOutcome;
use crate::core::load_store;
use crate::core::log::audit;
use crate::db::LedgerBackend;
use crate::errors::{AppError, AppResult};
use crate::models::punch_field::PunchField;
use crate::models::record::AttendanceRecord;
use crate::models::staff::StaffProfile;
use crate::models::time_of_day::{TimeOfDay, format_punch};
use chrono::NaiveDate;

/// Business logic for the `punch` command (quick clock).
pub struct PunchLogic;

impl PunchLogic {
    /// Record `at` into `field` of the (person, date) record and persist.
    ///
    /// `at` goes through the lenient parser: garbage or `00:00:00` clears
    /// the field instead of failing.
    pub fn apply<B: LedgerBackend>(
        backend: &mut B,
        person: &StaffProfile,
        date: NaiveDate,
        field: PunchField,
        at: &str,
    ) -> AppResult<(PunchOutcome, AttendanceRecord)> {
        let mut store = load_store(backend)?;

        let value = TimeOfDay::parse_lenient(at);
        let outcome = store.upsert_punch(person.person_id, date, field, value);

        backend.save_all(store.list())?;

        audit(
            backend,
            "punch",
            &format!("{} {}", person.person_id, date),
            &format!("{} = {}", field.pf_as_str(), format_punch(value)),
        );

        let record = store.get(outcome.id()).cloned().ok_or_else(|| {
            AppError::Persistence(format!("record {} missing after punch", outcome.id()))
        })?;

        Ok((outcome, record))
    }
}
