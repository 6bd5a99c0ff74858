//! CSV codec for the ledger.
//!
//! Export: BOM + header + one row per record, `,` separated, never quoted.
//! Import: first line discarded, rows with fewer than 6 columns skipped,
//! existing (person, date) records never overwritten.
//!
//! Fields containing commas or newlines do not survive a round trip; nothing
//! in the ledger produces such values.

use crate::core::calculator::daily::work_seconds;
use crate::core::ledger::LedgerStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch_field::PunchField;
use crate::models::record::{AttendanceRecord, RecordId};
use crate::models::staff::StaffProfile;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::date::parse_date;
use crate::utils::time::format_seconds;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

pub const UTF8_BOM: &str = "\u{FEFF}";

/// Column order is fixed; import relies on the first six.
pub const CSV_HEADERS: [&str; 7] = [
    "person",
    "date",
    "start",
    "end",
    "breakStart",
    "breakEnd",
    "workTime",
];

const MIN_IMPORT_COLUMNS: usize = 6;

/// Serialize records (in the given order) to CSV text.
pub fn to_csv(records: &[AttendanceRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.as_bytes().to_vec());

    wtr.write_record(CSV_HEADERS)?;

    for r in records {
        wtr.write_record([
            r.person_id.clone(),
            r.date_str(),
            r.punch_str(PunchField::Start),
            r.punch_str(PunchField::End),
            r.punch_str(PunchField::BreakStart),
            r.punch_str(PunchField::BreakEnd),
            format_seconds(work_seconds(r)),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    /// Rows whose (person, date) already had a record.
    pub duplicates: usize,
    /// Short rows, unknown people, invalid dates.
    pub skipped: usize,
}

/// Merge CSV text into the ledger, filling gaps only.
pub fn import_csv(store: &mut LedgerStore, text: &str) -> ImportReport {
    let mut report = ImportReport::default();

    // The first line is the header whatever it holds, even when blank; the
    // csv reader would skip a blank line and take the next row as header.
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    for result in rdr.records() {
        let Ok(row) = result else {
            report.skipped += 1;
            continue;
        };

        let Some(record) = parse_row(&row) else {
            report.skipped += 1;
            continue;
        };

        match store.insert_if_absent(record) {
            Some(_) => report.added += 1,
            None => report.duplicates += 1,
        }
    }

    store.sort();
    report
}

/// One CSV row → a record with a placeholder id (the store assigns the real one).
fn parse_row(row: &StringRecord) -> Option<AttendanceRecord> {
    if row.len() < MIN_IMPORT_COLUMNS {
        return None;
    }

    let person = StaffProfile::find(row.get(0)?)?;
    let date = parse_date(row.get(1)?)?;

    let mut rec = AttendanceRecord::new(RecordId(0), person.person_id, date);
    for (idx, field) in PunchField::ALL.into_iter().enumerate() {
        let raw = row.get(idx + 2).unwrap_or_default();
        rec.set_punch(field, TimeOfDay::parse_lenient(raw));
    }
    Some(rec)
}
