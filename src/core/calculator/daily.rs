//! Net work duration of a single day record.

use crate::models::record::AttendanceRecord;
use crate::models::time_of_day::{TimeOfDay, punch_seconds};

/// `max(0, (end - start) - (break_end - break_start))`, unset punches as zero.
///
/// End-before-start and inverted breaks are not rejected; they take part in
/// the subtraction and the floor absorbs the result.
pub fn work_seconds_of(
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    break_start: Option<TimeOfDay>,
    break_end: Option<TimeOfDay>,
) -> i64 {
    let total = punch_seconds(end) - punch_seconds(start);
    let break_span = punch_seconds(break_end) - punch_seconds(break_start);
    (total - break_span).max(0)
}

pub fn work_seconds(r: &AttendanceRecord) -> i64 {
    work_seconds_of(r.start, r.end, r.break_start, r.break_end)
}
