use crate::utils::time::{UNSET_TIME, format_seconds, parse_time_of_day};
use std::fmt;

/// A recorded wall-clock punch, stored as seconds since midnight.
///
/// Only strictly positive values are representable: anything that parses to
/// zero (including the `00:00:00` sentinel) is "not punched" and lives as
/// `None` in an `Option<TimeOfDay>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Lenient parse: never fails, zero and below means unset.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let secs = parse_time_of_day(s);
        Self::from_seconds(secs)
    }

    pub fn from_seconds(secs: i64) -> Option<Self> {
        if secs <= 0 {
            return None;
        }
        u32::try_from(secs).ok().map(TimeOfDay)
    }

    pub fn seconds(&self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_seconds(self.seconds()))
    }
}

/// Seconds contributed by an optional punch (unset counts as zero).
pub fn punch_seconds(t: Option<TimeOfDay>) -> i64 {
    t.map(|v| v.seconds()).unwrap_or(0)
}

/// Text form used at every boundary: unset punches become the sentinel.
pub fn format_punch(t: Option<TimeOfDay>) -> String {
    match t {
        Some(v) => v.to_string(),
        None => UNSET_TIME.to_string(),
    }
}
