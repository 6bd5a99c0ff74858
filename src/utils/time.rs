//! Time utilities: lenient HH:MM:SS parsing and duration formatting.
//!
//! Parsing never fails. Missing, empty or non-numeric components count as
//! zero, so an unset punch (`00:00:00`) and garbage input both contribute a
//! zero duration.

/// Reserved value meaning "this punch has not been recorded yet".
pub const UNSET_TIME: &str = "00:00:00";

/// Seconds since midnight for an `HH:MM:SS` string, zero for anything unusable.
pub fn parse_time_of_day(t: &str) -> i64 {
    let t = t.trim();
    if t.is_empty() || t == UNSET_TIME {
        return 0;
    }

    let mut parts = t.split(':').map(component_or_zero);
    let h = parts.next().unwrap_or(0);
    let m = parts.next().unwrap_or(0);
    let s = parts.next().unwrap_or(0);

    h.saturating_mul(3600)
        .saturating_add(m.saturating_mul(60))
        .saturating_add(s)
}

fn component_or_zero(part: &str) -> i64 {
    part.trim().parse::<i64>().unwrap_or(0)
}

/// Render a duration as zero-padded `HH:MM:SS`.
/// Hours are not capped (`100:00:00` is valid output).
pub fn format_seconds(secs: i64) -> String {
    if secs <= 0 {
        return UNSET_TIME.to_string();
    }

    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Current local wall-clock time, second precision.
pub fn now_hms() -> String {
    chrono::Local::now().time().format("%H:%M:%S").to_string()
}
