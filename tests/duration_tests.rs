mod common;
use common::{rec, t};
use rattendance::core::calculator::daily::{work_seconds, work_seconds_of};
use rattendance::utils::time::format_seconds;

#[test]
fn test_standard_day_with_lunch_break() {
    let r = rec(1, "cha", "2024-01-01", ["09:00:00", "18:00:00", "12:00:00", "13:00:00"]);
    assert_eq!(work_seconds(&r), 28_800);
    assert_eq!(format_seconds(work_seconds(&r)), "08:00:00");
}

#[test]
fn test_well_ordered_inputs_subtract_exactly() {
    let cases = [
        ("08:00:00", "16:00:00", "12:00:00", "12:30:00"),
        ("09:15:30", "17:45:10", "09:15:30", "09:15:30"),
        ("06:00:00", "06:00:00", "06:00:00", "06:00:00"),
        ("10:00:00", "22:00:00", "10:00:00", "22:00:00"),
        ("07:30:00", "19:00:00", "13:00:00", "14:15:45"),
    ];

    for (s, e, bs, be) in cases {
        let secs = |x: &str| t(x).map(|v| v.seconds()).unwrap_or(0);
        let expected = (secs(e) - secs(s)) - (secs(be) - secs(bs));
        assert_eq!(work_seconds_of(t(s), t(e), t(bs), t(be)), expected, "{s}-{e} / {bs}-{be}");
    }
}

#[test]
fn test_unset_fields_count_as_zero() {
    let r = rec(1, "cha", "2024-01-01", ["09:00:00", "17:30:00", "00:00:00", "00:00:00"]);
    assert_eq!(work_seconds(&r), 30_600);

    let empty = rec(2, "ou", "2024-01-01", ["00:00:00"; 4]);
    assert_eq!(work_seconds(&empty), 0);
}

#[test]
fn test_only_start_punched_clamps_to_zero() {
    // end unset: 0 - start is negative
    let r = rec(1, "cha", "2024-01-01", ["09:00:00", "00:00:00", "00:00:00", "00:00:00"]);
    assert_eq!(work_seconds(&r), 0);
}

#[test]
fn test_end_before_start_clamps_to_zero() {
    let r = rec(1, "cha", "2024-01-01", ["18:00:00", "09:00:00", "00:00:00", "00:00:00"]);
    assert_eq!(work_seconds(&r), 0);
}

#[test]
fn test_inverted_break_adds_time() {
    // break_end before break_start gives a negative span, which is subtracted
    let r = rec(1, "cha", "2024-01-01", ["09:00:00", "17:00:00", "13:00:00", "12:00:00"]);
    assert_eq!(work_seconds(&r), 9 * 3600);
}

#[test]
fn test_break_started_but_not_ended_clamps() {
    // break_end unset: span = -break_start, so work = total + break_start
    let r = rec(1, "cha", "2024-01-01", ["09:00:00", "17:00:00", "12:00:00", "00:00:00"]);
    assert_eq!(work_seconds(&r), 8 * 3600 + 12 * 3600);
}
