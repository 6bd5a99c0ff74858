use rattendance::models::time_of_day::{TimeOfDay, format_punch};
use rattendance::utils::time::{UNSET_TIME, format_seconds, parse_time_of_day};

#[test]
fn test_parse_canonical_times() {
    assert_eq!(parse_time_of_day("09:00:00"), 32_400);
    assert_eq!(parse_time_of_day("17:30:15"), 63_015);
    assert_eq!(parse_time_of_day("23:59:59"), 86_399);
}

#[test]
fn test_parse_unset_and_empty_are_zero() {
    assert_eq!(parse_time_of_day(UNSET_TIME), 0);
    assert_eq!(parse_time_of_day(""), 0);
    assert_eq!(parse_time_of_day("   "), 0);
}

#[test]
fn test_parse_is_lenient_per_component() {
    // missing components count as zero
    assert_eq!(parse_time_of_day("9"), 32_400);
    assert_eq!(parse_time_of_day("12:30"), 45_000);
    // unparsable components count as zero, the rest still contributes
    assert_eq!(parse_time_of_day("ab:10:xx"), 600);
    assert_eq!(parse_time_of_day("garbage"), 0);
    assert_eq!(parse_time_of_day(" 08 : 15 : 00 "), 29_700);
    // extra components are ignored
    assert_eq!(parse_time_of_day("01:00:00:99"), 3_600);
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(0), "00:00:00");
    assert_eq!(format_seconds(-42), "00:00:00");
    assert_eq!(format_seconds(3_661), "01:01:01");
    assert_eq!(format_seconds(28_800), "08:00:00");
    assert_eq!(format_seconds(360_000), "100:00:00");
}

#[test]
fn test_canonical_strings_survive_parse_then_format() {
    for s in ["00:00:01", "07:05:09", "09:00:00", "12:34:56", "23:59:59"] {
        assert_eq!(format_seconds(parse_time_of_day(s)), s);
    }
}

#[test]
fn test_time_of_day_unset_policy() {
    assert_eq!(TimeOfDay::parse_lenient("00:00:00"), None);
    assert_eq!(TimeOfDay::parse_lenient("not a time"), None);
    assert_eq!(TimeOfDay::parse_lenient("-01:00:00"), None);

    let t = TimeOfDay::parse_lenient("07:05:09").expect("valid time");
    assert_eq!(t.seconds(), 25_509);
    assert_eq!(t.to_string(), "07:05:09");
}

#[test]
fn test_format_punch_writes_sentinel_for_unset() {
    assert_eq!(format_punch(None), "00:00:00");
    assert_eq!(format_punch(TimeOfDay::parse_lenient("9:5:3")), "09:05:03");
}
