//! Raw ANSI escapes, used where a colour is stored as data (roster styles)
//! or embedded in table cells. Messages use `ansi_term` instead.

use crate::utils::time::UNSET_TIME;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub fn paint(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

fn is_unset(value: &str) -> bool {
    value.trim() == UNSET_TIME
}

/// Grey for unset punches and zero durations, plain otherwise.
pub fn colorize_punch(value: &str) -> String {
    if is_unset(value) {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}

/// Clock-in green, clock-out red, unset grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    match (is_unset(value), is_in) {
        (true, _) => paint(GREY, value),
        (false, true) => paint(GREEN, value),
        (false, false) => paint(RED, value),
    }
}
