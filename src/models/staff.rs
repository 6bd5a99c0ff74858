//! The fixed staff roster. Not user-extensible at runtime.

use crate::errors::{AppError, AppResult};
use crate::utils::colors::{BLUE, GREEN, MAGENTA, paint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffProfile {
    pub person_id: &'static str,
    pub display_name: &'static str,
    /// ANSI colour used when rendering this person in the terminal.
    pub display_style: &'static str,
}

pub static ROSTER: [StaffProfile; 3] = [
    StaffProfile {
        person_id: "cha",
        display_name: "查",
        display_style: BLUE,
    },
    StaffProfile {
        person_id: "ou",
        display_name: "歐",
        display_style: GREEN,
    },
    StaffProfile {
        person_id: "an",
        display_name: "安",
        display_style: MAGENTA,
    },
];

impl StaffProfile {
    /// Look up a roster member by id or display name.
    pub fn find(key: &str) -> Option<&'static StaffProfile> {
        let key = key.trim();
        ROSTER
            .iter()
            .find(|s| s.person_id.eq_ignore_ascii_case(key) || s.display_name == key)
    }

    /// Like `find`, but an unknown person is an error (CLI input).
    pub fn resolve(key: &str) -> AppResult<&'static StaffProfile> {
        Self::find(key).ok_or_else(|| AppError::UnknownPerson(key.to_string()))
    }

    pub fn styled_name(&self) -> String {
        paint(self.display_style, self.display_name)
    }
}
