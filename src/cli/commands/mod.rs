pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod staff;
pub mod stats;

use crate::errors::AppResult;
use crate::models::staff::StaffProfile;

/// Resolve an optional `--person` argument against the roster.
pub(crate) fn resolve_person(person: Option<&str>) -> AppResult<Option<&'static StaffProfile>> {
    person.map(StaffProfile::resolve).transpose()
}
