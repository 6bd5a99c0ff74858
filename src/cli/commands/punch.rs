use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily::work_seconds;
use crate::core::ledger::PunchOutcome;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch_field::PunchField;
use crate::models::staff::StaffProfile;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{format_seconds, now_hms};

/// Quick clock for one person and date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        field,
        person,
        date: date_arg,
        at,
    } = cmd
    {
        let person_key = person.as_deref().unwrap_or(cfg.default_person.as_str());
        let staff = StaffProfile::resolve(person_key)?;

        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let at_value = at.clone().unwrap_or_else(now_hms);
        if TimeOfDay::parse_lenient(&at_value).is_none() {
            warning(format!(
                "'{}' is not a usable time: {} will be recorded as unset.",
                at_value,
                field.pf_as_str()
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let (outcome, record) = PunchLogic::apply(&mut pool, staff, d, *field, &at_value)?;

        let verb = match outcome {
            PunchOutcome::Created(_) => "new record",
            PunchOutcome::Updated(_) => "updated",
        };

        success(format!(
            "{} {} for {} on {} (#{}, {}).",
            field.label(),
            record.punch_str(*field),
            staff.display_name,
            d,
            outcome.id(),
            verb
        ));

        println!(
            "   start {} | end {} | break {} → {} | work {}",
            record.punch_str(PunchField::Start),
            record.punch_str(PunchField::End),
            record.punch_str(PunchField::BreakStart),
            record.punch_str(PunchField::BreakEnd),
            format_seconds(work_seconds(&record))
        );
    }

    Ok(())
}
