use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily::work_seconds;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch_field::PunchField;
use crate::models::record::RecordId;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        break_start,
        break_end,
    } = cmd
    {
        let changes: Vec<(PunchField, String)> = [
            (PunchField::Start, start),
            (PunchField::End, end),
            (PunchField::BreakStart, break_start),
            (PunchField::BreakEnd, break_end),
        ]
        .into_iter()
        .filter_map(|(f, v)| v.clone().map(|v| (f, v)))
        .collect();

        let mut pool = DbPool::new(&cfg.database)?;

        match EditLogic::apply(&mut pool, RecordId(*id), &changes)? {
            None => warning(format!("Record #{} not found: nothing changed.", id)),
            Some(r) if changes.is_empty() => {
                info(format!(
                    "Nothing to change for record #{} ({} {}).",
                    id,
                    r.person_id,
                    r.date_str()
                ));
            }
            Some(r) => {
                success(format!(
                    "✏️ Record #{} updated: {} {} → work {}.",
                    id,
                    r.person_id,
                    r.date_str(),
                    format_seconds(work_seconds(&r))
                ));
            }
        }
    }

    Ok(())
}
