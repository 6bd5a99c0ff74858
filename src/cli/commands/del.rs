use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::RecordId;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes {
            warning(format!("Record #{} will be deleted permanently.", id));
            // an unreadable stdin counts as "no"
            if !confirm("Delete it?").unwrap_or(false) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;

        match DeleteLogic::apply(&mut pool, RecordId(*id))? {
            Some(r) => success(format!(
                "Record #{} ({} {}) has been deleted.",
                id,
                r.person_id,
                r.date_str()
            )),
            None => warning(format!("Record #{} not found: nothing deleted.", id)),
        }
    }

    Ok(())
}
