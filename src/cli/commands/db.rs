use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{integrity_problem, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// `db --migrate | --info | --check`, in that order when combined.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *show_info) {
        info("Nothing to do: pass --migrate, --check or --info.");
        return Ok(());
    }

    // opening already brings the schema up to date
    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        // steps already run by the open above, plus anything still pending
        let mut steps = std::mem::take(&mut pool.applied_migrations);
        steps.extend(run_pending_migrations(&pool.conn)?);
        for step in &steps {
            success(step);
        }
        success(format!("Schema of {} is up to date.", cfg.database));
    }

    if *show_info {
        print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        match integrity_problem(&pool)? {
            None => success("Integrity check passed."),
            Some(problem) => error(format!("Integrity check failed: {}", problem)),
        }
    }

    Ok(())
}
