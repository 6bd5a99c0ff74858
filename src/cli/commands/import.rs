use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::load_store;
use crate::core::log::audit;
use crate::db::LedgerBackend;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);

        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = load_store(&mut pool)?;

        let report = ExportLogic::import(&mut store, &path)?;

        if report.added > 0 {
            pool.save_all(store.list())?;
        }

        let summary = format!(
            "{} added, {} already present, {} skipped",
            report.added, report.duplicates, report.skipped
        );

        audit(&mut pool, "import", &path.to_string_lossy(), &summary);

        if report.skipped > 0 {
            warning(format!(
                "{} malformed rows were skipped (fewer than 6 columns, unknown person or bad date).",
                report.skipped
            ));
        }
        success(format!("Import completed: {}.", summary));
    }
    Ok(())
}
