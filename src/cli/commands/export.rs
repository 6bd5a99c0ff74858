use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::load_store;
use crate::core::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let store = load_store(&mut pool)?;

        let path = ExportLogic::output_path(file.as_deref(), &cfg.export_label, *format);
        let count = ExportLogic::export(&store, *format, &path, *force)?;

        audit(
            &mut pool,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} records as {}", count, format.as_str()),
        );
    }
    Ok(())
}
