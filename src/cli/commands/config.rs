use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                info("No configuration file yet: run `rattendance init` first.");
                return Ok(());
            }
            ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
