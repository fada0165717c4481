use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut pool = DbPool::new(&cfg.database)?;
        let n = ImportLogic::import_file(&mut pool, &path)?;
        success(format!("Imported {} events from {}", n, path.display()));
    }

    Ok(())
}
