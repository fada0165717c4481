use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{self, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { location, at } = cmd {
        let at = parse_optional_time(at.as_ref())?.unwrap_or_else(time::now);

        let mut pool = DbPool::new(&cfg.database)?;
        let ev = ClockLogic::apply(
            &mut pool,
            location.as_deref(),
            cfg.default_location.as_deref(),
            at,
        )?;

        success(format!(
            "{} #{} at {} ({})",
            ev.kind.label(),
            ev.id,
            ev.time_str(),
            ev.location_str()
        ));
    }

    Ok(())
}
