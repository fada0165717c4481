use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_event_time, parse_user_time};

/// Backfill a clock-in / clock-out pair.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        location,
        start,
        end,
    } = cmd
    {
        let clock_in = parse_user_time(start)?;
        let clock_out = parse_user_time(end)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let (in_id, out_id) = AddLogic::apply(&mut pool, location, clock_in, clock_out)?;

        success(format!(
            "Added #{} {} → #{} {} ({})",
            in_id,
            format_event_time(&clock_in),
            out_id,
            format_event_time(&clock_out),
            location.trim()
        ));
    }

    Ok(())
}
