use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::week::WeekKey;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, week, yes } = cmd {
        let key = week.as_deref().map(str::parse::<WeekKey>).transpose()?;

        let prompt = match (id, &key) {
            (Some(id), _) => format!("Delete event #{}? This action is irreversible.", id),
            (None, Some(k)) => format!("Delete ALL events of week {}? This action is irreversible.", k),
            (None, None) => return Ok(()),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(id) = id {
            let ev = DeleteLogic::delete_event(&mut pool, *id)?;
            success(format!(
                "Event #{} ({} at {}) has been deleted.",
                ev.id,
                ev.kind.label(),
                ev.time_str()
            ));
        } else if let Some(k) = key {
            let removed = DeleteLogic::delete_week(&mut pool, &k)?;
            success(format!(
                "{} events of week {} have been deleted.",
                removed.len(),
                k
            ));
        }
    }

    Ok(())
}
