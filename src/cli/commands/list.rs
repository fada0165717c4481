use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::AppResult;
use crate::models::week_summary::WeekSummary;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_hours, colorize_kind, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { events: show_events } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let events = load_events(&pool.conn)?;

        if events.is_empty() {
            info("No events recorded.");
            return Ok(());
        }

        let summaries = Core::build_weekly_summaries(&events);
        for summary in &summaries {
            print_week(summary, *show_events, &cfg.separator_char);
        }

        let untimed = events.iter().filter(|e| e.time.is_none()).count();
        if untimed > 0 {
            warning(format!("{untimed} event(s) have no valid time and belong to no week."));
        }

        println!(
            "\nWeeks: {} | Total Hours: {}",
            summaries.len(),
            colorize_hours(Core::grand_total(&summaries))
        );
    }
    Ok(())
}

fn print_week(summary: &WeekSummary, show_events: bool, sep: &str) {
    println!();
    header(
        format!(
            "📅 {} ({} – {})",
            summary.key,
            summary.key.start().format("%a %b %d"),
            summary.key.end().format("%a %b %d")
        ),
        sep,
    );
    println!("Total Hours: {}", colorize_hours(summary.total));

    if summary.misaligned {
        warning(
            "Clock events of this week do not alternate In/Out; pairs are matched by position, so the total may be skewed.",
        );
    } else if summary.open_clock_in {
        info("Open clock-in: not counted until clocked out.");
    }

    if show_events {
        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Type", 9),
            Column::new("Location", 10),
            Column::new("Time", 30),
            Column::new("Closes", 6),
        ]);

        for ev in &summary.events {
            table.add_row(vec![
                ev.id.to_string(),
                colorize_kind(ev.kind),
                colorize_optional(ev.location_str()),
                ev.time_str(),
                colorize_optional(&ev.opened_by.map(|id| format!("#{id}")).unwrap_or_default()),
            ]);
        }

        print!("{}", table.render());
    }
}
