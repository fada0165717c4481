use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 40;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock" => Colour::Cyan,
        "add" | "import" => Colour::Green,
        "del" | "del_week" => Colour::Red,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max - 3).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One display line per entry, `op (target)` column aligned.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let cells: Vec<(String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op = color_for_operation(&e.operation).paint(e.operation.as_str());
                let op_target = if e.target.is_empty() {
                    op.to_string()
                } else {
                    format!("{op} ({})", truncate(&e.target, MAX_TARGET_WIDTH))
                };
                (date, op_target)
            })
            .collect();

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = cells.iter().map(|(d, _)| d.len()).max().unwrap_or(0);
        let op_w = cells
            .iter()
            .map(|(_, o)| strip_ansi(o).chars().count())
            .max()
            .unwrap_or(0);

        entries
            .iter()
            .zip(cells)
            .map(|(e, (date, op_target))| {
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id, date, op_target, padding, e.message
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
        }
        for line in Self::render(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}
