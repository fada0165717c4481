use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Append events from a JSON array in the portable event shape.
pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let json = fs::read_to_string(path)?;
        Self::import_str(pool, &json, &path.display().to_string())
    }

    /// Parse `json` and append its events in array order.
    /// Returns the number of imported events.
    pub fn import_str(pool: &mut DbPool, json: &str, origin: &str) -> AppResult<usize> {
        let events: Vec<ClockEvent> = serde_json::from_str(json)?;

        let untimed = events.iter().filter(|e| e.time.is_none()).count();
        if untimed > 0 {
            warning(format!(
                "{untimed} event(s) without a valid time: stored, but not counted in any week."
            ));
        }

        let created_at = Local::now().to_rfc3339();
        let imported = pool.with_transaction(|tx| {
            let mut prev: Option<ClockEvent> = None;
            let mut n = 0;
            for mut ev in events {
                ev.source = "import".to_string();
                ev.created_at = created_at.clone();
                // a clock-out right after a clock-in closes it
                if ev.kind.is_out() {
                    ev.opened_by = prev.as_ref().filter(|p| p.kind.is_in()).map(|p| p.id);
                }
                ev.id = insert_event(tx, &ev)?;
                prev = Some(ev);
                n += 1;
            }
            Ok(n)
        })?;

        ttlog_quiet(
            &pool.conn,
            "import",
            origin,
            &format!("{imported} events imported"),
        );

        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::load_events;

    #[test]
    fn imports_in_order_and_links_pairs() {
        let mut pool = DbPool::new(":memory:").unwrap();
        let json = r#"[
            {"location":"Depot","type":"Clock In","time":"2024-06-03T16:00:00.000Z"},
            {"location":"Depot","type":"Clock Out","time":"2024-06-04T00:00:00.000Z"},
            {"type":"Clock Out","time":"oops"}
        ]"#;

        let n = ImportLogic::import_str(&mut pool, json, "test").unwrap();
        assert_eq!(n, 3);

        let events = load_events(&pool.conn).unwrap();
        assert_eq!(events[1].opened_by, Some(events[0].id));
        assert_eq!(events[2].opened_by, None);
        assert!(events[2].time.is_none());
        assert!(events.iter().all(|e| e.source == "import"));
    }

    #[test]
    fn rejects_non_array_json() {
        let mut pool = DbPool::new(":memory:").unwrap();
        assert!(ImportLogic::import_str(&mut pool, r#"{"type":"Clock In"}"#, "test").is_err());
        assert!(load_events(&pool.conn).unwrap().is_empty());
    }
}
