use crate::core::calculator::week::{self, WeekKey};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, delete_events, load_event, load_events};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one event by its stable id and return it.
    pub fn delete_event(pool: &mut DbPool, id: i64) -> AppResult<ClockEvent> {
        let ev = load_event(&pool.conn, id)?.ok_or(AppError::EventNotFound(id))?;
        delete_event(&pool.conn, id)?;

        ttlog_quiet(
            &pool.conn,
            "del",
            &format!("#{id}"),
            &format!("{} at {}", ev.kind.label(), ev.time_str()),
        );

        Ok(ev)
    }

    /// Delete every event of the week `key` and return the removed events.
    /// Events without a timestamp never belong to a week and are kept.
    pub fn delete_week(pool: &mut DbPool, key: &WeekKey) -> AppResult<Vec<ClockEvent>> {
        let removed = pool.with_transaction(|tx| {
            let (removed, remaining) = week::partition_week(load_events(tx)?, key);
            if removed.is_empty() {
                return Err(AppError::NoEventsForWeek(key.to_string()));
            }

            let ids: Vec<i64> = removed.iter().map(|ev| ev.id).collect();
            delete_events(tx, &ids)?;
            log::debug!("week {key}: {} removed, {} kept", ids.len(), remaining.len());

            Ok(removed)
        })?;

        ttlog_quiet(
            &pool.conn,
            "del_week",
            &key.to_string(),
            &format!("{} events deleted", removed.len()),
        );

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::add::AddLogic;
    use crate::utils::time::parse_local_datetime;
    use chrono::{DateTime, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        parse_local_datetime(s).unwrap()
    }

    fn seeded() -> DbPool {
        let mut pool = DbPool::new(":memory:").unwrap();
        AddLogic::apply(&mut pool, "Depot", at("2024-06-03 09:00"), at("2024-06-03 17:00")).unwrap();
        AddLogic::apply(&mut pool, "Depot", at("2024-06-09 09:00"), at("2024-06-09 12:00")).unwrap();
        AddLogic::apply(&mut pool, "Yard", at("2024-06-10 09:00"), at("2024-06-10 17:00")).unwrap();
        pool
    }

    #[test]
    fn delete_week_removes_only_that_week() {
        let mut pool = seeded();
        let key: WeekKey = "2024-06-05".parse().unwrap();

        let removed = DeleteLogic::delete_week(&mut pool, &key).unwrap();
        assert_eq!(removed.len(), 4);

        let left = load_events(&pool.conn).unwrap();
        assert_eq!(left.len(), 2);
        assert!(left.iter().all(|e| e.location.as_deref() == Some("Yard")));
    }

    #[test]
    fn delete_empty_week_is_an_error_and_changes_nothing() {
        let mut pool = seeded();
        let key: WeekKey = "2023-01-02".parse().unwrap();

        assert!(matches!(
            DeleteLogic::delete_week(&mut pool, &key),
            Err(AppError::NoEventsForWeek(_))
        ));
        assert_eq!(load_events(&pool.conn).unwrap().len(), 6);
    }

    #[test]
    fn delete_by_id() {
        let mut pool = seeded();
        let ids: Vec<i64> = load_events(&pool.conn).unwrap().iter().map(|e| e.id).collect();

        let gone = DeleteLogic::delete_event(&mut pool, ids[1]).unwrap();
        assert_eq!(gone.id, ids[1]);

        assert!(matches!(
            DeleteLogic::delete_event(&mut pool, ids[1]),
            Err(AppError::EventNotFound(_))
        ));

        // other ids still address the same rows
        let again = DeleteLogic::delete_event(&mut pool, ids[2]).unwrap();
        assert_eq!(again.location.as_deref(), Some("Depot"));
    }
}
