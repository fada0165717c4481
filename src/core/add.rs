use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use chrono::{DateTime, Utc};

/// Manual backfill of a complete clock-in / clock-out pair.
pub struct AddLogic;

impl AddLogic {
    /// Validate and store both events in one transaction.
    /// Returns `(clock_in_id, clock_out_id)`.
    pub fn apply(
        pool: &mut DbPool,
        location: &str,
        clock_in: DateTime<Utc>,
        clock_out: DateTime<Utc>,
    ) -> AppResult<(i64, i64)> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::MissingLocation);
        }
        if clock_out <= clock_in {
            return Err(AppError::InvalidRange);
        }

        let ids = pool.with_transaction(|tx| {
            let in_id = insert_event(tx, &ClockEvent::clock_in(clock_in, location))?;
            let out = ClockEvent::clock_out(clock_out, Some(location.to_string()))
                .with_opened_by(Some(in_id));
            let out_id = insert_event(tx, &out)?;
            Ok((in_id, out_id))
        })?;

        ttlog_quiet(
            &pool.conn,
            "add",
            location,
            &format!("pair #{} → #{} backfilled", ids.0, ids.1),
        );

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::load_events;
    use crate::models::clock_kind::ClockKind;
    use crate::utils::time::parse_local_datetime;

    fn at(s: &str) -> DateTime<Utc> {
        parse_local_datetime(s).unwrap()
    }

    #[test]
    fn stores_linked_pair() {
        let mut pool = DbPool::new(":memory:").unwrap();
        let (in_id, out_id) =
            AddLogic::apply(&mut pool, "Depot", at("2024-06-03 09:00"), at("2024-06-03 17:00")).unwrap();

        let events = load_events(&pool.conn).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, in_id);
        assert_eq!(events[0].kind, ClockKind::ClockIn);
        assert_eq!(events[1].id, out_id);
        assert_eq!(events[1].opened_by, Some(in_id));
    }

    #[test]
    fn rejects_bad_input() {
        let mut pool = DbPool::new(":memory:").unwrap();
        let t = at("2024-06-03 09:00");

        assert!(matches!(
            AddLogic::apply(&mut pool, "", t, at("2024-06-03 10:00")),
            Err(AppError::MissingLocation)
        ));
        assert!(matches!(
            AddLogic::apply(&mut pool, "Depot", t, t),
            Err(AppError::InvalidRange)
        ));
        assert!(matches!(
            AddLogic::apply(&mut pool, "Depot", t, at("2024-06-03 08:00")),
            Err(AppError::InvalidRange)
        ));
        assert!(load_events(&pool.conn).unwrap().is_empty());
    }
}
