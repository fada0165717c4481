use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, last_event};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::clock_kind::ClockKind;
use crate::ui::messages::warning;
use chrono::{DateTime, Utc};

/// Immediate clock action: records a clock-in or a clock-out, whichever
/// comes next after the last stored event.
pub struct ClockLogic;

impl ClockLogic {
    /// Kind the next clock action will record.
    pub fn next_kind(last: Option<&ClockEvent>) -> ClockKind {
        last.map_or(ClockKind::ClockIn, |ev| ev.kind.toggled())
    }

    /// Store the next event at `at` and return it with its id.
    ///
    /// - clock-in: needs a non-blank location (`location`, else `default_location`)
    /// - clock-out: inherits the location of the clock-in it closes and
    ///   records that clock-in's id in `opened_by`
    pub fn apply(
        pool: &mut DbPool,
        location: Option<&str>,
        default_location: Option<&str>,
        at: DateTime<Utc>,
    ) -> AppResult<ClockEvent> {
        let last = last_event(&pool.conn)?;

        let mut ev = match Self::next_kind(last.as_ref()) {
            ClockKind::ClockIn => {
                let loc = location
                    .or(default_location)
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .ok_or(AppError::MissingLocation)?;
                ClockEvent::clock_in(at, loc)
            }
            ClockKind::ClockOut => {
                if location.is_some() {
                    warning("Location is taken from the open clock-in; --loc ignored.");
                }
                let open = last.as_ref();
                ClockEvent::clock_out(at, open.and_then(|e| e.location.clone()))
                    .with_opened_by(open.map(|e| e.id))
            }
        };

        ev.id = insert_event(&pool.conn, &ev)?;
        log::debug!("clock: stored {} #{}", ev.kind.label(), ev.id);

        ttlog_quiet(
            &pool.conn,
            "clock",
            ev.kind.label(),
            &format!("#{} at {} ({})", ev.id, ev.time_str(), ev.location_str()),
        );

        Ok(ev)
    }
}
