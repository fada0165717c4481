use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::clock_kind::ClockKind;
use crate::utils::time;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

const SELECT_EVENTS: &str =
    "SELECT id, kind, time, location, opened_by, source, created_at FROM events";

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = ClockKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid kind: {}", kind_str))),
        )
    })?;

    let time_str: Option<String> = row.get("time")?;
    let time = time_str.as_deref().and_then(time::parse_event_time);

    Ok(ClockEvent {
        id: row.get("id")?,
        kind,
        time,
        location: row.get("location")?,
        opened_by: row.get("opened_by")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert an event and return its new id.
pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (kind, time, location, opened_by, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.kind.to_db_str(),
            ev.time.as_ref().map(time::to_storage),
            ev.location,
            ev.opened_by,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All events in append order.
pub fn load_events(conn: &Connection) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<ClockEvent>> {
    let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Most recently appended event, if any.
pub fn last_event(conn: &Connection) -> AppResult<Option<ClockEvent>> {
    let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} ORDER BY id DESC LIMIT 1"))?;
    Ok(stmt.query_row([], map_row).optional()?)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM events WHERE id = ?1", [id])?)
}

pub fn delete_events(conn: &Connection, ids: &[i64]) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached("DELETE FROM events WHERE id = ?1")?;
    let mut deleted = 0;
    for id in ids {
        deleted += stmt.execute([id])?;
    }
    Ok(deleted)
}
