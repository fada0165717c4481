use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `events` and `log` tables if they are missing.
///
/// The schema is fixed: there is no version table and no migration step.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            kind        TEXT NOT NULL CHECK(kind IN ('Clock In','Clock Out')),
            time        TEXT,
            location    TEXT,
            opened_by   INTEGER,
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_time ON events(time);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
