// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored event, in append order. Returns the event count.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let events = load_events(&pool.conn)?;
        if events.is_empty() {
            warning("No events to export.");
        }

        match format {
            ExportFormat::Json => export_json(&events, path)?,
            ExportFormat::Csv => export_csv(&events, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} events → {}", events.len(), path.display()),
        );

        Ok(events.len())
    }
}
