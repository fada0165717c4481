// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{EventExport, notify_export_success};
use crate::models::clock_event::ClockEvent;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON array in the portable event shape (what `import` reads back).
pub(crate) fn export_json(events: &[ClockEvent], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(events)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", events.len(), path);
    Ok(())
}

/// CSV, one row per event (header included thanks to serde).
pub(crate) fn export_csv(events: &[ClockEvent], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for ev in events {
        wtr.serialize(EventExport::from(ev))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", events.len(), path);
    Ok(())
}
