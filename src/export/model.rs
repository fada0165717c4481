// src/export/model.rs

use crate::core::calculator::week;
use crate::models::clock_event::ClockEvent;
use crate::utils::time;
use serde::Serialize;

/// Flat row for the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub location: String,
    pub week: String,
    pub opened_by: Option<i64>,
}

impl From<&ClockEvent> for EventExport {
    fn from(ev: &ClockEvent) -> Self {
        Self {
            id: ev.id,
            kind: ev.kind.label().to_string(),
            time: ev.time.as_ref().map(time::to_storage).unwrap_or_default(),
            location: ev.location_str().to_string(),
            week: week::week_of(ev).map(|k| k.to_string()).unwrap_or_default(),
            opened_by: ev.opened_by,
        }
    }
}
