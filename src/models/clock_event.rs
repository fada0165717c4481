use super::clock_kind::ClockKind;
use crate::utils::time;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single clock-in or clock-out record.
///
/// Serializes to the portable event shape
/// `{ "type": "Clock In"|"Clock Out", "time": ISO-8601, "location"?: string }`.
/// Storage-only fields are skipped on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    #[serde(skip)]
    pub id: i64, // ⇔ events.id (0 = not persisted yet)

    #[serde(rename = "type")]
    pub kind: ClockKind, // ⇔ events.kind

    #[serde(
        default,
        serialize_with = "serialize_time",
        deserialize_with = "deserialize_time"
    )]
    pub time: Option<DateTime<Utc>>, // ⇔ events.time (NULL when missing/malformed)

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>, // ⇔ events.location

    #[serde(skip)]
    pub opened_by: Option<i64>, // ⇔ events.opened_by (clock-out → its clock-in)

    #[serde(skip)]
    pub source: String, // ⇔ events.source ('cli' | 'import')

    #[serde(skip)]
    pub created_at: String, // ⇔ events.created_at (ISO8601)
}

impl ClockEvent {
    /// Build an event created from the CLI.
    /// - `id = 0` until the row is inserted
    /// - `source = "cli"`
    /// - `created_at = now()`
    pub fn new(kind: ClockKind, time: DateTime<Utc>, location: Option<String>) -> Self {
        Self {
            id: 0,
            kind,
            time: Some(time),
            location,
            opened_by: None,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn clock_in(time: DateTime<Utc>, location: impl Into<String>) -> Self {
        Self::new(ClockKind::ClockIn, time, Some(location.into()))
    }

    pub fn clock_out(time: DateTime<Utc>, location: Option<String>) -> Self {
        Self::new(ClockKind::ClockOut, time, location)
    }

    pub fn with_opened_by(mut self, id: Option<i64>) -> Self {
        self.opened_by = id;
        self
    }

    pub fn time_str(&self) -> String {
        self.time
            .as_ref()
            .map(time::format_event_time)
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

fn serialize_time<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) => serializer.serialize_str(&time::to_storage(ts)),
        None => serializer.serialize_none(),
    }
}

/// Missing, null, non-string or unparsable times all become `None`.
fn deserialize_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &raw {
        serde_json::Value::String(s) => time::parse_event_time(s),
        _ => None,
    };

    if parsed.is_none() && !raw.is_null() {
        log::debug!("ignoring malformed event time: {raw}");
    }

    Ok(parsed)
}
