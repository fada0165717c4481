use serde::{Deserialize, Serialize};

/// Direction of a clock event.
///
/// The serialized labels ("Clock In" / "Clock Out") are the ones stored in
/// the JSON event shape and in the `events.kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockKind {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clock Out")]
    ClockOut,
}

impl ClockKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClockKind::ClockIn => "Clock In",
            ClockKind::ClockOut => "Clock Out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Clock In" => Some(ClockKind::ClockIn),
            "Clock Out" => Some(ClockKind::ClockOut),
            _ => None,
        }
    }

    /// The kind the next clock action should record after this one.
    pub fn toggled(&self) -> Self {
        match self {
            ClockKind::ClockIn => ClockKind::ClockOut,
            ClockKind::ClockOut => ClockKind::ClockIn,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ClockKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, ClockKind::ClockOut)
    }
}
