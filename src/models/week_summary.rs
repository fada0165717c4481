use crate::core::calculator::hours::Hours;
use crate::core::calculator::week::WeekKey;
use crate::models::clock_event::ClockEvent;

/// Derived view of one week. Rebuilt on every read, never stored.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub key: WeekKey,
    pub events: Vec<ClockEvent>,
    pub total: Hours,
    pub misaligned: bool,    // positional pairs are not all (in, out)
    pub open_clock_in: bool, // trailing clock-in without clock-out
}
