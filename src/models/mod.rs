pub mod clock_event;
pub mod clock_kind;
pub mod week_summary;
