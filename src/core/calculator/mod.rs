pub mod hours;
pub mod week;
