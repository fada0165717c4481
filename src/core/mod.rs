pub mod add;
pub mod calculator;
pub mod clock;
pub mod del;
pub mod import;
pub mod log;
pub mod logic;
