//! ANSI color helper utilities for terminal output.
use crate::core::calculator::hours::Hours;
use crate::models::clock_kind::ClockKind;
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Hours color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_hours(value: Hours) -> &'static str {
    if value.is_negative() {
        RED
    } else if value.hundredths() == 0 {
        GREY
    } else {
        GREEN
    }
}

pub fn colorize_hours(value: Hours) -> String {
    format!("{}{}{}", color_for_hours(value), value, RESET)
}

pub fn colorize_kind(kind: ClockKind) -> String {
    let color = if kind.is_in() { GREEN } else { RED };
    format!("{}{}{}", color, kind.label(), RESET)
}

/// Grey placeholder for empty fields.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Strip ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    ANSI.replace_all(s, "").into_owned()
}
