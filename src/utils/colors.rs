/// ANSI color helper utilities for terminal output.
use crate::games::ActiveFlag;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Active → green, inactive → grey, unrecognized → yellow.
pub fn color_for_flag(flag: ActiveFlag) -> &'static str {
    match flag {
        ActiveFlag::Active => GREEN,
        ActiveFlag::Inactive => GREY,
        ActiveFlag::Unrecognized => YELLOW,
    }
}

/// Score color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_score(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey placeholder for empty display fields.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
