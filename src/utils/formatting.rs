//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, RED, RESET};
use regex::Regex;
use std::sync::LazyLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Score delta with explicit sign, coloured: `+5` green, `-3` red.
pub fn signed_delta(delta: f64) -> String {
    let body = crate::sheet::value::format_number(delta.abs());
    if delta > 0.0 {
        format!("{GREEN}+{body}{RESET}")
    } else if delta < 0.0 {
        format!("{RED}-{body}{RESET}")
    } else {
        body
    }
}

/// Cut `s` to `max` visible chars, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

/// Remove ANSI escape sequences (colors, bold) from `s`.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}
