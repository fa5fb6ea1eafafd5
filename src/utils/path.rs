//! Path utilities.

use std::path::PathBuf;

/// `~/x` → `$HOME/x`; anything else is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
