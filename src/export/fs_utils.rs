// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ok when `path` is free or `force` is set; otherwise ask on stdin.
/// Anything but `y`/`yes` cancels with `AppError::Export`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "The file '{}' already exists (use --force to skip this question).",
        path.display()
    ));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info(format!("Overwriting {}", path.display()));
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, existing file not overwritten: {}",
            path.display()
        )))
    }
}
