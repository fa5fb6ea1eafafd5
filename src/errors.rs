//! Unified application error type.
//! All modules (sheet, games, leaderboard, schedule, db, cli) return AppError
//! to keep the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Missing required column '{column}' in sheet '{sheet}'")]
    Schema { sheet: String, column: String },

    // ---------------------------
    // Input / parsing errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    // ---------------------------
    // Trigger errors
    // ---------------------------
    #[error("Trigger error: {0}")]
    Trigger(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn schema(sheet: &str, column: &str) -> Self {
        AppError::Schema {
            sheet: sheet.to_string(),
            column: column.to_string(),
        }
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AppError::Validation(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
