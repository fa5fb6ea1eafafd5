//! SQLite connection pool wrapper (lightweight for CLI usage).

use crate::db::migrate::{run_pending_migrations, table_exists};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing, initialized database.
    ///
    /// A missing file or a database without the sheet tables is reported as
    /// `StorageUnavailable`: there is no store to work against until `init` ran.
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            return Err(AppError::StorageUnavailable(format!(
                "database not found at {} (run `rscoreboard init` first)",
                p.display()
            )));
        }

        let conn = Connection::open(p)
            .map_err(|e| AppError::StorageUnavailable(format!("{}: {}", p.display(), e)))?;

        if !table_exists(&conn, "cells")? {
            return Err(AppError::StorageUnavailable(format!(
                "database at {} is not initialized (run `rscoreboard init` first)",
                p.display()
            )));
        }

        Ok(Self { conn })
    }

    /// Open (creating the file if needed) and bring the schema up to date.
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Private in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
