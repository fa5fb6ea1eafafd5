use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema steps, applied in order and recorded in `log` once applied.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_sheet_tables",
        "Created sheets and cells tables",
        r#"
        CREATE TABLE IF NOT EXISTS sheets (
            name        TEXT PRIMARY KEY,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cells (
            sheet  TEXT NOT NULL REFERENCES sheets(name),
            row    INTEGER NOT NULL CHECK(row >= 0),
            col    INTEGER NOT NULL CHECK(col >= 0),
            kind   TEXT NOT NULL CHECK(kind IN ('bool','number','text','date')),
            value  TEXT NOT NULL,
            bold   INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (sheet, row, col)
        );

        CREATE INDEX IF NOT EXISTS idx_cells_sheet_col ON cells(sheet, col);
        "#,
    ),
    (
        "20250308_0002_create_triggers_table",
        "Created triggers table",
        r#"
        CREATE TABLE IF NOT EXISTS triggers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            handler     TEXT NOT NULL,
            weekday     TEXT NOT NULL,
            hour        INTEGER NOT NULL CHECK(hour BETWEEN 0 AND 23),
            created_at  TEXT NOT NULL,
            last_fired  TEXT
        );
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_migration(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<bool> {
    // 1) Verifica se già applicata
    if migration_applied(conn, version)? {
        return Ok(false);
    }

    // 2) Esegui la migrazione + marca come applicata, tutto insieme
    let batch = format!(
        "BEGIN;\n{sql}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{version}', '{message}');\nCOMMIT;"
    );
    conn.execute_batch(&batch)?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `DbPool::create` (and therefore by `init`).
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, sql) in MIGRATIONS {
        apply_migration(conn, version, message, sql)?;
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
