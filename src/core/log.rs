use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, truncate};
use crate::utils::table::Table;
use ansi_term::Colour;

const TARGET_MAX: usize = 48;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "record" => Colour::Green,
        "flip" => Colour::Yellow,
        "schedule" | "trigger" => Colour::Cyan,
        "game_add" | "game_import" => Colour::Blue,
        "backup" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let mut table = Table::new(["#", "Date", "Operation", "Target", "Message"]);
        for e in &entries {
            // solo l'operazione è colorata
            let op = color_for_operation(&e.operation).paint(e.operation.as_str());
            table.add_row(vec![
                e.id.to_string(),
                e.date.clone(),
                op.to_string(),
                truncate(&strip_ansi(&e.target), TARGET_MAX),
                e.message.clone(),
            ]);
        }
        print!("{}", table.render());

        Ok(())
    }
}
