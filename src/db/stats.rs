use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::schedule::TriggerRegistry;
use crate::sheet::TableStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SHEETS (data rows = rows after the header)
    //
    let sheets = pool.sheet_names()?;
    println!("{}• Sheets:{}", CYAN, RESET);
    if sheets.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for name in &sheets {
        let rows = pool.read_all(name)?;
        let data_rows = rows.len().saturating_sub(1);
        println!("    {:<14} {}{}{} rows", name, GREEN, data_rows, RESET);
    }

    //
    // 3) TRIGGERS
    //
    let triggers = pool.triggers()?;
    println!(
        "{}• Triggers:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        triggers.len(),
        RESET
    );

    //
    // 4) MIGRATIONS
    //
    let migrations = applied_migrations(&pool.conn)?;
    println!("{}• Migrations applied:{}", CYAN, RESET);
    for m in migrations {
        println!("    {m}");
    }

    println!();
    Ok(())
}
