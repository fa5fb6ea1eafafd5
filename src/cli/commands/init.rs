use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::games::{GAMES_COLUMNS, GAMES_SHEET};
use crate::leaderboard::{LEADERBOARD_COLUMNS, LEADERBOARD_SHEET};
use crate::sheet::ensure_schema;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - the `Games` and `Leaderboard` sheets with their bold header
pub fn handle(cli: &Cli) -> AppResult<()> {
    // 1️⃣ config + file del DB
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rScoreboard…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // 2️⃣ apertura DB + migrazioni
    let mut pool = DbPool::create(&db_path)?;

    // 3️⃣ fogli con intestazione
    for (sheet, columns) in [
        (GAMES_SHEET, &GAMES_COLUMNS[..]),
        (LEADERBOARD_SHEET, &LEADERBOARD_COLUMNS[..]),
    ] {
        if ensure_schema(&mut pool, sheet, columns)? {
            println!("🧾 Sheet '{}' header written", sheet);
        }
    }

    println!("✅ Database initialized at {}", &db_path);

    // 4️⃣ log interno (non bloccante)
    ttlog_soft(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rScoreboard initialization completed!");
    Ok(())
}
