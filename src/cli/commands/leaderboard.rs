use crate::cli::parser::{Commands, LeaderboardAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, parse_delta};
use crate::sheet::CellValue;
use crate::utils::colors::{RESET, color_for_score};
use crate::utils::formatting::signed_delta;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Leaderboard { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        LeaderboardAction::Show { json } => {
            let board = Leaderboard::new(&mut pool).get_leaderboard()?;
            print_board(&board, *json)?;
        }

        LeaderboardAction::Record { name, delta, json } => {
            // il delta arriva come testo: la validazione è nel ledger
            let raw = CellValue::text(delta.trim());
            let board = Leaderboard::new(&mut pool).record_score(name, raw.clone())?;

            if !*json {
                let value = parse_delta(&raw)?;
                println!("🏆 {} {}", name.trim(), signed_delta(value));
            }
            print_board(&board, *json)?;

            ttlog_soft(&pool.conn, "record", name.trim(), &format!("delta {}", delta.trim()));
        }
    }

    Ok(())
}

fn print_board(board: &[LeaderboardEntry], json: bool) -> AppResult<()> {
    if json {
        let out =
            serde_json::to_string_pretty(board).map_err(|e| AppError::Other(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if board.is_empty() {
        println!("🏆 Leaderboard is empty.");
        return Ok(());
    }

    let mut table = Table::new(["Name", "Score"]);
    for e in board {
        table.add_row(vec![
            e.name.clone(),
            format!("{}{}{}", color_for_score(e.score), e.score_display(), RESET),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
