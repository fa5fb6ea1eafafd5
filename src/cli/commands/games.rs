use super::resolve_today;
use crate::cli::parser::{Commands, GamesAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::games::scheduler::is_conventional_week_start;
use crate::games::{ActiveGame, AcceptableStarts, GameRecord, GameScheduler, NewGame};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_flag, colorize_optional};
use crate::utils::date::parse_date;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

const FIELD_MAX: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Games { action } = cmd else {
        return Ok(());
    };

    let tz = cfg.tz()?;
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        GamesAction::Active { date, json } => {
            let today = resolve_today(date.as_deref(), &tz)?;
            let games = GameScheduler::new(&mut pool, tz).active_games_on(today)?;

            if *json {
                println!("{}", to_json(&games)?);
            } else {
                print_window(AcceptableStarts::for_date(today));
                print_active(&games);
            }
        }

        GamesAction::Flip { date } => {
            let today = resolve_today(date.as_deref(), &tz)?;
            let outcome = GameScheduler::new(&mut pool, tz).flip_on(today)?;

            print_window(outcome.window);
            success(format!(
                "IsActive rewritten on {} rows ({} active).",
                outcome.rows, outcome.active
            ));

            ttlog_soft(
                &pool.conn,
                "flip",
                &outcome.window.monday.to_string(),
                &format!("{} rows, {} active", outcome.rows, outcome.active),
            );
        }

        GamesAction::List { json } => {
            let games = GameScheduler::new(&mut pool, tz).list_games()?;

            if *json {
                println!("{}", to_json(&games)?);
            } else {
                print_records(&games);
            }
        }

        GamesAction::Add {
            week_start,
            title,
            prompt,
            instructions,
            placeholder,
            active,
        } => {
            let week_start =
                parse_date(week_start).ok_or_else(|| AppError::InvalidDate(week_start.clone()))?;

            let title = title.trim();
            if title.is_empty() {
                return Err(AppError::validation("game title must not be empty"));
            }

            let game = NewGame {
                week_start,
                title: title.to_string(),
                prompt: prompt.clone(),
                instructions: instructions.clone(),
                input_placeholder: placeholder.clone(),
                is_active: *active,
            };

            warn_unconventional(&game);
            GameScheduler::new(&mut pool, tz).add_game(&game)?;
            success(format!("Game '{}' added for week {}.", game.title, week_start));

            ttlog_soft(&pool.conn, "game_add", &game.title, &week_start.to_string());
        }

        GamesAction::Import { file } => {
            let mut reader = csv::Reader::from_path(file)
                .map_err(|e| AppError::validation(format!("{file}: {e}")))?;

            // 1️⃣ parse everything first: a bad line aborts before any write
            let mut games = Vec::new();
            for (i, rec) in reader.deserialize::<NewGame>().enumerate() {
                let game =
                    rec.map_err(|e| AppError::validation(format!("{file}, record {}: {e}", i + 1)))?;
                if game.title.trim().is_empty() {
                    return Err(AppError::validation(format!(
                        "{file}, record {}: empty Title",
                        i + 1
                    )));
                }
                games.push(game);
            }

            // 2️⃣ append
            let mut scheduler = GameScheduler::new(&mut pool, tz);
            for game in &games {
                warn_unconventional(game);
                scheduler.add_game(game)?;
            }

            success(format!("{} games imported from {}.", games.len(), file));
            ttlog_soft(
                &pool.conn,
                "game_import",
                file,
                &format!("{} games imported", games.len()),
            );
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))
}

fn warn_unconventional(game: &NewGame) {
    if !is_conventional_week_start(game.week_start) {
        warning(format!(
            "WeekStart {} ({}) is neither a Monday nor a Friday: '{}' will never be active.",
            game.week_start,
            game.week_start.format("%A"),
            game.title
        ));
    }
}

fn print_window(window: AcceptableStarts) {
    info(format!(
        "Current week: Monday {} / Friday {}",
        window.monday, window.friday
    ));
}

fn print_active(games: &[ActiveGame]) {
    if games.is_empty() {
        println!("🎲 No active games this week.");
        return;
    }

    let mut table = Table::new(["WeekStart", "Title", "Prompt", "Instructions", "Placeholder"]);
    for g in games {
        table.add_row(vec![
            g.week_start.clone(),
            g.title.clone(),
            colorize_optional(&truncate(&g.prompt, FIELD_MAX)),
            colorize_optional(&truncate(&g.instructions, FIELD_MAX)),
            colorize_optional(&truncate(&g.input_placeholder, FIELD_MAX)),
        ]);
    }

    println!("🎲 Active games:\n");
    print!("{}", table.render());
}

fn print_records(games: &[GameRecord]) {
    if games.is_empty() {
        println!("🎲 The Games sheet has no rows.");
        return;
    }

    let mut table = Table::new(["Row", "WeekStart", "Title", "Prompt", "Active"]);
    for g in games {
        table.add_row(vec![
            g.row.to_string(),
            colorize_optional(&g.week_start),
            g.title.clone(),
            colorize_optional(&truncate(&g.prompt, FIELD_MAX)),
            format!("{}{}{}", color_for_flag(g.is_active), g.is_active.as_str(), RESET),
        ]);
    }

    print!("{}", table.render());
}
