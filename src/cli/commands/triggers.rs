use super::resolve_now;
use crate::cli::parser::{Commands, TriggersAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::schedule::{FireResult, TriggerRegistry, run_due_triggers};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Triggers { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        TriggersAction::List => {
            let triggers = pool.triggers()?;
            if triggers.is_empty() {
                println!("⏰ No triggers registered.");
                return Ok(());
            }

            let mut table = Table::new(["Handler", "When", "Created", "Last fired"]);
            for t in &triggers {
                table.add_row(vec![
                    t.handler.clone(),
                    format!("{} {:02}:00", t.weekday, t.hour),
                    t.created_at.clone(),
                    colorize_optional(
                        &t.last_fired
                            .map(|lf| lf.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default(),
                    ),
                ]);
            }
            print!("{}", table.render());
        }

        TriggersAction::Run { at } => {
            let tz = cfg.tz()?;
            let now = resolve_now(at.as_deref(), &tz)?;
            let fired = run_due_triggers(&mut pool, tz, now)?;

            if fired.is_empty() {
                info(format!("No triggers due at {}.", now.format("%Y-%m-%d %H:%M")));
                return Ok(());
            }

            for f in &fired {
                match &f.result {
                    FireResult::Flipped(outcome) => {
                        success(format!(
                            "'{}' fired: {} rows, {} active.",
                            f.handler, outcome.rows, outcome.active
                        ));
                        ttlog_soft(
                            &pool.conn,
                            "trigger",
                            &f.handler,
                            &format!("{} rows, {} active", outcome.rows, outcome.active),
                        );
                    }
                    FireResult::UnknownHandler => {
                        warning(format!("'{}' has no handler, skipped.", f.handler));
                    }
                }
            }
        }
    }

    Ok(())
}
