use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::schedule::{FLIP_HANDLER, schedule_weekly_activation_trigger};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { at, hour } = cmd {
        let tz = cfg.tz()?;
        let now = resolve_now(at.as_deref(), &tz)?;
        let hour = hour.unwrap_or(cfg.trigger_hour);

        let mut pool = DbPool::new(&cfg.database)?;
        let outcome = schedule_weekly_activation_trigger(&mut pool, tz, hour, now)?;

        if outcome.registered {
            success(format!(
                "Trigger '{}' registered: every Friday at {:02}:00.",
                FLIP_HANDLER, hour
            ));
        } else {
            info(format!("Trigger '{}' already registered.", FLIP_HANDLER));
        }

        success(format!(
            "Flip for week {} / {}: {} rows, {} active.",
            outcome.flip.window.monday,
            outcome.flip.window.friday,
            outcome.flip.rows,
            outcome.flip.active
        ));

        ttlog_soft(
            &pool.conn,
            "schedule",
            FLIP_HANDLER,
            &format!(
                "registered={}, {} rows, {} active",
                outcome.registered, outcome.flip.rows, outcome.flip.active
            ),
        );
    }

    Ok(())
}
