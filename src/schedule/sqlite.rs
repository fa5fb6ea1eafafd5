use super::{Trigger, TriggerRegistry, parse_weekday};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::sheet::value::DATETIME_FORMAT;
use chrono::NaiveDateTime;
use rusqlite::params;

fn weekday_to_db(w: chrono::Weekday) -> String {
    w.to_string() // "Fri"
}

impl TriggerRegistry for DbPool {
    fn triggers(&self) -> AppResult<Vec<Trigger>> {
        let mut stmt = self.conn.prepare(
            "SELECT handler, weekday, hour, created_at, last_fired
             FROM triggers
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (handler, weekday, hour, created_at, last_fired) = r?;
            out.push(Trigger {
                handler,
                weekday: parse_weekday(&weekday)?,
                hour,
                created_at,
                last_fired: last_fired
                    .and_then(|s| NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).ok()),
            });
        }
        Ok(out)
    }

    fn register(&mut self, trigger: &Trigger) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO triggers (handler, weekday, hour, created_at, last_fired)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                trigger.handler,
                weekday_to_db(trigger.weekday),
                trigger.hour,
                trigger.created_at,
                trigger
                    .last_fired
                    .map(|dt| dt.format(DATETIME_FORMAT).to_string()),
            ],
        )?;
        Ok(())
    }

    fn mark_fired(&mut self, handler: &str, at: NaiveDateTime) -> AppResult<()> {
        let updated = self.conn.execute(
            "UPDATE triggers SET last_fired = ?1 WHERE handler = ?2",
            params![at.format(DATETIME_FORMAT).to_string(), handler],
        )?;

        if updated == 0 {
            return Err(AppError::Trigger(format!(
                "No trigger registered for '{handler}'"
            )));
        }
        Ok(())
    }
}
