use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        sheet,
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = ExportLogic::export(&mut pool, *sheet, *format, file, *force)?;

        ttlog_soft(
            &pool.conn,
            "export",
            file,
            &format!("{} rows of '{}' exported", rows, sheet.sheet_name()),
        );
    }
    Ok(())
}
