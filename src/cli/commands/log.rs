use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the internal audit log table.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = open_pool(cfg)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{date}  {operation:<18} {target:<12} {message}");
        }
    }

    Ok(())
}
