use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::db::queries;
use crate::ui::messages::info;
use crate::utils::date::parse_month_year;

/// List the submission log of the current user, newest first.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Submissions { month } = cmd {
        if let Some(m) = month
            && parse_month_year(m).is_none()
        {
            return Err(AppError::InvalidMonth(m.to_string()));
        }

        let pool = open_pool(cfg)?;
        let rows = queries::list_submissions(&pool.conn, &cfg.user, month.as_deref())?;

        if rows.is_empty() {
            info(format!("No submissions found for user '{}'.", cfg.user));
            return Ok(());
        }

        println!("{:<6} {:<10} {:<30}", "ID", "Month", "Submitted at");
        for s in rows {
            println!("{:<6} {:<10} {:<30}", s.id, s.month_year, s.submitted_at);
        }
    }

    Ok(())
}
