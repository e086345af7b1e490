use crate::cli::commands::open_pool;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// List all drafts of the current user.
pub fn handle(cfg: &crate::config::Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let drafts = RecordLogic::list(&mut pool, &cfg.user)?;

    if drafts.is_empty() {
        info(format!("No drafts stored for user '{}'.", cfg.user));
        return Ok(());
    }

    println!("{:<10} {:<22}", "Month", "Last saved");
    for d in drafts {
        println!("{:<10} {:<22}", d.month_year, d.updated_at);
    }

    Ok(())
}
