use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::submit::SubmitLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Freeze the month's draft into an immutable submission row.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Submit { month } = cmd {
        let mut pool = open_pool(cfg)?;
        let submission = SubmitLogic::submit(&mut pool, &cfg.user, month)?;

        success(format!(
            "Submission #{} created for {} at {}.",
            submission.id, submission.month_year, submission.submitted_at
        ));
    }

    Ok(())
}
