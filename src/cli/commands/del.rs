use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete the draft for a month. Submissions already created for that
/// month remain in the log.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Del { month, yes } = cmd {
        let prompt = format!(
            "Delete the draft for {}? Submissions are kept, the draft itself is gone.",
            month
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_pool(cfg)?;

        if RecordLogic::delete(&mut pool, &cfg.user, month)? {
            success(format!("Draft {} deleted.", month));
        } else {
            warning(format!("No draft stored for {}.", month));
        }
    }

    Ok(())
}
