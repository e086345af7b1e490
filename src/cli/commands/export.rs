use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::export::csv::write_flat_csv;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use std::path::Path;

/// Export the month's header fields as a flat CSV file.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Export { month, file, force } = cmd {
        let mut pool = open_pool(cfg)?;
        let draft = RecordLogic::require(&mut pool, &cfg.user, month)?;

        let path = Path::new(file);
        ensure_writable(path, *force)?;

        write_flat_csv(path, &draft.data.header)?;

        success(format!("CSV export completed: {}", path.display()));
    }

    Ok(())
}
