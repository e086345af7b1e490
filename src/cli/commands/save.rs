use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::models::month::MonthData;
use crate::ui::messages::success;
use std::fs;

/// Create or overwrite the draft for a month from a JSON payload file.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Save { month, file } = cmd {
        let raw = fs::read_to_string(file)?;
        let data = MonthData::from_json(&raw)?;

        let mut pool = open_pool(cfg)?;
        RecordLogic::save(&mut pool, &cfg.user, month, &data)?;

        success(format!(
            "Draft saved for {} ({} service entries, {} work shifts).",
            month,
            data.services.len(),
            data.shifts.len()
        ));
    }

    Ok(())
}
