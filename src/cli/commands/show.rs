use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::record::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the stored draft payload for a month.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Show { month } = cmd {
        let mut pool = open_pool(cfg)?;
        let draft = RecordLogic::require(&mut pool, &cfg.user, month)?;

        info(format!(
            "Draft {} (last saved {})",
            draft.month_year, draft.updated_at
        ));
        println!("{}", serde_json::to_string_pretty(&draft.data)?);
    }

    Ok(())
}
