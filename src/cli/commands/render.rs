use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::project::{FilledForm, project};
use crate::core::record::RecordLogic;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf::render_sheet;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Render the filled form sheet as PDF, either from the live draft or
/// from a frozen submission snapshot.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Render {
        month,
        file,
        submission,
        force,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        let form: FilledForm = match submission {
            Some(id) => {
                let row = queries::get_submission(&pool.conn, *id)?
                    .ok_or(AppError::SubmissionNotFound(*id))?;
                FilledForm::from_json(&row.snapshot)?
            }
            None => {
                let draft = RecordLogic::require(&mut pool, &cfg.user, month)?;
                project(&draft.data)
            }
        };

        let path = Path::new(file);
        ensure_writable(path, *force)?;

        let bytes = render_sheet(&form)?;
        fs::write(path, bytes)?;

        success(format!("PDF rendered: {}", path.display()));
    }

    Ok(())
}
