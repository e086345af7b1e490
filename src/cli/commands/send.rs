use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::project::project;
use crate::core::record::RecordLogic;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::ArtifactFormat;
use crate::export::csv::flat_csv_bytes;
use crate::export::pdf::render_sheet;
use crate::mail::{Delivery, OutboxDelivery, parse_recipients};
use crate::ui::messages::success;
use crate::utils::filename::generate_filename;
use crate::utils::path::expand_tilde;

/// Render the month's artifact and hand it to the delivery outbox.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Send { month, to, format } = cmd {
        let recipients = parse_recipients(to.as_deref().unwrap_or(&cfg.recipients));
        if recipients.is_empty() {
            return Err(AppError::Delivery(
                "No recipients: pass --to or configure a default list".to_string(),
            ));
        }

        let mut pool = open_pool(cfg)?;
        let draft = RecordLogic::require(&mut pool, &cfg.user, month)?;

        let bytes = match format {
            ArtifactFormat::Pdf => render_sheet(&project(&draft.data))?,
            ArtifactFormat::Csv => flat_csv_bytes(&draft.data.header)?,
        };

        let attachment = generate_filename(&draft.data.header, format.extension());

        let outbox = OutboxDelivery::new(expand_tilde(&cfg.outbox));
        outbox.deliver(&recipients, &attachment, &bytes)?;

        ttlog(
            &pool.conn,
            "delivered",
            &draft.month_year,
            &format!("{} handed to outbox for {}", attachment, recipients.join(", ")),
        )?;

        success(format!(
            "{} queued for delivery to {}.",
            attachment,
            recipients.join(", ")
        ));
    }

    Ok(())
}
