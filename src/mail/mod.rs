//! Abstract delivery of rendered artifacts.
//!
//! The core never talks SMTP; it hands an attachment plus recipient
//! addresses to a `Delivery` implementation. The built-in
//! `OutboxDelivery` drops the artifact into a local outbox directory
//! where an external transport picks it up.

use chrono::Local;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// One or more recipient addresses, comma-separated in user input.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

pub trait Delivery {
    /// Deliver one attachment to the given recipients.
    fn deliver(&self, recipients: &[String], attachment_name: &str, data: &[u8])
    -> AppResult<()>;
}

/// Filesystem outbox: one file per delivery plus a manifest line.
pub struct OutboxDelivery {
    dir: PathBuf,
}

impl OutboxDelivery {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Delivery for OutboxDelivery {
    fn deliver(
        &self,
        recipients: &[String],
        attachment_name: &str,
        data: &[u8],
    ) -> AppResult<()> {
        if recipients.is_empty() {
            return Err(AppError::Delivery("No recipients given".to_string()));
        }

        fs::create_dir_all(&self.dir)?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let file_name = format!("{stamp}_{attachment_name}");
        fs::write(self.dir.join(&file_name), data)?;

        let manifest_line = format!("{file_name}\t{}\n", recipients.join(", "));
        let manifest = self.dir.join("outbox.log");
        let mut existing = fs::read_to_string(&manifest).unwrap_or_default();
        existing.push_str(&manifest_line);
        fs::write(manifest, existing)?;

        Ok(())
    }
}
