pub mod csv;
pub mod fs_utils;
pub mod pdf;

use clap::ValueEnum;

/// Artifact formats the send/export surface can produce.
#[derive(Clone, Debug, ValueEnum)]
pub enum ArtifactFormat {
    Pdf,
    Csv,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Pdf => "pdf",
            ArtifactFormat::Csv => "csv",
        }
    }
}
