//! Unified application error type.
//! All modules (db, core, cli, export, mail) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Invalid month record payload: {0}")]
    Payload(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month (expected MM/YYYY): {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("No draft found for user '{user}' and month {month}")]
    DraftNotFound { user: String, month: String },

    #[error("No submission found with id {0}")]
    SubmissionNotFound(i64),

    // ---------------------------
    // Export / render errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    /// Error channel for FormRenderer implementations.
    #[error("Form rendering error: {0}")]
    Render(String),

    // ---------------------------
    // Delivery errors
    // ---------------------------
    #[error("Delivery error: {0}")]
    Delivery(String),
}

pub type AppResult<T> = Result<T, AppError>;
