//! Database row models for drafts and submissions.
//! Thin wrappers around SQLite rows; payloads stay as JSON text here
//! and are decoded by the core layer.

#[derive(Debug, Clone)]
pub struct DraftRow {
    pub id: i64,
    pub user_id: String,
    pub month_year: String,
    pub form_data: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct SubmissionRow {
    pub id: i64,
    pub user_id: String,
    pub month_year: String,
    pub snapshot: String,
    pub submitted_at: String,
}
