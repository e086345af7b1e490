//! Draft and submission entities.
//!
//! A Draft is the single editable record of a (user, month); a
//! Submission is an immutable point-in-time copy appended when the
//! draft is sent for review. They are separate owned types so that the
//! submission log cannot be mutated through the draft lifecycle.

use crate::models::month::MonthData;

/// The latest saved, still-editable monthly record.
#[derive(Debug, Clone)]
pub struct Draft {
    pub user_id: String,
    pub month_year: String,
    pub data: MonthData,
    pub updated_at: String,
}

/// One frozen submission row. `snapshot` holds the projected
/// slot→value map as JSON; it is never rewritten after insertion.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: i64,
    pub user_id: String,
    pub month_year: String,
    pub snapshot: String,
    pub submitted_at: String,
}
