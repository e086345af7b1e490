//! Draft lifecycle operations: save (upsert), load, list, delete.
//!
//! One draft per (user, month); saving again overwrites the previous
//! payload in full (last write wins, no merging of concurrent edits).

use crate::db::log::ttlog;
use crate::db::models::DraftRow;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthData;
use crate::models::record::Draft;
use crate::utils::date::parse_month_year;

pub struct RecordLogic;

impl RecordLogic {
    /// Upsert the draft for (user, month). Atomic: the row is either
    /// fully replaced or left as it was.
    pub fn save(pool: &mut DbPool, user: &str, month: &str, data: &MonthData) -> AppResult<()> {
        let month = validate_month(month)?;
        let payload = data.to_json()?;

        queries::upsert_draft(&pool.conn, user, &month, &payload)?;
        ttlog(&pool.conn, "draft_saved", &month, "Draft saved")?;

        Ok(())
    }

    pub fn load(pool: &mut DbPool, user: &str, month: &str) -> AppResult<Option<Draft>> {
        let month = validate_month(month)?;

        let Some(row) = queries::get_draft(&pool.conn, user, &month)? else {
            return Ok(None);
        };

        Ok(Some(draft_from_row(row)?))
    }

    /// Like `load`, but a missing draft is a hard error. Used by every
    /// operation that needs an existing draft (submit, render, send).
    pub fn require(pool: &mut DbPool, user: &str, month: &str) -> AppResult<Draft> {
        Self::load(pool, user, month)?.ok_or_else(|| AppError::DraftNotFound {
            user: user.to_string(),
            month: month.to_string(),
        })
    }

    pub fn list(pool: &mut DbPool, user: &str) -> AppResult<Vec<DraftRow>> {
        queries::list_drafts(&pool.conn, user)
    }

    /// Delete the draft. Submissions already created for the month are
    /// not affected. Returns false when there was nothing to delete.
    pub fn delete(pool: &mut DbPool, user: &str, month: &str) -> AppResult<bool> {
        let month = validate_month(month)?;
        let removed = queries::delete_draft(&pool.conn, user, &month)? > 0;

        if removed {
            ttlog(&pool.conn, "draft_deleted", &month, "Draft deleted")?;
        }

        Ok(removed)
    }
}

fn validate_month(month: &str) -> AppResult<String> {
    let month = month.trim();
    parse_month_year(month)
        .map(|_| month.to_string())
        .ok_or_else(|| AppError::InvalidMonth(month.to_string()))
}

fn draft_from_row(row: DraftRow) -> AppResult<Draft> {
    let data = MonthData::from_json(&row.form_data)?;
    Ok(Draft {
        user_id: row.user_id,
        month_year: row.month_year,
        data,
        updated_at: row.updated_at,
    })
}
