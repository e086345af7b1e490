//! Submission: freeze the current draft into an append-only snapshot.

use chrono::Local;

use crate::core::project::project;
use crate::core::record::RecordLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::record::Submission;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Submit the month's draft for review.
    ///
    /// Requires an existing draft. Master data is fetched fresh from
    /// the profile at this moment and overlaid on the stored header, so
    /// two submissions of the same draft can legitimately differ when
    /// the profile changed in between. Each call appends a new
    /// submission row; earlier submissions and the draft itself are
    /// left untouched.
    pub fn submit(pool: &mut DbPool, user: &str, month: &str) -> AppResult<Submission> {
        let mut draft = RecordLogic::require(pool, user, month)?;

        if let Some(profile) = queries::get_profile(&pool.conn, user)?
            && !profile.is_empty()
        {
            draft.data.header.apply_profile(&profile);
        }

        // The record key is authoritative for the form's month field.
        if draft.data.header.monat_jahr.trim().is_empty() {
            draft.data.header.monat_jahr = draft.month_year.clone();
        }

        let snapshot = project(&draft.data).to_json()?;
        let submitted_at = Local::now().to_rfc3339();

        let id = queries::insert_submission(
            &pool.conn,
            user,
            &draft.month_year,
            &snapshot,
            &submitted_at,
        )?;

        ttlog(
            &pool.conn,
            "submitted",
            &draft.month_year,
            "Submission appended",
        )?;

        Ok(Submission {
            id,
            user_id: user.to_string(),
            month_year: draft.month_year,
            snapshot,
            submitted_at,
        })
    }
}
