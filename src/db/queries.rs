use crate::db::models::{DraftRow, SubmissionRow};
use crate::errors::AppResult;
use crate::models::profile::Profile;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_draft_row(row: &Row) -> rusqlite::Result<DraftRow> {
    Ok(DraftRow {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        month_year: row.get("month_year")?,
        form_data: row.get("form_data")?,
        updated_at: row.get("updated_at")?,
    })
}

fn map_submission_row(row: &Row) -> rusqlite::Result<SubmissionRow> {
    Ok(SubmissionRow {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        month_year: row.get("month_year")?,
        snapshot: row.get("snapshot")?,
        submitted_at: row.get("submitted_at")?,
    })
}

/// Upsert the draft for (user, month). Last write wins; the unique
/// index on (user_id, month_year) guarantees a single draft row.
pub fn upsert_draft(
    conn: &Connection,
    user_id: &str,
    month_year: &str,
    form_data: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO drafts (user_id, month_year, form_data)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id, month_year)
         DO UPDATE SET form_data = excluded.form_data,
                       updated_at = datetime('now')",
        params![user_id, month_year, form_data],
    )?;
    Ok(())
}

pub fn get_draft(
    conn: &Connection,
    user_id: &str,
    month_year: &str,
) -> AppResult<Option<DraftRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, month_year, form_data, updated_at
         FROM drafts
         WHERE user_id = ?1 AND month_year = ?2",
    )?;

    let row = stmt
        .query_row(params![user_id, month_year], map_draft_row)
        .optional()?;

    Ok(row)
}

pub fn list_drafts(conn: &Connection, user_id: &str) -> AppResult<Vec<DraftRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, month_year, form_data, updated_at
         FROM drafts
         WHERE user_id = ?1
         ORDER BY month_year DESC",
    )?;

    let rows = stmt.query_map([user_id], map_draft_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete the draft for (user, month). Returns the number of removed
/// rows (0 or 1); submissions are untouched.
pub fn delete_draft(conn: &Connection, user_id: &str, month_year: &str) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM drafts WHERE user_id = ?1 AND month_year = ?2",
        params![user_id, month_year],
    )?;
    Ok(n)
}

/// Append one submission row. Never updates; every call inserts.
pub fn insert_submission(
    conn: &Connection,
    user_id: &str,
    month_year: &str,
    snapshot: &str,
    submitted_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO submissions (user_id, month_year, snapshot, submitted_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![user_id, month_year, snapshot, submitted_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_submission(conn: &Connection, id: i64) -> AppResult<Option<SubmissionRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, month_year, snapshot, submitted_at
         FROM submissions
         WHERE id = ?1",
    )?;

    let row = stmt.query_row([id], map_submission_row).optional()?;
    Ok(row)
}

pub fn list_submissions(
    conn: &Connection,
    user_id: &str,
    month_year: Option<&str>,
) -> AppResult<Vec<SubmissionRow>> {
    let mut out = Vec::new();

    match month_year {
        Some(month) => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, month_year, snapshot, submitted_at
                 FROM submissions
                 WHERE user_id = ?1 AND month_year = ?2
                 ORDER BY submitted_at DESC, id DESC",
            )?;
            let rows = stmt.query_map(params![user_id, month], map_submission_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, month_year, snapshot, submitted_at
                 FROM submissions
                 WHERE user_id = ?1
                 ORDER BY submitted_at DESC, id DESC",
            )?;
            let rows = stmt.query_map([user_id], map_submission_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn get_profile(conn: &Connection, user_id: &str) -> AppResult<Option<Profile>> {
    let mut stmt = conn.prepare(
        "SELECT vorname, nachname, geburtsdatum, personalnummer, einsatzort, gkz
         FROM profiles
         WHERE user_id = ?1",
    )?;

    let row = stmt
        .query_row([user_id], |row| {
            Ok(Profile {
                vorname: row.get(0)?,
                nachname: row.get(1)?,
                geburtsdatum: row.get(2)?,
                personalnummer: row.get(3)?,
                einsatzort: row.get(4)?,
                gkz: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

pub fn save_profile(conn: &Connection, user_id: &str, profile: &Profile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profiles
             (user_id, vorname, nachname, geburtsdatum, personalnummer, einsatzort, gkz, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now'))
         ON CONFLICT(user_id)
         DO UPDATE SET vorname = excluded.vorname,
                       nachname = excluded.nachname,
                       geburtsdatum = excluded.geburtsdatum,
                       personalnummer = excluded.personalnummer,
                       einsatzort = excluded.einsatzort,
                       gkz = excluded.gkz,
                       updated_at = datetime('now')",
        params![
            user_id,
            profile.vorname,
            profile.nachname,
            profile.geburtsdatum,
            profile.personalnummer,
            profile.einsatzort,
            profile.gkz,
        ],
    )?;
    Ok(())
}
