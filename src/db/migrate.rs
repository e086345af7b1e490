//! Schema migrations. All tables are created here, idempotently; every
//! applied migration is recorded in the `log` table so it runs once.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists; it doubles as the migration
/// ledger, so it must come first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Drafts: one mutable row per (user, month), enforced by the unique
/// index; saves are upserts against exactly that key.
fn create_drafts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS drafts (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    TEXT NOT NULL,
            month_year TEXT NOT NULL,
            form_data  TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, month_year)
        );
        "#,
    )?;
    Ok(())
}

/// Submissions: append-only, no unique key on (user, month) on purpose —
/// re-submitting a month adds a second row.
fn create_submissions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS submissions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            month_year   TEXT NOT NULL,
            snapshot     TEXT NOT NULL,
            submitted_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_submissions_user_month
            ON submissions(user_id, month_year);
        "#,
    )?;
    Ok(())
}

fn create_profiles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id        TEXT PRIMARY KEY,
            vorname        TEXT NOT NULL DEFAULT '',
            nachname       TEXT NOT NULL DEFAULT '',
            geburtsdatum   TEXT NOT NULL DEFAULT '',
            personalnummer TEXT NOT NULL DEFAULT '',
            einsatzort     TEXT NOT NULL DEFAULT '',
            gkz            TEXT NOT NULL DEFAULT '',
            updated_at     TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let version = "20250601_0001_base_schema";
    let fresh = !table_exists(conn, "drafts")?;

    create_drafts_table(conn)?;
    create_submissions_table(conn)?;
    create_profiles_table(conn)?;

    if fresh && !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created drafts, submissions, profiles tables")?;
        success("Created time record tables (base schema).");
    }

    Ok(())
}
