pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod profile;
pub mod render;
pub mod save;
pub mod send;
pub mod show;
pub mod submissions;
pub mod submit;

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and make sure the schema is current.
pub(crate) fn open_pool(cfg: &crate::config::Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
