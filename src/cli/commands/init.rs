use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config file, database file and schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = match &cli.db {
        Some(db) => Config {
            database: db.clone(),
            ..Config::load()
        },
        None => Config::load(),
    };

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success("Initialization complete.");
    Ok(())
}
