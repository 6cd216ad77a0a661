pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod shell;
pub mod status;

use crate::config::Config;
use crate::core::app::App;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and load the application state.
pub fn open_app(cfg: &Config) -> AppResult<App<DbPool>> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    Ok(App::new(pool, cfg))
}
