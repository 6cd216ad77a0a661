use crate::cli::commands::open_app;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut app = open_app(cfg)?;
    app.logout()?;
    info("Logged out.");
    Ok(())
}
