use crate::cli::commands::open_app;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let app = open_app(cfg)?;

    let state = app.session();
    let icon = if state.is_logged_in() { "🔓" } else { "🔒" };
    println!("{} Session : {}", icon, state.as_str());
    println!("🚗 Records : {}", app.records().len());
    println!("🗄️  Database: {}", cfg.database);

    Ok(())
}
