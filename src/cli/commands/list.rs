use crate::cli::commands::open_app;
use crate::config::Config;
use crate::core::app::View;
use crate::core::display;
use crate::errors::{AppError, AppResult};

/// Print the management view's record list.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let app = open_app(cfg)?;

    if app.view() == View::Login {
        return Err(AppError::NotAuthenticated);
    }

    println!("🚗 Registered drivers:\n");
    print!("{}", display::render(app.records()));
    Ok(())
}
