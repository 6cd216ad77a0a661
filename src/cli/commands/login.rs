use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Log in and show the management view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { key } = cmd {
        let mut app = open_app(cfg)?;
        app.login(key)?;

        success("Logged in as administrator.");
        print!("{}", display::render(app.records()));
    }
    Ok(())
}
