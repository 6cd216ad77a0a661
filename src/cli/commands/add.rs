use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display;
use crate::core::intake::FormInput;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::today_str;

/// Save a new driver trip from the command-line fields.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        destination,
        date,
        time,
    } = cmd
    {
        let mut app = open_app(cfg)?;

        let date = date.clone().unwrap_or_else(today_str);
        *app.form_mut() = FormInput::new(name, destination, &date, time);

        let record = app.save()?;

        success(format!(
            "Saved {} → {} on {} at {}.",
            record.name, record.destination, record.date, record.time
        ));
        print!("{}", display::render(app.records()));
    }

    Ok(())
}
