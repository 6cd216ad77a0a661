use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::app::{DELETE_WARNING, DELETED_ALL_NOTICE};
use crate::core::display;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Outcome of the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Confirm,
    Cancel,
    /// Anything that is neither yes nor no: empty line, EOF, other text.
    Dismiss,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" | "confirm" => Answer::Confirm,
            "n" | "no" | "cancel" => Answer::Cancel,
            _ => Answer::Dismiss,
        }
    }
}

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> Answer {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().lock().read_line(&mut s) {
        Ok(0) | Err(_) => Answer::Dismiss,
        Ok(_) => Answer::parse(&s),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { yes } = cmd {
        let mut app = open_app(cfg)?;
        app.request_delete()?;

        let answer = if *yes {
            Answer::Confirm
        } else {
            ask_confirmation(DELETE_WARNING)
        };

        match answer {
            Answer::Confirm => {
                app.confirm_delete(Instant::now())?;
                success(DELETED_ALL_NOTICE);
            }
            Answer::Cancel => {
                app.cancel_delete();
                info("Operation cancelled.");
            }
            Answer::Dismiss => {
                app.dismiss_delete();
                info("Confirmation dismissed, nothing deleted.");
            }
        }

        print!("{}", display::render(app.records()));
    }

    Ok(())
}
