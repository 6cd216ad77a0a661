//! Interactive loop: each input line is one user action, the current view
//! is re-rendered after every action.

use crate::cli::commands::open_app;
use crate::config::Config;
use crate::core::app::{App, View};
use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, RESET, color_for_optional_field};

use std::io::{self, BufRead, Write};
use std::time::Instant;

const HELP: &str = "\
Actions:
  login <KEY>        log in as administrator
  logout             log out
  name <TEXT>        set the driver name
  dest <TEXT>        set the destination
  date <YYYY-MM-DD>  set the date (defaults to today)
  time <HH:MM>       set the time
  form               show the form fields
  save               save the form as a new driver trip
  list               show the driver list
  delete             delete ALL driver trips (asks for confirmation)
  confirm | cancel   answer the confirmation prompt
  help               this text
  quit               leave the shell
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Destination,
    Date,
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login(String),
    Logout,
    Set(Field, String),
    Form,
    Save,
    List,
    Delete,
    Confirm,
    Cancel,
    Help,
    Quit,
    Unknown(String),
}

impl Action {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.to_string();

        match word.to_lowercase().as_str() {
            "login" => Action::Login(rest),
            "logout" => Action::Logout,
            "name" => Action::Set(Field::Name, rest),
            "dest" | "destination" => Action::Set(Field::Destination, rest),
            "date" => Action::Set(Field::Date, rest),
            "time" => Action::Set(Field::Time, rest),
            "form" => Action::Form,
            "save" => Action::Save,
            "list" | "" => Action::List,
            "delete" | "del" => Action::Delete,
            "confirm" | "y" | "yes" => Action::Confirm,
            "cancel" | "n" | "no" => Action::Cancel,
            "help" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            _ => Action::Unknown(line.to_string()),
        }
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut app = open_app(cfg)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut app, stdin.lock(), &mut stdout)
}

/// Drive `app` from `input` until `quit` or end of input.
pub fn run<S: KvStore, R: BufRead, W: Write>(
    app: &mut App<S>,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    write!(out, "{}", app.render(Instant::now()))?;
    prompt(out)?;

    for line in input.lines() {
        let action = Action::parse(&line?);
        if action == Action::Quit {
            break;
        }

        let now = Instant::now();
        apply(app, action.clone(), now);

        match action {
            Action::Help => write!(out, "{HELP}")?,
            Action::Form => write_form(app, out)?,
            _ => write!(out, "{}", app.render(now))?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    Ok(())
}

/// Apply one action. Failures end up in the app's error slot, so they
/// are not returned here.
pub fn apply<S: KvStore>(app: &mut App<S>, action: Action, now: Instant) {
    // While the prompt is open, anything but confirm/cancel is a click
    // outside of it.
    if app.deletion().is_pending() && !matches!(action, Action::Confirm | Action::Cancel) {
        app.dismiss_delete();
        return;
    }

    let _ = match action {
        Action::Login(key) => app.login(&key),
        Action::Logout => app.logout(),
        Action::Set(field, value) => set_field(app, field, value),
        Action::Save => app.save().map(|_| ()),
        Action::Delete => app.request_delete(),
        Action::Confirm => app.confirm_delete(now).map(|_| ()),
        Action::Cancel => {
            app.cancel_delete();
            Ok(())
        }
        Action::Unknown(text) => {
            app.status_mut()
                .show_error(format!("Unknown action '{}' (type `help`)", text));
            Ok(())
        }
        Action::List | Action::Form | Action::Help | Action::Quit => Ok(()),
    };
}

fn set_field<S: KvStore>(app: &mut App<S>, field: Field, value: String) -> AppResult<()> {
    if app.view() == View::Login {
        let e = AppError::NotAuthenticated;
        app.status_mut().show_error(e.to_string());
        return Err(e);
    }

    let form = app.form_mut();
    match field {
        Field::Name => form.name = value,
        Field::Destination => form.destination = value,
        Field::Date => form.date = value,
        Field::Time => form.time = value,
    }
    Ok(())
}

fn write_form<S: KvStore, W: Write>(app: &App<S>, out: &mut W) -> io::Result<()> {
    let form = app.form();
    for (label, value) in [
        ("name", &form.name),
        ("dest", &form.destination),
        ("date", &form.date),
        ("time", &form.time),
    ] {
        let color = color_for_optional_field(Some(value));
        writeln!(out, "{CYAN}{label:<5}{RESET} {color}{value}{RESET}")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
