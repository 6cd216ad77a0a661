//! Application state: which view is visible and the event handlers that
//! move between them.

use crate::config::Config;
use crate::core::deletion::DeletionFlow;
use crate::core::display;
use crate::core::intake::{FormInput, FormIntake};
use crate::core::notice::StatusBoard;
use crate::core::session::SessionGate;
use crate::core::store::RecordStore;
use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRecord;
use crate::models::session::SessionState;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use std::time::{Duration, Instant};

pub const DELETED_ALL_NOTICE: &str = "All data has been deleted";
pub const DELETE_WARNING: &str = "Delete ALL driver records? This action is irreversible.";
pub const CONFIRM_PROMPT: &str =
    "Delete ALL driver records? This action is irreversible. [confirm / cancel]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Management,
}

pub struct App<S: KvStore> {
    kv: S,
    gate: SessionGate,
    intake: FormIntake,
    store: RecordStore,
    form: FormInput,
    deletion: DeletionFlow,
    status: StatusBoard,
}

impl<S: KvStore> App<S> {
    pub fn new(kv: S, cfg: &Config) -> Self {
        Self::with_settings(
            kv,
            &cfg.admin_key,
            &cfg.display_date_format,
            cfg.notice_ttl(),
        )
    }

    /// Build the app and load the stored records.
    pub fn with_settings(kv: S, admin_key: &str, date_format: &str, notice_ttl: Duration) -> Self {
        let store = RecordStore::load(&kv);
        Self {
            kv,
            gate: SessionGate::new(admin_key),
            intake: FormIntake::new(date_format),
            store,
            form: FormInput::default(),
            deletion: DeletionFlow::Idle,
            status: StatusBoard::new(notice_ttl),
        }
    }

    pub fn view(&self) -> View {
        if self.session().is_logged_in() {
            View::Management
        } else {
            View::Login
        }
    }

    pub fn session(&self) -> SessionState {
        self.gate.state(&self.kv)
    }

    pub fn records(&self) -> &[DriverRecord] {
        self.store.records()
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.form
    }

    pub fn deletion(&self) -> DeletionFlow {
        self.deletion
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusBoard {
        &mut self.status
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    // ---------------------------
    // Events
    // ---------------------------

    pub fn login(&mut self, key: &str) -> AppResult<()> {
        self.status.clear_error();
        let res = self.gate.login(&mut self.kv, key);
        self.report(res)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.status.clear_error();
        self.deletion.dismiss();
        let res = self.gate.logout(&mut self.kv);
        self.report(res)
    }

    /// Save the current form as a new record.
    pub fn save(&mut self) -> AppResult<DriverRecord> {
        self.status.clear_error();
        let res = self.require_login().and_then(|_| {
            self.intake
                .submit(&mut self.form, &mut self.store, &mut self.kv)
        });
        self.report(res)
    }

    pub fn request_delete(&mut self) -> AppResult<()> {
        self.status.clear_error();
        let res = self.require_login().map(|_| self.deletion.request());
        self.report(res)
    }

    /// Clear every record if the prompt is open; shows a notice on success.
    pub fn confirm_delete(&mut self, now: Instant) -> AppResult<bool> {
        self.status.clear_error();
        let res = self
            .require_login()
            .and_then(|_| self.deletion.confirm(&mut self.store, &mut self.kv));

        if let Ok(true) = res {
            self.status.show_message(DELETED_ALL_NOTICE, now);
        }
        self.report(res)
    }

    pub fn cancel_delete(&mut self) {
        self.status.clear_error();
        self.deletion.cancel();
    }

    pub fn dismiss_delete(&mut self) {
        self.deletion.dismiss();
    }

    fn require_login(&self) -> AppResult<()> {
        if self.gate.is_authenticated(&self.kv) {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    /// Route a failure to the inline error slot and pass it on.
    fn report<T>(&mut self, res: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &res {
            self.status.show_error(e.to_string());
        }
        res
    }

    // ---------------------------
    // Rendering
    // ---------------------------

    pub fn render(&mut self, now: Instant) -> String {
        self.status.tick(now);

        let mut out = String::new();
        match self.view() {
            View::Login => {
                out.push_str("=== Administrator login ===\n");
                out.push_str("Enter the administrator key: login <KEY>\n");
                self.push_error(&mut out);
            }
            View::Management => {
                out.push_str("=== Driver trips ===\n");
                if let Some(msg) = self.status.visible_message(now) {
                    out.push_str(&format!("{GREEN}{msg}{RESET}\n"));
                }
                self.push_error(&mut out);
                out.push_str(&display::render(self.store.records()));
                if self.deletion.is_pending() {
                    out.push_str(&format!("{YELLOW}{CONFIRM_PROMPT}{RESET}\n"));
                }
            }
        }
        out
    }

    fn push_error(&self, out: &mut String) {
        if let Some(err) = self.status.error() {
            out.push_str(&format!("{RED}{err}{RESET}\n"));
        }
    }
}
