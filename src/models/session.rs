/// Administrator session state. There is no expiry: a login lasts until
/// an explicit logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Value stored under `adminLoggedIn` for a logged-in session.
    pub const LOGGED_IN_VALUE: &'static str = "true";

    /// Convert the persisted flag → enum. Absent or anything other than
    /// `"true"` means logged out.
    pub fn from_db_str(s: Option<&str>) -> Self {
        match s {
            Some(Self::LOGGED_IN_VALUE) => SessionState::LoggedIn,
            _ => SessionState::LoggedOut,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::LoggedOut => "logged out",
            SessionState::LoggedIn => "logged in",
        }
    }
}
