//! Administrator session gate.
//!
//! This only decides which view is visible. The key is a shared secret
//! read from the configuration; it is not an access-control mechanism.

use crate::db::kv::{KvStore, SESSION_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionState;

#[derive(Debug, Clone)]
pub struct SessionGate {
    admin_key: String,
}

impl SessionGate {
    pub fn new(admin_key: &str) -> Self {
        Self {
            admin_key: admin_key.to_string(),
        }
    }

    pub fn state<S: KvStore>(&self, kv: &S) -> SessionState {
        // An unreadable flag counts as logged out.
        let flag = kv.get(SESSION_KEY).ok().flatten();
        SessionState::from_db_str(flag.as_deref())
    }

    pub fn is_authenticated<S: KvStore>(&self, kv: &S) -> bool {
        self.state(kv).is_logged_in()
    }

    /// Check `key` (trimmed) against the admin key and persist the login.
    /// A wrong key leaves the stored flag untouched.
    pub fn login<S: KvStore>(&self, kv: &mut S, key: &str) -> AppResult<()> {
        if !constant_time_eq(key.trim().as_bytes(), self.admin_key.as_bytes()) {
            kv.audit("login", "failed", "Wrong administrator key");
            return Err(AppError::AuthenticationFailure);
        }

        kv.set(SESSION_KEY, SessionState::LOGGED_IN_VALUE)?;
        kv.audit("login", "", "Administrator logged in");
        Ok(())
    }

    /// Clear the persisted flag, whatever its current value.
    pub fn logout<S: KvStore>(&self, kv: &mut S) -> AppResult<()> {
        kv.remove(SESSION_KEY)?;
        kv.audit("logout", "", "Administrator logged out");
        Ok(())
    }
}

/// Byte comparison whose duration does not depend on where the first
/// mismatch is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
