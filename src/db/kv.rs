//! String key-value storage.
//!
//! `KvStore` is the only persistence seam used by the core: the SQLite
//! backed `DbPool` for the real program and `MemoryKv` for tests.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

/// Key holding the JSON array of driver records.
pub const DRIVERS_KEY: &str = "drivers";

/// Key holding the administrator session flag.
pub const SESSION_KEY: &str = "adminLoggedIn";

pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Record an audit line. Storage without an audit trail ignores it.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

impl KvStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        // Not blocking: the operation already happened.
        if let Err(e) = ttlog(&self.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

/// In-memory storage. Writes can be switched to fail to exercise the
/// persistence error path.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    values: HashMap<String, String>,
    audit_lines: std::cell::RefCell<Vec<String>>,
    pub fail_writes: bool,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit lines as `operation (target) => message`.
    pub fn audit_lines(&self) -> Vec<String> {
        self.audit_lines.borrow().clone()
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Persistence("storage quota exceeded".into()));
        }
        Ok(())
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.check_writable()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.check_writable()?;
        self.values.remove(key);
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        let line = if target.is_empty() {
            format!("{operation} => {message}")
        } else {
            format!("{operation} ({target}) => {message}")
        };
        self.audit_lines.borrow_mut().push(line);
    }
}
