//! In-memory list of driver records mirrored to the `drivers` key.

use crate::db::kv::{DRIVERS_KEY, KvStore};
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRecord;
use crate::ui::messages::warning;

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<DriverRecord>,
}

impl RecordStore {
    /// Load the persisted list. Missing, unreadable or corrupt data yields
    /// an empty store.
    pub fn load<S: KvStore>(kv: &S) -> Self {
        let raw = match kv.get(DRIVERS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warning(format!("Could not read stored drivers: {}", e));
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<DriverRecord>>(&raw) {
            Ok(records) => Self { records },
            Err(e) => {
                warning("Stored drivers are unreadable, starting with an empty list.");
                kv.audit("recover", DRIVERS_KEY, &format!("Discarded corrupt data: {}", e));
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[DriverRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next unique id: the creation time in milliseconds, bumped past the
    /// largest stored id when needed.
    pub fn next_id(&self, now_ms: i64) -> AppResult<i64> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) if now_ms <= max => max
                .checked_add(1)
                .ok_or_else(|| AppError::Other(format!("no id left after {}", max))),
            _ => Ok(now_ms),
        }
    }

    /// Append a record. Memory only changes once the new list is stored.
    pub fn append<S: KvStore>(&mut self, kv: &mut S, record: DriverRecord) -> AppResult<()> {
        let mut next = self.records.clone();
        next.push(record);
        persist(kv, &next)?;
        self.records = next;
        Ok(())
    }

    /// Remove every record. Memory only changes once the empty list is
    /// stored.
    pub fn clear<S: KvStore>(&mut self, kv: &mut S) -> AppResult<()> {
        persist(kv, &[])?;
        self.records.clear();
        Ok(())
    }
}

fn persist<S: KvStore>(kv: &mut S, records: &[DriverRecord]) -> AppResult<()> {
    let json = serde_json::to_string(records)?;
    kv.set(DRIVERS_KEY, &json)
}
