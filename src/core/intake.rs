use crate::core::store::RecordStore;
use crate::db::kv::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRecord;
use crate::utils::date::{format_display_date, parse_date, today_str};
use crate::utils::time::parse_time;
use chrono::Local;

/// The four fields of the entry form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub destination: String,
    pub date: String,
    pub time: String,
}

impl Default for FormInput {
    /// Empty form with the date pre-filled to today.
    fn default() -> Self {
        Self {
            name: String::new(),
            destination: String::new(),
            date: today_str(),
            time: String::new(),
        }
    }
}

impl FormInput {
    pub fn new(name: &str, destination: &str, date: &str, time: &str) -> Self {
        Self {
            name: name.to_string(),
            destination: destination.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    /// Reset after a save. The date stays for the next entry.
    fn clear_after_save(&mut self) {
        self.name.clear();
        self.destination.clear();
        self.time.clear();
    }
}

/// High-level business logic for saving a new driver record.
#[derive(Debug, Clone)]
pub struct FormIntake {
    display_date_format: String,
}

impl FormIntake {
    pub fn new(display_date_format: &str) -> Self {
        Self {
            display_date_format: display_date_format.to_string(),
        }
    }

    /// Validate the form, append the record and persist the store.
    pub fn submit<S: KvStore>(
        &self,
        form: &mut FormInput,
        store: &mut RecordStore,
        kv: &mut S,
    ) -> AppResult<DriverRecord> {
        self.submit_at(form, store, kv, Local::now().timestamp_millis())
    }

    /// Same as [`submit`](Self::submit) with an explicit creation time.
    pub fn submit_at<S: KvStore>(
        &self,
        form: &mut FormInput,
        store: &mut RecordStore,
        kv: &mut S,
        now_ms: i64,
    ) -> AppResult<DriverRecord> {
        let name = form.name.trim();
        let destination = form.destination.trim();
        let date = form.date.trim();
        let time = form.time.trim();

        if name.is_empty() || destination.is_empty() || date.is_empty() || time.is_empty() {
            return Err(AppError::MissingFields);
        }

        let raw_date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let time = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        let record = DriverRecord::new(
            store.next_id(now_ms)?,
            name,
            destination,
            &format_display_date(raw_date, &self.display_date_format),
            &time.format("%H:%M").to_string(),
            &raw_date.format("%Y-%m-%d").to_string(),
        );

        store.append(kv, record.clone())?;
        kv.audit(
            "add",
            &record.raw_date,
            &format!("{} → {} at {}", record.name, record.destination, record.time),
        );

        form.clear_after_save();
        Ok(record)
    }
}
