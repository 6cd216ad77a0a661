use serde::{Deserialize, Serialize};

/// One driver trip, as persisted under the `drivers` key.
///
/// The JSON layout is `{id, name, destination, date, time, rawDate}`:
/// `date` is the display form (`DD/MM/YYYY` by default), `raw_date` the
/// sortable ISO form and `time` the 24h `HH:MM` value as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "rawDate")]
    pub raw_date: String,
}

impl DriverRecord {
    pub fn new(
        id: i64,
        name: &str,
        destination: &str,
        date: &str,
        time: &str,
        raw_date: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            destination: destination.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            raw_date: raw_date.to_string(),
        }
    }
}
