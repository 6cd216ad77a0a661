//! Time utilities: parsing HH:MM and 12-hour display.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Convert a 24h `HH:MM` string to `H:MM AM|PM`.
///
/// Hour 0 is not mapped to 12: `00:15` renders as `0:15 AM`.
/// Minutes are kept as written. Empty input gives an empty string.
pub fn format_12h(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let (hours, minutes) = time.split_once(':').unwrap_or((time, ""));
    let mut hour: u32 = hours.trim().parse().unwrap_or(0);
    let mut period = "AM";

    if hour >= 12 {
        period = "PM";
        if hour > 12 {
            hour -= 12;
        }
    }

    format!("{}:{} {}", hour, minutes, period)
}
