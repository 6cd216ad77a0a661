use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the default value of the form's date field.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Display form of a date, e.g. `05/01/2024` for `%d/%m/%Y`.
pub fn format_display_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}
