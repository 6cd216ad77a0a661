//! Rendering of the driver list.

use crate::models::driver::DriverRecord;
use crate::utils::date::parse_date;
use crate::utils::formatting::{display_width, pad_right};
use crate::utils::time::format_12h;
use chrono::NaiveDate;

/// Placeholder shown instead of an empty list.
pub const EMPTY_PLACEHOLDER: &str = "No drivers registered";

const HEADERS: [&str; 4] = ["NAME", "DESTINATION", "DATE", "TIME"];

/// Records ordered by `raw_date`, most recent first. Records sharing a
/// date keep their insertion order.
pub fn sorted_by_date_desc(records: &[DriverRecord]) -> Vec<&DriverRecord> {
    let mut view: Vec<&DriverRecord> = records.iter().collect();
    view.sort_by_key(|r| std::cmp::Reverse(sort_key(r)));
    view
}

fn sort_key(record: &DriverRecord) -> NaiveDate {
    parse_date(&record.raw_date).unwrap_or(NaiveDate::MIN)
}

/// Render the list as an aligned table, or the placeholder when empty.
pub fn render(records: &[DriverRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_PLACEHOLDER);
    }

    let rows: Vec<[String; 4]> = sorted_by_date_desc(records)
        .into_iter()
        .map(|r| {
            [
                r.name.clone(),
                r.destination.clone(),
                r.date.clone(),
                format_12h(&r.time),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(display_width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| pad_right(c, *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
