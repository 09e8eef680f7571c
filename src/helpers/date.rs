//! Date helper functions

use chrono::NaiveDate;

/// Sortable date form used as the scaffold filename stem
///
/// # Examples
/// ```ignore
/// sortable_date(&date) // -> "2024-03-15"
/// ```
pub fn sortable_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Display date form embedded in front matter (`Mar 15 2024`)
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%b %d %Y").to_string()
}

/// Parse a date string in the formats content files actually use
///
/// Accepts the sortable form, slash-separated dates, the scaffold's
/// display form, and full-month spellings.
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%b %d %Y",
        "%b %d, %Y",
        "%B %d %Y",
        "%B %d, %Y",
    ];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Datetime strings still carry a usable date part
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
