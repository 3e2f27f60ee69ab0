//! Date handling for the loosely formatted dates the backend returns
//! (`2024-03-15`, `2024-03-15T00:00:00.000Z`, `2024-03`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse any of the shapes the backend sends into a calendar date (UTC).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .ok()
}

/// Table rendering: `DD/MM/YYYY`, `N/A` when blank, `Invalid Date` when unparseable.
pub fn format_date(input: &str) -> String {
    if input.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_date(input) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Value for an `<input type="date">`: `YYYY-MM-DD`, or empty.
pub fn to_input_date(input: &str) -> String {
    parse_date(input)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Chart axis label: `2024-03` becomes `March 2024`. Unparseable input is returned as is.
pub fn month_label(input: &str) -> String {
    let trimmed = input.trim();
    parse_date(trimmed)
        .or_else(|| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok())
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Today in `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
