// src/util/text.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename="([^"]+)"|filename=([^";\s]+)"#).expect("static regex is valid")
});

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
///
/// # Examples
///
/// ```
/// use boardview::util::text::truncate_text;
///
/// assert_eq!(truncate_text("Buy milk", 30), "Buy milk");
/// assert_eq!(truncate_text("abcdef", 3), "abc...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a backend date or timestamp as `YYYY-MM-DD`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, ISO without offset and plain
/// dates. Missing values read "not set"; anything unparseable is shown as is.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "not set".to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match parsed {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Pick the download name from a `Content-Disposition` header.
///
/// Both `filename="x"` and bare `filename=x` are understood; without either
/// the name falls back to `tasks_<today>.json`.
pub fn export_filename(content_disposition: Option<&str>, today: NaiveDate) -> String {
    content_disposition
        .and_then(|header| FILENAME_RE.captures(header))
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| format!("tasks_{}.json", today.format("%Y-%m-%d")))
}
