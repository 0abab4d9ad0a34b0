//! Formatting helpers shared by actions and display code

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat};
use thiserror::Error;

/// Input accepted by [`format_datetime`] could not be read as a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format: {0}")]
pub struct InvalidDate(pub String);

/// Formats accepted for a `datetime-local` style input (no offset).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Normalize a form date into RFC 3339 with an explicit offset and no
/// fractional seconds, the format the backend expects for deadlines and
/// delivery dates.
///
/// Inputs that already carry an offset are converted to `offset`; naive
/// inputs are read as wall-clock time in `offset`.
pub fn format_datetime(input: &str, offset: FixedOffset) -> Result<String, InvalidDate> {
    let input = input.trim();
    let parsed = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => dt.with_timezone(&offset),
        Err(_) => {
            let naive = NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .ok_or_else(|| InvalidDate(input.to_string()))?;
            naive
                .and_local_timezone(offset)
                .single()
                .ok_or_else(|| InvalidDate(input.to_string()))?
        }
    };
    Ok(parsed.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// [`format_datetime`] in the machine's local offset.
pub fn format_datetime_local(input: &str) -> Result<String, InvalidDate> {
    format_datetime(input, *Local::now().offset())
}

/// Back to the `YYYY-MM-DDTHH:MM` form a `datetime-local` input expects,
/// in the timestamp's own offset.
pub fn to_datetime_local(input: &str) -> Result<String, InvalidDate> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .map_err(|_| InvalidDate(input.to_string()))
}

/// Percent (0-100) to ratio (0-1).
pub fn percent_to_ratio(percent: f64) -> f64 {
    percent / 100.0
}

/// Strip scheme and `www.` for display.
pub fn format_website_url(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Ensure a handle carries a leading `@`.
pub fn format_twitter_handle(handle: &str) -> String {
    if handle.is_empty() || handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{handle}")
    }
}
