//! Date helpers: wall-clock "today", parsing of the server's date strings,
//! week/month boundaries and the long display formats.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date coming from the API and truncate it to the local calendar day.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`
/// - RFC 3339 (`2024-01-01T08:30:00.000Z`), converted to local time first
/// - naive `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD HH:MM:SS`
pub fn parse_server_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    parse_server_datetime(s).map(|dt| dt.date_naive())
}

/// Parse a timestamp coming from the API into local time.
pub fn parse_server_datetime(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// First day (Sunday) of the week containing `d`.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_sunday() as i64)
}

/// First day of the month containing `d`.
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// `Monday, January 1, 2024`
pub fn format_long_date(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

/// Short `hh:mm AM` rendering of a raw timestamp, `N/A` when absent.
pub fn format_time(raw: Option<&str>) -> String {
    match raw {
        None => "N/A".to_string(),
        Some(s) if s.trim().is_empty() => "N/A".to_string(),
        Some(s) => parse_server_datetime(s)
            .map(|dt| dt.format("%I:%M %p").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

/// Serde adapter for date fields sent by the API.
pub fn de_server_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_server_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
}
