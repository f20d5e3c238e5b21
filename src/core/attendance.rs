//! Attendance history: derived status, range/text filtering and the
//! "already checked in today" guard.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus, Punch};
use crate::utils::date::{format_long_date, start_of_month, start_of_week};
use chrono::NaiveDate;
use clap::ValueEnum;

/// Complete iff both timestamps are present, CheckedIn iff only the check-in
/// is. A check-out without check-in is anomalous and reads as Incomplete.
pub fn derive_status(record: &AttendanceRecord) -> AttendanceStatus {
    match (record.has_check_in(), record.has_check_out()) {
        (true, true) => AttendanceStatus::Complete,
        (true, false) => AttendanceStatus::CheckedIn,
        _ => AttendanceStatus::Incomplete,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RangeFilter {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
}

impl RangeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            RangeFilter::All => "All",
            RangeFilter::ThisWeek => "This Week",
            RangeFilter::ThisMonth => "This Month",
        }
    }

    /// Lower bound (inclusive) of the range, None for `All`.
    pub fn since(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            RangeFilter::All => None,
            RangeFilter::ThisWeek => Some(start_of_week(today)),
            RangeFilter::ThisMonth => Some(start_of_month(today)),
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive match against the long formatted date and the raw
/// check-in/check-out text. A blank query matches everything.
pub fn matches_query(record: &AttendanceRecord, query: &str) -> bool {
    let q = query.trim();
    if q.is_empty() {
        return true;
    }
    let q = q.to_lowercase();

    contains_ci(&format_long_date(record.date), &q)
        || record
            .check_in
            .as_deref()
            .is_some_and(|s| contains_ci(s, &q))
        || record
            .check_out
            .as_deref()
            .is_some_and(|s| contains_ci(s, &q))
}

/// Range first, then text. Order is preserved.
pub fn filter_records(
    records: &[AttendanceRecord],
    range: RangeFilter,
    query: &str,
    today: NaiveDate,
) -> Vec<AttendanceRecord> {
    let since = range.since(today);

    records
        .iter()
        .filter(|r| since.is_none_or(|s| r.date >= s))
        .filter(|r| matches_query(r, query))
        .cloned()
        .collect()
}

/// Screen state of the attendance history.
#[derive(Debug, Clone, Default)]
pub struct AttendanceHistory {
    records: Vec<AttendanceRecord>,
    pub range: RangeFilter,
    pub query: String,
}

impl AttendanceHistory {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_range(mut self, range: RangeFilter) -> Self {
        self.range = range;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn visible(&self, today: NaiveDate) -> Vec<AttendanceRecord> {
        filter_records(&self.records, self.range, &self.query, today)
    }

    pub fn record_for(&self, day: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.date == day)
    }

    /// True when today's record carries a check-in.
    pub fn checked_in_on(&self, day: NaiveDate) -> bool {
        self.record_for(day).is_some_and(|r| r.has_check_in())
    }

    /// Refuse a second check-in, or a check-out before checking in.
    pub fn ensure_punch_allowed(&self, punch: Punch, today: NaiveDate) -> AppResult<()> {
        let checked_in = self.checked_in_on(today);
        match punch {
            Punch::CheckIn if checked_in => Err(AppError::Validation(
                "Already checked in today.".to_string(),
            )),
            Punch::CheckOut if !checked_in => Err(AppError::Validation(
                "You must check in before checking out.".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rec(date: &str, check_in: Option<&str>, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            date: d(date),
            check_in: check_in.map(str::to_string),
            check_in_location: None,
            check_out: check_out.map(str::to_string),
            check_out_location: None,
        }
    }

    #[test]
    fn status_is_derived_from_timestamps() {
        assert_eq!(
            derive_status(&rec("2024-01-01", Some("08:00"), Some("17:00"))),
            AttendanceStatus::Complete
        );
        assert_eq!(
            derive_status(&rec("2024-01-01", Some("08:00"), None)),
            AttendanceStatus::CheckedIn
        );
        assert_eq!(
            derive_status(&rec("2024-01-01", None, None)),
            AttendanceStatus::Incomplete
        );
        assert_eq!(
            derive_status(&rec("2024-01-01", None, Some("17:00"))),
            AttendanceStatus::Incomplete
        );
    }

    #[test]
    fn week_range_starts_on_sunday() {
        // 2024-01-03 is a Wednesday; week starts Sunday 2023-12-31
        let records = vec![
            rec("2023-12-30", None, None),
            rec("2023-12-31", None, None),
            rec("2024-01-02", None, None),
        ];
        let hits = filter_records(&records, RangeFilter::ThisWeek, "", d("2024-01-03"));
        let dates: Vec<_> = hits.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d("2023-12-31"), d("2024-01-02")]);
    }

    #[test]
    fn month_range_starts_on_the_first() {
        let records = vec![rec("2024-01-31", None, None), rec("2024-02-01", None, None)];
        let hits = filter_records(&records, RangeFilter::ThisMonth, "", d("2024-02-15"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, d("2024-02-01"));
    }

    #[test]
    fn text_search_matches_weekday_names() {
        // 2024-01-01 Monday, 2024-01-02 Tuesday, 2024-01-08 Monday
        let records = vec![
            rec("2024-01-01", None, None),
            rec("2024-01-02", None, None),
            rec("2024-01-08", None, None),
        ];
        let hits = filter_records(&records, RangeFilter::All, "mon", d("2024-01-10"));
        let dates: Vec<_> = hits.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d("2024-01-01"), d("2024-01-08")]);
    }

    #[test]
    fn text_search_looks_at_raw_timestamps() {
        let records = vec![
            rec("2024-01-02", Some("2024-01-02T08:15:00"), None),
            rec("2024-01-03", Some("2024-01-03T09:00:00"), Some("2024-01-03T18:15:00")),
            rec("2024-01-04", None, None),
        ];
        let hits = filter_records(&records, RangeFilter::All, "T08:15", d("2024-01-10"));
        assert_eq!(hits.len(), 1);
        let hits = filter_records(&records, RangeFilter::All, ":15", d("2024-01-10"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn filters_compose_and_blank_query_is_noop() {
        let records = vec![
            rec("2023-12-25", None, None), // Monday, last month
            rec("2024-01-01", None, None), // Monday
            rec("2024-01-02", None, None), // Tuesday
        ];
        let today = d("2024-01-10");
        assert_eq!(filter_records(&records, RangeFilter::ThisMonth, "   ", today).len(), 2);
        assert_eq!(filter_records(&records, RangeFilter::ThisMonth, "monday", today).len(), 1);
    }

    #[test]
    fn punch_guard() {
        let today = d("2024-01-02");
        let history = AttendanceHistory::new(vec![rec("2024-01-02", Some("08:00"), None)]);
        assert!(history.ensure_punch_allowed(Punch::CheckIn, today).is_err());
        assert!(history.ensure_punch_allowed(Punch::CheckOut, today).is_ok());

        let empty = AttendanceHistory::new(vec![]);
        assert!(empty.ensure_punch_allowed(Punch::CheckIn, today).is_ok());
        assert!(empty.ensure_punch_allowed(Punch::CheckOut, today).is_err());
    }
}
