//! Calendar-day labels and inclusive date windows.
//!
//! Trading days are calendar dates with no time-of-day meaning. Labels are
//! ISO `YYYY-MM-DD` strings; a row without a date gets [`MISSING_DATE_LABEL`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Label used for rows that carry no date.
pub const MISSING_DATE_LABEL: &str = "N/A";

/// `strftime` format of a date label.
pub const LABEL_FORMAT: &str = "%Y-%m-%d";

/// Format a trading day as its ISO label, or [`MISSING_DATE_LABEL`].
#[must_use]
pub fn date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format(LABEL_FORMAT).to_string(),
        None => MISSING_DATE_LABEL.to_string(),
    }
}

/// Parse a calendar day from a label or timestamp string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the UTC calendar day is kept)
/// and naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Returns `None` for
/// anything else, including [`MISSING_DATE_LABEL`].
#[must_use]
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, LABEL_FORMAT) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|dt| dt.date())
}

/// UTC calendar day of a Unix timestamp in milliseconds.
#[must_use]
pub fn day_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// Midnight at the start of `day`.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// `23:59:59.999` on `day`.
#[must_use]
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 is always a valid time of day.
    day.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| day.and_time(NaiveTime::MIN))
}

/// Inclusive range of calendar days used to select a slice of history.
///
/// Both boundary days are included whatever time of day the caller had in
/// mind: the start is widened to midnight and the end to `23:59:59.999`.
/// A window with `end < start` is allowed and simply matches nothing.
///
/// # Example
///
/// ```rust
/// use ta_core::DateWindow;
///
/// let window = DateWindow::parse("2024-01-02", "2024-01-02").unwrap();
/// assert!(window.contains_label("2024-01-02"));
/// assert!(!window.contains_label("2024-01-03"));
/// assert!(!window.contains_label("N/A"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window from two calendar days.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Create a window from timestamps, dropping their time of day.
    #[must_use]
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(start.date(), end.date())
    }

    /// Parse a window from two date strings (see [`parse_day`]).
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidInput`] if either string is not a date.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let parse = |s: &str| {
            parse_day(s).ok_or_else(|| IndicatorError::InvalidInput(format!("bad date '{s}'")))
        };
        Ok(Self::new(parse(start)?, parse(end)?))
    }

    /// Normalized `(start-of-day, end-of-day)` bounds.
    #[must_use]
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (start_of_day(self.start), end_of_day(self.end))
    }

    /// Whether the window's end precedes its start.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Whether `day` (taken at midnight) falls inside the window.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        let (lo, hi) = self.bounds();
        let instant = start_of_day(day);
        lo <= instant && instant <= hi
    }

    /// Whether a date label falls inside the window. Unparseable labels never do.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        parse_day(label).is_some_and(|d| self.contains(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(Some(day(2024, 3, 7))), "2024-03-07");
        assert_eq!(date_label(None), "N/A");
    }

    #[test]
    fn test_parse_day_formats() {
        assert_eq!(parse_day("2024-01-02"), Some(day(2024, 1, 2)));
        assert_eq!(parse_day("2024-01-02T15:30:00Z"), Some(day(2024, 1, 2)));
        assert_eq!(parse_day("2024-01-02T23:30:00-05:00"), Some(day(2024, 1, 3)));
        assert_eq!(parse_day("2024-01-02T09:15:00.250"), Some(day(2024, 1, 2)));
        assert_eq!(parse_day(" 2024-01-02 "), Some(day(2024, 1, 2)));
        assert_eq!(parse_day("N/A"), None);
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("2024-02-30"), None);
    }

    #[test]
    fn test_day_from_millis() {
        assert_eq!(day_from_millis(1_704_153_600_000), Some(day(2024, 1, 2)));
        // one millisecond before midnight stays on the 1st
        assert_eq!(day_from_millis(1_704_153_599_999), Some(day(2024, 1, 1)));
        assert_eq!(day_from_millis(i64::MAX), None);
    }

    #[test]
    fn test_bounds_cover_whole_days() {
        let window = DateWindow::new(day(2024, 1, 2), day(2024, 1, 3));
        let (lo, hi) = window.bounds();
        assert_eq!(lo.to_string(), "2024-01-02 00:00:00");
        assert_eq!(hi.to_string(), "2024-01-03 23:59:59.999");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = DateWindow::new(day(2024, 1, 2), day(2024, 1, 4));
        assert!(!window.contains(day(2024, 1, 1)));
        assert!(window.contains(day(2024, 1, 2)));
        assert!(window.contains(day(2024, 1, 4)));
        assert!(!window.contains(day(2024, 1, 5)));
    }

    #[test]
    fn test_from_datetimes_strips_time() {
        let start = day(2024, 1, 2).and_hms_opt(16, 0, 0).unwrap();
        let end = day(2024, 1, 2).and_hms_opt(1, 0, 0).unwrap();
        let window = DateWindow::from_datetimes(start, end);
        assert!(window.contains(day(2024, 1, 2)));
        assert!(!window.is_inverted());
    }

    #[test]
    fn test_inverted_window_matches_nothing() {
        let window = DateWindow::new(day(2024, 1, 5), day(2024, 1, 1));
        assert!(window.is_inverted());
        assert!(!window.contains(day(2024, 1, 3)));
        assert!(!window.contains(day(2024, 1, 5)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DateWindow::parse("2024-01-01", "soon").unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidInput(_)));
    }
}
