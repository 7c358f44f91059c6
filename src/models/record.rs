//! Shared behavior for dated records
//!
//! Every record kind the dashboard pages operate over carries a calendar
//! date and a set of searchable text fields. The trait is the seam the
//! filtering engine works against.

use chrono::NaiveDate;

use super::month::SchoolMonth;

/// A record with an associated calendar date and searchable text fields
pub trait DatedRecord {
    /// The calendar date used to bucket this record into a month
    fn occurs_on(&self) -> NaiveDate;

    /// The stringified fields free-text search matches against
    ///
    /// Matching is case-insensitive substring, OR across fields; each kind
    /// decides which of its fields participate.
    fn search_haystacks(&self) -> Vec<String>;

    /// Check whether this record falls in the given month
    fn in_month(&self, month: SchoolMonth) -> bool {
        month.contains(self.occurs_on())
    }
}

/// Format a date the way the dashboard displays it, e.g. "Jan 5, 2026"
///
/// This string participates in free-text search, so display and search
/// must agree on it.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Full weekday name for a date, e.g. "Monday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_short_date(date), "Jan 5, 2026");

        let date = NaiveDate::from_ymd_opt(2026, 11, 23).unwrap();
        assert_eq!(format_short_date(date), "Nov 23, 2026");
    }

    #[test]
    fn test_weekday_name() {
        // 2026-08-05 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(weekday_name(date), "Wednesday");
    }
}
