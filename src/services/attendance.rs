//! Attendance page engine
//!
//! Month-scoped filtering and summary statistics for attendance records.

use crate::models::{AttendanceEntry, AttendanceStatus, DatedRecord, SchoolMonth};

use super::filter::{matches_search, month_total, MonthView, Selection};

/// Filter criteria for the attendance page
#[derive(Debug, Clone)]
pub struct AttendanceQuery {
    /// Selected month
    pub month: SchoolMonth,
    /// Status filter ("All Status" dropdown)
    pub status: Selection<AttendanceStatus>,
    /// Subject filter ("All Subjects" dropdown)
    pub subject: Selection<String>,
    /// Free-text search
    pub search: String,
}

impl AttendanceQuery {
    /// Create a query for a month with no other filters
    pub fn new(month: SchoolMonth) -> Self {
        Self {
            month,
            status: Selection::All,
            subject: Selection::All,
            search: String::new(),
        }
    }

    /// Restrict to a status
    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    /// Restrict to a subject
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Selection::Only(subject.into());
        self
    }

    /// Set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any filter beyond the month is active
    pub fn has_active_filters(&self) -> bool {
        !self.status.is_all() || !self.subject.is_all() || !self.search.is_empty()
    }

    fn matches(&self, entry: &AttendanceEntry) -> bool {
        entry.in_month(self.month)
            && self.status.admits(&entry.status)
            && self.subject.admits_opt(entry.subject.as_ref())
            && matches_search(entry, &self.search)
    }
}

/// Month summary for the attendance page stat cards
///
/// Computed over the month subset only; the status/subject/search filters
/// narrow the table, never the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceSummary {
    /// Days marked present
    pub present: usize,
    /// Days marked absent
    pub absent: usize,
    /// Days on leave
    pub leave: usize,
    /// All records in the month
    pub total: usize,
    /// round(present / total * 100), 0 when the month is empty
    pub percentage: u32,
}

impl AttendanceSummary {
    /// Reduce a month's records into a summary
    pub fn for_month(records: &[AttendanceEntry], month: SchoolMonth) -> Self {
        let mut summary = Self::default();

        for entry in records.iter().filter(|r| r.in_month(month)) {
            summary.total += 1;
            match entry.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Leave => summary.leave += 1,
            }
        }

        if summary.total > 0 {
            summary.percentage =
                ((summary.present as f64 / summary.total as f64) * 100.0).round() as u32;
        }

        summary
    }
}

/// Build the attendance page view for a query
///
/// Rows are sorted newest first (recency-first review); ties keep input
/// order. The summary covers the whole month regardless of active filters.
pub fn month_view(
    records: &[AttendanceEntry],
    query: &AttendanceQuery,
) -> MonthView<AttendanceEntry, AttendanceSummary> {
    let mut rows: Vec<AttendanceEntry> = records
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    MonthView {
        rows,
        summary: AttendanceSummary::for_month(records, query.month),
        month_total: month_total(records, query.month),
    }
}

/// The distinct subjects present in a collection, sorted
pub fn subjects(records: &[AttendanceEntry]) -> Vec<String> {
    let mut subjects: Vec<String> = records.iter().filter_map(|r| r.subject.clone()).collect();
    subjects.sort();
    subjects.dedup();
    subjects
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(day: u32, status: AttendanceStatus, subject: &str) -> AttendanceEntry {
        AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            status,
            Some(subject.to_string()),
        )
    }

    fn august() -> SchoolMonth {
        SchoolMonth::new(2026, 8)
    }

    #[test]
    fn test_summary_counts_and_percentage() {
        // 7 present, 2 absent, 1 leave -> 70%
        let mut records = Vec::new();
        for day in 1..=7 {
            records.push(entry(day, AttendanceStatus::Present, "Mathematics"));
        }
        records.push(entry(10, AttendanceStatus::Absent, "English"));
        records.push(entry(11, AttendanceStatus::Absent, "English"));
        records.push(entry(12, AttendanceStatus::Leave, "Science"));

        let summary = AttendanceSummary::for_month(&records, august());
        assert_eq!(summary.present, 7);
        assert_eq!(summary.absent, 2);
        assert_eq!(summary.leave, 1);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.percentage, 70);
    }

    #[test]
    fn test_summary_empty_month_is_all_zero() {
        let summary = AttendanceSummary::for_month(&[], august());
        assert_eq!(summary, AttendanceSummary::default());
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn test_view_sorted_newest_first() {
        let records = vec![
            entry(3, AttendanceStatus::Present, "English"),
            entry(14, AttendanceStatus::Present, "English"),
            entry(7, AttendanceStatus::Absent, "Science"),
        ];

        let view = month_view(&records, &AttendanceQuery::new(august()));
        let days: Vec<u32> = view
            .rows
            .iter()
            .map(|r| chrono::Datelike::day(&r.date))
            .collect();
        assert_eq!(days, vec![14, 7, 3]);
        assert_eq!(view.month_total, 3);
    }

    #[test]
    fn test_filters_narrow_rows_but_not_summary() {
        let records = vec![
            entry(3, AttendanceStatus::Present, "English"),
            entry(4, AttendanceStatus::Absent, "Science"),
            entry(5, AttendanceStatus::Present, "Science"),
        ];

        let query = AttendanceQuery::new(august()).status(AttendanceStatus::Present);
        let view = month_view(&records, &query);

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.month_total, 3);
        assert_eq!(view.summary.total, 3);
        assert_eq!(view.summary.absent, 1);
    }

    #[test]
    fn test_search_matches_weekday_and_status() {
        // 2026-08-03 is a Monday
        let records = vec![
            entry(3, AttendanceStatus::Present, "English"),
            entry(4, AttendanceStatus::Absent, "Science"),
        ];

        let by_weekday = month_view(&records, &AttendanceQuery::new(august()).search("monday"));
        assert_eq!(by_weekday.rows.len(), 1);

        let by_status = month_view(&records, &AttendanceQuery::new(august()).search("absent"));
        assert_eq!(by_status.rows.len(), 1);
        assert_eq!(by_status.rows[0].status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_other_month_yields_empty_view() {
        let records = vec![entry(3, AttendanceStatus::Present, "English")];
        let view = month_view(&records, &AttendanceQuery::new(SchoolMonth::new(2023, 1)));

        assert!(view.is_empty());
        assert_eq!(view.month_total, 0);
        assert_eq!(view.summary, AttendanceSummary::default());
    }

    #[test]
    fn test_subjects_sorted_deduped() {
        let records = vec![
            entry(3, AttendanceStatus::Present, "Science"),
            entry(4, AttendanceStatus::Present, "English"),
            entry(5, AttendanceStatus::Present, "Science"),
        ];
        assert_eq!(subjects(&records), vec!["English", "Science"]);
    }
}
