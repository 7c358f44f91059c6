//! Reports page engine
//!
//! Reports are browsed by kind and free text; they are not month-scoped.

use crate::models::{Report, ReportKind};

use super::filter::Selection;

/// Filter criteria for the reports page
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Kind filter ("All Types" dropdown)
    pub kind: Selection<ReportKind>,
    /// Free-text search over title and content
    pub search: String,
}

impl ReportQuery {
    /// Create a query with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a report kind
    pub fn kind(mut self, kind: ReportKind) -> Self {
        self.kind = Selection::Only(kind);
        self
    }

    /// Set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any filter is active
    pub fn has_active_filters(&self) -> bool {
        !self.kind.is_all() || !self.search.is_empty()
    }

    fn matches(&self, report: &Report) -> bool {
        if !self.kind.admits(&report.kind) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        report.title.to_lowercase().contains(&needle)
            || report.content.to_lowercase().contains(&needle)
    }
}

/// Filter reports, newest first
pub fn filtered(reports: &[Report], query: &ReportQuery) -> Vec<Report> {
    let mut rows: Vec<Report> = reports
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.generated_on.cmp(&a.generated_on));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(title: &str, kind: ReportKind, day: u32, content: &str) -> Report {
        Report::new(
            title,
            kind,
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            content,
        )
    }

    fn sample_reports() -> Vec<Report> {
        vec![
            report(
                "Academic Performance Report",
                ReportKind::Academic,
                1,
                "Overall GPA: 3.8/4.0.",
            ),
            report(
                "Attendance Report",
                ReportKind::Attendance,
                3,
                "Current attendance: 94%.",
            ),
            report(
                "Progress Report",
                ReportKind::Progress,
                2,
                "Steady improvement in Mathematics.",
            ),
        ]
    }

    #[test]
    fn test_filtered_newest_first() {
        let rows = filtered(&sample_reports(), &ReportQuery::new());
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Attendance Report",
                "Progress Report",
                "Academic Performance Report"
            ]
        );
    }

    #[test]
    fn test_kind_filter() {
        let rows = filtered(
            &sample_reports(),
            &ReportQuery::new().kind(ReportKind::Progress),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, ReportKind::Progress);
    }

    #[test]
    fn test_search_matches_content() {
        let rows = filtered(&sample_reports(), &ReportQuery::new().search("gpa"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, ReportKind::Academic);

        let none = filtered(&sample_reports(), &ReportQuery::new().search("detention"));
        assert!(none.is_empty());
    }
}
