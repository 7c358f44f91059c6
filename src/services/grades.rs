//! Grades page engine
//!
//! Month-scoped filtering, summary statistics, and the per-subject and
//! chronological breakdowns the grade charts render.

use crate::models::{DatedRecord, GradeEntry, SchoolMonth};

use super::filter::{matches_search, month_total, MonthView, Selection};

/// Filter criteria for the grades page
#[derive(Debug, Clone)]
pub struct GradeQuery {
    /// Selected month
    pub month: SchoolMonth,
    /// Subject filter ("All Subjects" dropdown)
    pub subject: Selection<String>,
    /// Free-text search
    pub search: String,
}

impl GradeQuery {
    /// Create a query for a month with no other filters
    pub fn new(month: SchoolMonth) -> Self {
        Self {
            month,
            subject: Selection::All,
            search: String::new(),
        }
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
        !self.subject.is_all() || !self.search.is_empty()
    }

    fn matches(&self, grade: &GradeEntry) -> bool {
        grade.in_month(self.month)
            && self.subject.admits(&grade.subject)
            && matches_search(grade, &self.search)
    }
}

/// Month summary for the grades page stat cards
///
/// The average is the rounded mean of the *stored* percentages; marks sums
/// are plain totals. All zero when the month has no grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GradeSummary {
    /// round(mean of percentage), 0 when the month is empty
    pub average_percentage: u32,
    /// Sum of marks earned
    pub marks_earned: u32,
    /// Sum of marks possible
    pub marks_possible: u32,
    /// Number of grades in the month
    pub count: usize,
}

impl GradeSummary {
    /// Reduce a month's grades into a summary
    pub fn for_month(records: &[GradeEntry], month: SchoolMonth) -> Self {
        let mut summary = Self::default();
        let mut percentage_sum: u64 = 0;

        for grade in records.iter().filter(|r| r.in_month(month)) {
            summary.count += 1;
            percentage_sum += grade.percentage as u64;
            summary.marks_earned += grade.marks;
            summary.marks_possible += grade.total_marks;
        }

        if summary.count > 0 {
            summary.average_percentage =
                (percentage_sum as f64 / summary.count as f64).round() as u32;
        }

        summary
    }
}

/// Build the grades page view for a query
///
/// Rows are sorted newest first; ties keep input order. The summary covers
/// the whole month regardless of active filters.
pub fn month_view(records: &[GradeEntry], query: &GradeQuery) -> MonthView<GradeEntry, GradeSummary> {
    let mut rows: Vec<GradeEntry> = records
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    MonthView {
        rows,
        summary: GradeSummary::for_month(records, query.month),
        month_total: month_total(records, query.month),
    }
}

/// Mean percentage for one subject in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAverage {
    /// Subject name
    pub subject: String,
    /// round(mean of percentage), 0 when the subject has no grades that month
    pub average: u32,
}

/// Per-subject averages over a month, one entry per known subject
///
/// Subjects with no grades that month report 0, matching the bar chart's
/// empty columns.
pub fn subject_averages(records: &[GradeEntry], month: SchoolMonth) -> Vec<SubjectAverage> {
    subjects(records)
        .into_iter()
        .map(|subject| {
            let mut sum: u64 = 0;
            let mut count: u64 = 0;
            for grade in records
                .iter()
                .filter(|r| r.in_month(month) && r.subject == subject)
            {
                sum += grade.percentage as u64;
                count += 1;
            }

            let average = if count > 0 {
                (sum as f64 / count as f64).round() as u32
            } else {
                0
            };

            SubjectAverage { subject, average }
        })
        .collect()
}

/// The month's percentages in chronological order, for the trend line
pub fn month_trend(records: &[GradeEntry], month: SchoolMonth) -> Vec<u32> {
    let mut month_grades: Vec<&GradeEntry> =
        records.iter().filter(|r| r.in_month(month)).collect();
    month_grades.sort_by_key(|g| g.date);
    month_grades.iter().map(|g| g.percentage).collect()
}

/// The distinct subjects present in a collection, sorted
pub fn subjects(records: &[GradeEntry]) -> Vec<String> {
    let mut subjects: Vec<String> = records.iter().map(|r| r.subject.clone()).collect();
    subjects.sort();
    subjects.dedup();
    subjects
}
