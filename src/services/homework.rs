//! Homework page engine
//!
//! Month-scoped filtering, summary statistics, and the status toggle for
//! homework tasks.

use chrono::NaiveDate;

use crate::models::{DatedRecord, HomeworkId, HomeworkTask, Priority, SchoolMonth, TaskStatus};

use super::filter::{matches_search, month_total, MonthView, Selection};

/// Filter criteria for the homework page
#[derive(Debug, Clone)]
pub struct HomeworkQuery {
    /// Selected month (by due date)
    pub month: SchoolMonth,
    /// Status filter ("All Status" dropdown)
    pub status: Selection<TaskStatus>,
    /// Subject filter ("All Subjects" dropdown)
    pub subject: Selection<String>,
    /// Priority filter ("All Priorities" dropdown)
    pub priority: Selection<Priority>,
    /// Free-text search
    pub search: String,
}

impl HomeworkQuery {
    /// Create a query for a month with no other filters
    pub fn new(month: SchoolMonth) -> Self {
        Self {
            month,
            status: Selection::All,
            subject: Selection::All,
            priority: Selection::All,
            search: String::new(),
        }
    }

    /// Restrict to a status
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    /// Restrict to a subject
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Selection::Only(subject.into());
        self
    }

    /// Restrict to a priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Selection::Only(priority);
        self
    }

    /// Set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any filter beyond the month is active
    pub fn has_active_filters(&self) -> bool {
        !self.status.is_all()
            || !self.subject.is_all()
            || !self.priority.is_all()
            || !self.search.is_empty()
    }

    fn matches(&self, task: &HomeworkTask) -> bool {
        task.in_month(self.month)
            && self.status.admits(&task.status)
            && self.subject.admits(&task.subject)
            && self.priority.admits(&task.priority)
            && matches_search(task, &self.search)
    }
}

/// Month summary for the homework page stat cards
///
/// `overdue` and `high_priority` only count tasks still pending. `today`
/// is explicit so callers (and tests) control the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeworkSummary {
    /// Completed tasks due this month
    pub completed: usize,
    /// Pending tasks due this month
    pub pending: usize,
    /// Pending tasks whose due date is strictly before today
    pub overdue: usize,
    /// Pending tasks with high priority
    pub high_priority: usize,
    /// All tasks due this month
    pub total: usize,
}

impl HomeworkSummary {
    /// Reduce a month's tasks into a summary
    pub fn for_month(tasks: &[HomeworkTask], month: SchoolMonth, today: NaiveDate) -> Self {
        let mut summary = Self::default();

        for task in tasks.iter().filter(|t| t.in_month(month)) {
            summary.total += 1;
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::Pending => {
                    summary.pending += 1;
                    if task.due_on < today {
                        summary.overdue += 1;
                    }
                    if task.priority == Priority::High {
                        summary.high_priority += 1;
                    }
                }
            }
        }

        summary
    }
}

/// Build the homework page view for a query
///
/// Rows are sorted soonest-due first (urgency-first action, the opposite of
/// the attendance/grades ordering); ties keep input order. The summary
/// covers the whole month regardless of active filters.
pub fn month_view(
    tasks: &[HomeworkTask],
    query: &HomeworkQuery,
    today: NaiveDate,
) -> MonthView<HomeworkTask, HomeworkSummary> {
    let mut rows: Vec<HomeworkTask> = tasks.iter().filter(|t| query.matches(t)).cloned().collect();
    rows.sort_by(|a, b| a.due_on.cmp(&b.due_on));

    MonthView {
        rows,
        summary: HomeworkSummary::for_month(tasks, query.month, today),
        month_total: month_total(tasks, query.month),
    }
}

/// Flip one task's status between pending and completed
///
/// Copy-on-write: returns a new collection with exactly the matching task
/// replaced. Ordering and every other field are untouched; an unknown id is
/// a silent no-op.
pub fn toggle_status(tasks: &[HomeworkTask], id: HomeworkId) -> Vec<HomeworkTask> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                let mut toggled = task.clone();
                toggled.status = task.status.toggled();
                toggled
            } else {
                task.clone()
            }
        })
        .collect()
}

/// The distinct subjects present in a collection, sorted
pub fn subjects(tasks: &[HomeworkTask]) -> Vec<String> {
    let mut subjects: Vec<String> = tasks.iter().map(|t| t.subject.clone()).collect();
    subjects.sort();
    subjects.dedup();
    subjects
}
