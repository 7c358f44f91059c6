//! Homework tasks
//!
//! Tasks carry a due date, a priority, and a two-state status that the
//! student can toggle from the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::HomeworkId;
use super::record::{format_short_date, DatedRecord};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, in display order
    pub const ALL: [Priority; 3] = [Self::High, Self::Medium, Self::Low];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Completion status of a task
///
/// Two states, one invertible transition, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// All statuses, in display order
    pub const ALL: [TaskStatus; 2] = [Self::Pending, Self::Completed];

    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A homework task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkTask {
    /// Unique identifier
    pub id: HomeworkId,

    /// Task title
    pub title: String,

    /// Subject the task belongs to
    pub subject: String,

    /// Due date; homework is bucketed into months by this date
    pub due_on: NaiveDate,

    /// Task priority
    pub priority: Priority,

    /// Pending or completed
    pub status: TaskStatus,

    /// Longer description, if any
    pub description: Option<String>,
}

impl HomeworkTask {
    /// Create a new homework task
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_on: NaiveDate,
        priority: Priority,
        status: TaskStatus,
        description: Option<String>,
    ) -> Self {
        Self {
            id: HomeworkId::new(),
            title: title.into(),
            subject: subject.into(),
            due_on,
            priority,
            status,
            description,
        }
    }

    /// Days until the due date (negative when past due)
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.due_on - today).num_days()
    }

    /// A task is overdue when it is still pending and its due date is
    /// strictly before today
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == TaskStatus::Pending && self.due_on < today
    }
}

impl DatedRecord for HomeworkTask {
    fn occurs_on(&self) -> NaiveDate {
        self.due_on
    }

    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.subject.clone(),
            self.description.clone().unwrap_or_default(),
            format_short_date(self.due_on),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(status: TaskStatus, due_on: NaiveDate) -> HomeworkTask {
        HomeworkTask::new(
            "Read Chapter 4",
            "History",
            due_on,
            Priority::Medium,
            status,
            Some("Study chapter 4 materials".to_string()),
        )
    }

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
        assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_overdue_requires_pending() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let yesterday = today - chrono::Duration::days(1);

        assert!(sample_task(TaskStatus::Pending, yesterday).is_overdue(today));
        assert!(!sample_task(TaskStatus::Completed, yesterday).is_overdue(today));
        // Due today is not overdue
        assert!(!sample_task(TaskStatus::Pending, today).is_overdue(today));
    }

    #[test]
    fn test_days_until() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let task = sample_task(TaskStatus::Pending, today + chrono::Duration::days(3));
        assert_eq!(task.days_until(today), 3);

        let past = sample_task(TaskStatus::Pending, today - chrono::Duration::days(2));
        assert_eq!(past.days_until(today), -2);
    }
}
