//! Upcoming events for the dashboard timeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;

/// Category of a timeline event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Exam,
    Quiz,
    Meeting,
    Deadline,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exam => write!(f, "Exam"),
            Self::Quiz => write!(f, "Quiz"),
            Self::Meeting => write!(f, "Meeting"),
            Self::Deadline => write!(f, "Deadline"),
        }
    }
}

/// An upcoming event on the student's timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Unique identifier
    pub id: EventId,

    /// Event title
    pub title: String,

    /// Date of the event
    pub date: NaiveDate,

    /// Event category
    pub kind: EventKind,

    /// Subject, where applicable
    pub subject: Option<String>,

    /// Longer description, if any
    pub description: Option<String>,
}

impl TimelineEvent {
    /// Create a new timeline event
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        kind: EventKind,
        subject: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            date,
            kind,
            subject,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Exam.to_string(), "Exam");
        assert_eq!(EventKind::Deadline.to_string(), "Deadline");
    }
}
