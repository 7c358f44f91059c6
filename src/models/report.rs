//! Generated reports
//!
//! Reports are not month-scoped; they are browsed by kind and free text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ReportId;

/// Category of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Academic,
    Behavioral,
    Attendance,
    Progress,
}

impl ReportKind {
    /// All report kinds, in display order
    pub const ALL: [ReportKind; 4] = [
        Self::Academic,
        Self::Behavioral,
        Self::Attendance,
        Self::Progress,
    ];
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Academic => write!(f, "Academic"),
            Self::Behavioral => write!(f, "Behavioral"),
            Self::Attendance => write!(f, "Attendance"),
            Self::Progress => write!(f, "Progress"),
        }
    }
}

/// A generated report document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier
    pub id: ReportId,

    /// Report title
    pub title: String,

    /// Report category
    pub kind: ReportKind,

    /// Date the report was generated
    pub generated_on: NaiveDate,

    /// Report body text
    pub content: String,
}

impl Report {
    /// Create a new report
    pub fn new(
        title: impl Into<String>,
        kind: ReportKind,
        generated_on: NaiveDate,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: ReportId::new(),
            title: title.into(),
            kind,
            generated_on,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ReportKind::Academic.to_string(), "Academic");
        assert_eq!(ReportKind::Progress.to_string(), "Progress");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&ReportKind::Behavioral).unwrap();
        assert_eq!(json, "\"behavioral\"");
    }
}
