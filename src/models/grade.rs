//! Grade records
//!
//! One entry per assessment: marks earned, marks possible, and the
//! percentage the school reported for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::GradeId;
use super::record::{format_short_date, DatedRecord};

/// A single graded assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Unique identifier
    pub id: GradeId,

    /// Subject the assessment belongs to
    pub subject: String,

    /// Assessment label, e.g. "Mid-term Exam"
    pub assessment: String,

    /// Marks earned
    pub marks: u32,

    /// Marks possible (always > 0)
    pub total_marks: u32,

    /// Percentage as reported by the source, 0-100
    ///
    /// Stored, not derived: the source reports this independently of
    /// marks/total_marks and the two need not agree exactly.
    pub percentage: u32,

    /// Date the assessment was graded
    pub date: NaiveDate,

    /// Teacher comments, if any
    pub comments: Option<String>,
}

impl GradeEntry {
    /// Create a new grade entry
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        subject: impl Into<String>,
        assessment: impl Into<String>,
        marks: u32,
        total_marks: u32,
        percentage: u32,
        date: NaiveDate,
        comments: Option<String>,
    ) -> Self {
        Self {
            id: GradeId::new(),
            subject: subject.into(),
            assessment: assessment.into(),
            marks,
            total_marks,
            percentage,
            date,
            comments,
        }
    }

    /// Fraction display, e.g. "43/50"
    pub fn marks_display(&self) -> String {
        format!("{}/{}", self.marks, self.total_marks)
    }
}

impl DatedRecord for GradeEntry {
    fn occurs_on(&self) -> NaiveDate {
        self.date
    }

    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.assessment.clone(),
            format_short_date(self.date),
            self.comments.clone().unwrap_or_default(),
        ]
    }
}
