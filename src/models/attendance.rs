//! Attendance records
//!
//! One entry per subject per school day, marked present, absent, or on leave.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AttendanceId;
use super::record::{format_short_date, weekday_name, DatedRecord};

/// Attendance status for a single class session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    /// All statuses, in display order
    pub const ALL: [AttendanceStatus; 3] = [Self::Present, Self::Absent, Self::Leave];
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "Present"),
            Self::Absent => write!(f, "Absent"),
            Self::Leave => write!(f, "Leave"),
        }
    }
}

/// A single attendance entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Unique identifier
    pub id: AttendanceId,

    /// The school day this entry is for
    pub date: NaiveDate,

    /// Present, absent, or on leave
    pub status: AttendanceStatus,

    /// The subject of the class session, if recorded per subject
    pub subject: Option<String>,
}

impl AttendanceEntry {
    /// Create a new attendance entry
    pub fn new(date: NaiveDate, status: AttendanceStatus, subject: Option<String>) -> Self {
        Self {
            id: AttendanceId::new(),
            date,
            status,
            subject,
        }
    }
}

impl DatedRecord for AttendanceEntry {
    fn occurs_on(&self) -> NaiveDate {
        self.date
    }

    fn search_haystacks(&self) -> Vec<String> {
        vec![
            format_short_date(self.date),
            self.subject.clone().unwrap_or_default(),
            weekday_name(self.date),
            self.status.to_string(),
        ]
    }
}
