//! Synthetic dataset
//!
//! All record collections are generated at process start and held in
//! memory for the session; nothing here is ever persisted. Only the
//! homework collection changes after generation (the status toggle), and
//! that change is a copy-on-write replace performed by the services layer.

mod generator;

use chrono::NaiveDate;

use crate::models::{
    AttendanceEntry, GradeEntry, HomeworkTask, Notification, Report, TimelineEvent,
};

/// Seed used when the caller does not supply one, so the demo data is
/// stable run-to-run
pub const DEFAULT_SEED: u64 = 7;

/// Every collection the dashboard renders
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Attendance entries, roughly the last four months of school days
    pub attendance: Vec<AttendanceEntry>,
    /// Grades for the last four months
    pub grades: Vec<GradeEntry>,
    /// Homework due from two months back through two months ahead
    pub homework: Vec<HomeworkTask>,
    /// Generated report documents
    pub reports: Vec<Report>,
    /// Navbar notifications
    pub notifications: Vec<Notification>,
    /// Upcoming timeline events
    pub events: Vec<TimelineEvent>,
}

impl Dataset {
    /// Generate a dataset anchored on `today`
    pub fn generate(today: NaiveDate, seed: u64) -> Self {
        generator::generate(today, seed)
    }

    /// Generate the default dataset for the current date
    pub fn for_today() -> Self {
        Self::generate(chrono::Local::now().date_naive(), DEFAULT_SEED)
    }
}
