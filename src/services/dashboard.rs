//! Dashboard home aggregates
//!
//! The derived numbers the home page's header, KPI cards, and sparklines
//! render, computed from the full dataset on demand.

use chrono::NaiveDate;

use crate::data::Dataset;
use crate::models::{unread_count, EventKind, SchoolMonth, TaskStatus};

use super::attendance::AttendanceSummary;
use super::grades::GradeSummary;

/// The home page's headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeSnapshot {
    /// Tasks still pending across the whole dataset
    pub pending_tasks: usize,
    /// Exams on the upcoming timeline
    pub upcoming_exams: usize,
    /// Unread notifications
    pub unread_notifications: usize,
    /// Attendance percentage for the selected month
    pub attendance_percentage: u32,
    /// Average grade percentage for the selected month
    pub average_grade: u32,
}

impl HomeSnapshot {
    /// Compute the snapshot for a month
    pub fn compute(data: &Dataset, month: SchoolMonth) -> Self {
        Self {
            pending_tasks: data
                .homework
                .iter()
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
            upcoming_exams: data
                .events
                .iter()
                .filter(|e| e.kind == EventKind::Exam)
                .count(),
            unread_notifications: unread_count(&data.notifications),
            attendance_percentage: AttendanceSummary::for_month(&data.attendance, month).percentage,
            average_grade: GradeSummary::for_month(&data.grades, month).average_percentage,
        }
    }
}

/// Attendance percentage for each of the trailing `count` months, oldest
/// first, for the KPI sparkline
pub fn attendance_history(data: &Dataset, month: SchoolMonth, count: usize) -> Vec<u64> {
    month
        .trailing(count)
        .into_iter()
        .map(|m| AttendanceSummary::for_month(&data.attendance, m).percentage as u64)
        .collect()
}

/// Average grade for each of the trailing `count` months, oldest first
pub fn grade_history(data: &Dataset, month: SchoolMonth, count: usize) -> Vec<u64> {
    month
        .trailing(count)
        .into_iter()
        .map(|m| GradeSummary::for_month(&data.grades, m).average_percentage as u64)
        .collect()
}

/// Pending-task count for each of the trailing `count` months, oldest first
pub fn pending_history(data: &Dataset, month: SchoolMonth, count: usize) -> Vec<u64> {
    month
        .trailing(count)
        .into_iter()
        .map(|m| {
            data.homework
                .iter()
                .filter(|t| t.status == TaskStatus::Pending && m.contains(t.due_on))
                .count() as u64
        })
        .collect()
}

/// Timeline events on or after today, soonest first
pub fn upcoming_events(data: &Dataset, today: NaiveDate) -> Vec<crate::models::TimelineEvent> {
    let mut events: Vec<_> = data
        .events
        .iter()
        .filter(|e| e.date >= today)
        .cloned()
        .collect();
    events.sort_by_key(|e| e.date);
    events
}
