//! Core data models for Studesk
//!
//! This module contains all the data structures the dashboard pages render:
//! attendance entries, grades, homework tasks, reports, notifications, and
//! timeline events, plus the month-selection and typed-id primitives.

pub mod attendance;
pub mod event;
pub mod grade;
pub mod homework;
pub mod ids;
pub mod month;
pub mod notification;
pub mod record;
pub mod report;

pub use attendance::{AttendanceEntry, AttendanceStatus};
pub use event::{EventKind, TimelineEvent};
pub use grade::GradeEntry;
pub use homework::{HomeworkTask, Priority, TaskStatus};
pub use ids::{AttendanceId, EventId, GradeId, HomeworkId, NotificationId, ReportId};
pub use month::SchoolMonth;
pub use notification::{unread_count, Notification, NotificationKind};
pub use record::{format_short_date, weekday_name, DatedRecord};
pub use report::{Report, ReportKind};
