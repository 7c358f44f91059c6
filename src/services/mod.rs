//! Business logic layer
//!
//! The month-scoped aggregation engine behind every dashboard page:
//! filtering (month + categorical + free-text search), summary statistics,
//! the homework status toggle, and the home page rollups. Everything here
//! is a pure function over in-memory collections; nothing mutates its
//! input.

pub mod attendance;
pub mod dashboard;
pub mod filter;
pub mod grades;
pub mod homework;
pub mod reports;

pub use attendance::{AttendanceQuery, AttendanceSummary};
pub use dashboard::HomeSnapshot;
pub use filter::{available_years, matches_search, MonthView, Selection};
pub use grades::{GradeQuery, GradeSummary, SubjectAverage};
pub use homework::{toggle_status, HomeworkQuery, HomeworkSummary};
pub use reports::ReportQuery;
