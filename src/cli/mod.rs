//! CLI command handling
//!
//! Each dashboard page has a matching subcommand; handlers build a query
//! from the flags, run it through the services layer, and print via the
//! display formatters.

pub mod attendance;
pub mod export;
pub mod grades;
pub mod homework;
pub mod reports;

pub use attendance::{handle_attendance_command, AttendanceArgs};
pub use export::{handle_export_command, ExportArgs};
pub use grades::{handle_grades_command, GradesArgs};
pub use homework::{handle_homework_command, HomeworkCommands};
pub use reports::{handle_reports_command, ReportsArgs};
