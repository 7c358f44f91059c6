//! Attendance CLI command

use clap::Args;

use crate::data::Dataset;
use crate::display::format_attendance_view;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{AttendanceStatus, SchoolMonth};
use crate::services::attendance::{month_view, AttendanceQuery};

/// Arguments for the attendance command
#[derive(Debug, Args)]
pub struct AttendanceArgs {
    /// Month to view (1-12, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to view (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Filter by status (present, absent, leave)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by subject (exact match)
    #[arg(long)]
    pub subject: Option<String>,

    /// Free-text search (date, subject, day, or status)
    #[arg(long)]
    pub search: Option<String>,
}

/// Resolve a (month, year) option pair against the current month
pub fn resolve_month(month: Option<u32>, year: Option<i32>) -> DashboardResult<SchoolMonth> {
    let current = SchoolMonth::current();

    let month_num = month.unwrap_or(current.month);
    if !(1..=12).contains(&month_num) {
        return Err(DashboardError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month_num
        )));
    }

    Ok(SchoolMonth::new(year.unwrap_or(current.year), month_num))
}

/// Parse a status filter string
fn parse_status(s: &str) -> DashboardResult<AttendanceStatus> {
    match s.to_lowercase().as_str() {
        "present" => Ok(AttendanceStatus::Present),
        "absent" => Ok(AttendanceStatus::Absent),
        "leave" => Ok(AttendanceStatus::Leave),
        other => Err(DashboardError::Validation(format!(
            "Unknown status '{}' (expected present, absent, or leave)",
            other
        ))),
    }
}

/// Handle the attendance command
pub fn handle_attendance_command(data: &Dataset, args: AttendanceArgs) -> DashboardResult<()> {
    let month = resolve_month(args.month, args.year)?;

    let mut query = AttendanceQuery::new(month);
    if let Some(status) = args.status.as_deref() {
        query = query.status(parse_status(status)?);
    }
    if let Some(subject) = args.subject {
        query = query.subject(subject);
    }
    if let Some(search) = args.search {
        query = query.search(search);
    }

    let view = month_view(&data.attendance, &query);
    print!("{}", format_attendance_view(&view, month));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("present").unwrap(), AttendanceStatus::Present);
        assert_eq!(parse_status("Leave").unwrap(), AttendanceStatus::Leave);
        assert!(parse_status("tardy").is_err());
    }

    #[test]
    fn test_resolve_month_rejects_out_of_range() {
        assert!(resolve_month(Some(0), Some(2026)).is_err());
        assert!(resolve_month(Some(13), Some(2026)).is_err());
        let month = resolve_month(Some(3), Some(2026)).unwrap();
        assert_eq!(month, SchoolMonth::new(2026, 3));
    }
}
