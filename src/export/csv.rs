//! CSV Export functionality
//!
//! Exports attendance, grade, and homework records to CSV format,
//! one spreadsheet-compatible row per record.

use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{AttendanceEntry, GradeEntry, HomeworkTask};

/// Export attendance entries to CSV
pub fn export_attendance_csv<W: Write>(
    records: &[AttendanceEntry],
    writer: &mut W,
) -> DashboardResult<()> {
    writeln!(writer, "ID,Date,Day,Subject,Status")
        .map_err(|e| DashboardError::Export(e.to_string()))?;

    for entry in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            entry.id,
            entry.date,
            entry.date.format("%A"),
            escape_csv(entry.subject.as_deref().unwrap_or("")),
            entry.status
        )
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export grades to CSV
pub fn export_grades_csv<W: Write>(records: &[GradeEntry], writer: &mut W) -> DashboardResult<()> {
    writeln!(
        writer,
        "ID,Date,Subject,Assessment,Marks,Total Marks,Percentage,Comments"
    )
    .map_err(|e| DashboardError::Export(e.to_string()))?;

    for grade in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            grade.id,
            grade.date,
            escape_csv(&grade.subject),
            escape_csv(&grade.assessment),
            grade.marks,
            grade.total_marks,
            grade.percentage,
            escape_csv(grade.comments.as_deref().unwrap_or(""))
        )
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export homework tasks to CSV
pub fn export_homework_csv<W: Write>(
    tasks: &[HomeworkTask],
    writer: &mut W,
) -> DashboardResult<()> {
    writeln!(writer, "ID,Due Date,Title,Subject,Priority,Status,Description")
        .map_err(|e| DashboardError::Export(e.to_string()))?;

    for task in tasks {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            task.id,
            task.due_on,
            escape_csv(&task.title),
            escape_csv(&task.subject),
            task.priority,
            task.status,
            escape_csv(task.description.as_deref().unwrap_or(""))
        )
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a field for CSV output
///
/// Wraps fields containing commas, quotes, or newlines in quotes and
/// doubles embedded quotes.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, Priority, TaskStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_attendance_csv_header_and_rows() {
        let records = vec![AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            AttendanceStatus::Present,
            Some("Mathematics".to_string()),
        )];

        let mut buffer = Vec::new();
        export_attendance_csv(&records, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("ID,Date,Day,Subject,Status"));
        let row = lines.next().unwrap();
        assert!(row.contains("2026-08-03"));
        assert!(row.contains("Monday"));
        assert!(row.contains("Present"));
    }

    #[test]
    fn test_homework_csv_quotes_commas() {
        let tasks = vec![HomeworkTask::new(
            "Read, then summarize",
            "English",
            NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            Priority::Low,
            TaskStatus::Pending,
            None,
        )];

        let mut buffer = Vec::new();
        export_homework_csv(&tasks, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"Read, then summarize\""));
    }
}
