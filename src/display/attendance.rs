//! Attendance display formatting

use crate::models::{format_short_date, weekday_name, AttendanceEntry, SchoolMonth};
use crate::services::{AttendanceSummary, MonthView};

/// Format the attendance view as a summary block plus a table
pub fn format_attendance_view(
    view: &MonthView<AttendanceEntry, AttendanceSummary>,
    month: SchoolMonth,
) -> String {
    let mut output = String::new();

    let summary = &view.summary;
    output.push_str(&format!("Attendance - {}\n", month.title()));
    output.push_str(&format!(
        "Overall: {}%   Present: {}   Absent: {}   Leave: {}\n",
        summary.percentage, summary.present, summary.absent, summary.leave
    ));
    output.push_str(&format!(
        "Showing {} of {} records\n\n",
        view.rows.len(),
        view.month_total
    ));

    if view.rows.is_empty() {
        output.push_str("No records found. Try adjusting your search or filters.\n");
        return output;
    }

    // Calculate column widths
    let subject_width = view
        .rows
        .iter()
        .map(|r| r.subject.as_deref().unwrap_or("N/A").len())
        .max()
        .unwrap_or(7)
        .max(7);

    output.push_str(&format!(
        "{:<12}  {:<9}  {:<subject_width$}  {}\n",
        "Date",
        "Day",
        "Subject",
        "Status",
        subject_width = subject_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<9}  {:-<subject_width$}  {:-<8}\n",
        "",
        "",
        "",
        "",
        subject_width = subject_width,
    ));

    for entry in &view.rows {
        output.push_str(&format!(
            "{:<12}  {:<9}  {:<subject_width$}  {}\n",
            format_short_date(entry.date),
            weekday_name(entry.date),
            entry.subject.as_deref().unwrap_or("N/A"),
            entry.status,
            subject_width = subject_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use crate::services::attendance::{month_view, AttendanceQuery};
    use chrono::NaiveDate;

    #[test]
    fn test_format_includes_summary_and_rows() {
        let records = vec![AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            AttendanceStatus::Present,
            Some("Mathematics".to_string()),
        )];
        let month = SchoolMonth::new(2026, 8);
        let view = month_view(&records, &AttendanceQuery::new(month));

        let output = format_attendance_view(&view, month);
        assert!(output.contains("Attendance - August 2026"));
        assert!(output.contains("Overall: 100%"));
        assert!(output.contains("Mathematics"));
        assert!(output.contains("Monday"));
    }

    #[test]
    fn test_format_empty_state() {
        let month = SchoolMonth::new(2026, 8);
        let view = month_view(&[], &AttendanceQuery::new(month));

        let output = format_attendance_view(&view, month);
        assert!(output.contains("No records found"));
    }
}
