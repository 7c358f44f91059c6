//! Reports display formatting

use crate::models::{format_short_date, Report};

/// Format a list of reports with their content
pub fn format_report_list(reports: &[Report]) -> String {
    if reports.is_empty() {
        return "No reports found. Try adjusting your search or filters.\n".to_string();
    }

    let mut output = String::new();

    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} [{}] - generated {}\n",
            report.title,
            report.kind,
            format_short_date(report.generated_on)
        ));
        output.push_str(&format!("  {}\n", report.content));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportKind;
    use chrono::NaiveDate;

    #[test]
    fn test_format_report_list() {
        let reports = vec![Report::new(
            "Attendance Report",
            ReportKind::Attendance,
            NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
            "Current attendance: 94%.",
        )];

        let output = format_report_list(&reports);
        assert!(output.contains("Attendance Report [Attendance]"));
        assert!(output.contains("Aug 2, 2026"));
        assert!(output.contains("94%"));
    }

    #[test]
    fn test_format_empty_state() {
        assert!(format_report_list(&[]).contains("No reports found"));
    }
}
