//! Grades display formatting

use crate::models::{format_short_date, GradeEntry, SchoolMonth};
use crate::services::{GradeSummary, MonthView};

/// Format the grades view as a summary block plus a table
pub fn format_grades_view(
    view: &MonthView<GradeEntry, GradeSummary>,
    month: SchoolMonth,
) -> String {
    let mut output = String::new();

    let summary = &view.summary;
    output.push_str(&format!("Grades - {}\n", month.title()));
    output.push_str(&format!(
        "Average: {}%   Marks: {}/{}   Assessments: {}\n",
        summary.average_percentage, summary.marks_earned, summary.marks_possible, summary.count
    ));
    output.push_str(&format!(
        "Showing {} of {} grades\n\n",
        view.rows.len(),
        view.month_total
    ));

    if view.rows.is_empty() {
        output.push_str("No grades found. Try adjusting your search or filters.\n");
        return output;
    }

    // Calculate column widths
    let subject_width = view
        .rows
        .iter()
        .map(|g| g.subject.len())
        .max()
        .unwrap_or(7)
        .max(7);
    let assessment_width = view
        .rows
        .iter()
        .map(|g| g.assessment.len())
        .max()
        .unwrap_or(10)
        .max(10);

    output.push_str(&format!(
        "{:<12}  {:<subject_width$}  {:<assessment_width$}  {:>8}  {:>5}\n",
        "Date",
        "Subject",
        "Assessment",
        "Marks",
        "%",
        subject_width = subject_width,
        assessment_width = assessment_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<subject_width$}  {:-<assessment_width$}  {:->8}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        subject_width = subject_width,
        assessment_width = assessment_width,
    ));

    for grade in &view.rows {
        output.push_str(&format!(
            "{:<12}  {:<subject_width$}  {:<assessment_width$}  {:>8}  {:>4}%\n",
            format_short_date(grade.date),
            grade.subject,
            grade.assessment,
            grade.marks_display(),
            grade.percentage,
            subject_width = subject_width,
            assessment_width = assessment_width,
        ));
    }

    output
}
