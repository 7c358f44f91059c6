//! Homework display formatting

use chrono::NaiveDate;

use crate::models::{format_short_date, HomeworkTask, SchoolMonth, TaskStatus};
use crate::services::{HomeworkSummary, MonthView};

/// Format the homework view as a summary block plus a table
///
/// `today` drives the overdue/due-soon annotations next to due dates.
pub fn format_homework_view(
    view: &MonthView<HomeworkTask, HomeworkSummary>,
    month: SchoolMonth,
    today: NaiveDate,
) -> String {
    let mut output = String::new();

    let summary = &view.summary;
    output.push_str(&format!("Homework & Tasks - {}\n", month.title()));
    output.push_str(&format!(
        "{} of {} tasks completed   Pending: {}   Overdue: {}   High Priority: {}\n",
        summary.completed, summary.total, summary.pending, summary.overdue, summary.high_priority
    ));
    output.push_str(&format!(
        "Showing {} of {} tasks\n\n",
        view.rows.len(),
        view.month_total
    ));

    if view.rows.is_empty() {
        output.push_str("No tasks found. Try adjusting your search or filters.\n");
        return output;
    }

    // Calculate column widths
    let title_width = view
        .rows
        .iter()
        .map(|t| t.title.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let subject_width = view
        .rows
        .iter()
        .map(|t| t.subject.len())
        .max()
        .unwrap_or(7)
        .max(7);

    output.push_str(&format!(
        "{:<3}  {:<11}  {:<title_width$}  {:<subject_width$}  {:<12}  {:<8}  {}\n",
        "",
        "ID",
        "Title",
        "Subject",
        "Due Date",
        "Priority",
        "Note",
        title_width = title_width,
        subject_width = subject_width,
    ));
    output.push_str(&format!(
        "{:-<3}  {:-<11}  {:-<title_width$}  {:-<subject_width$}  {:-<12}  {:-<8}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        subject_width = subject_width,
    ));

    for task in &view.rows {
        let check = if task.status == TaskStatus::Completed {
            "[x]"
        } else {
            "[ ]"
        };

        let days_until = task.days_until(today);
        let note = if task.is_overdue(today) {
            "Overdue".to_string()
        } else if task.status == TaskStatus::Pending && (0..=3).contains(&days_until) {
            if days_until == 0 {
                "Due Today".to_string()
            } else {
                format!("{} days left", days_until)
            }
        } else {
            String::new()
        };

        output.push_str(&format!(
            "{}  {:<11}  {:<title_width$}  {:<subject_width$}  {:<12}  {:<8}  {}\n",
            check,
            task.id.to_string(),
            task.title,
            task.subject,
            format_short_date(task.due_on),
            task.priority,
            note,
            title_width = title_width,
            subject_width = subject_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::services::homework::{month_view, HomeworkQuery};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_format_marks_overdue_and_completed() {
        let month = SchoolMonth::new(2026, 8);
        let tasks = vec![
            HomeworkTask::new(
                "Read Chapter 2",
                "History",
                today() - Duration::days(2),
                Priority::Low,
                TaskStatus::Pending,
                None,
            ),
            HomeworkTask::new(
                "Write Essay on Grammar",
                "English",
                today() + Duration::days(1),
                Priority::High,
                TaskStatus::Completed,
                None,
            ),
        ];
        let view = month_view(&tasks, &HomeworkQuery::new(month), today());

        let output = format_homework_view(&view, month, today());
        assert!(output.contains("Overdue"));
        assert!(output.contains("[x]"));
        assert!(output.contains("[ ]"));
    }

    #[test]
    fn test_format_empty_state() {
        let month = SchoolMonth::new(2026, 8);
        let view = month_view(&[], &HomeworkQuery::new(month), today());

        let output = format_homework_view(&view, month, today());
        assert!(output.contains("No tasks found"));
    }
}
