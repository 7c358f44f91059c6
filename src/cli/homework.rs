//! Homework CLI commands

use clap::{Args, Subcommand};

use crate::data::Dataset;
use crate::display::format_homework_view;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Priority, TaskStatus};
use crate::services::homework::{month_view, toggle_status, HomeworkQuery};

use super::attendance::resolve_month;

/// Homework subcommands
#[derive(Debug, Subcommand)]
pub enum HomeworkCommands {
    /// List homework tasks for a month
    List(HomeworkListArgs),

    /// Toggle a task between pending and completed
    Toggle {
        /// Task id as shown in the list (e.g. hw-1a2b3c4d)
        id: String,
    },
}

/// Arguments for listing homework
#[derive(Debug, Args)]
pub struct HomeworkListArgs {
    /// Month to view (1-12, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to view (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Filter by status (pending, completed)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by subject (exact match)
    #[arg(long)]
    pub subject: Option<String>,

    /// Filter by priority (high, medium, low)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Free-text search (title, subject, description, or date)
    #[arg(long)]
    pub search: Option<String>,
}

fn parse_status(s: &str) -> DashboardResult<TaskStatus> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(TaskStatus::Pending),
        "completed" => Ok(TaskStatus::Completed),
        other => Err(DashboardError::Validation(format!(
            "Unknown status '{}' (expected pending or completed)",
            other
        ))),
    }
}

fn parse_priority(s: &str) -> DashboardResult<Priority> {
    match s.to_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        other => Err(DashboardError::Validation(format!(
            "Unknown priority '{}' (expected high, medium, or low)",
            other
        ))),
    }
}

/// Handle a homework subcommand
///
/// The dataset is regenerated every run, so a toggle only affects this
/// invocation; the updated view is printed so the change is visible.
pub fn handle_homework_command(data: &Dataset, cmd: HomeworkCommands) -> DashboardResult<()> {
    let today = chrono::Local::now().date_naive();

    match cmd {
        HomeworkCommands::List(args) => {
            let month = resolve_month(args.month, args.year)?;

            let mut query = HomeworkQuery::new(month);
            if let Some(status) = args.status.as_deref() {
                query = query.status(parse_status(status)?);
            }
            if let Some(subject) = args.subject {
                query = query.subject(subject);
            }
            if let Some(priority) = args.priority.as_deref() {
                query = query.priority(parse_priority(priority)?);
            }
            if let Some(search) = args.search {
                query = query.search(search);
            }

            let view = month_view(&data.homework, &query, today);
            print!("{}", format_homework_view(&view, month, today));
        }
        HomeworkCommands::Toggle { id } => {
            // Match against the short display form or the full UUID
            let target = data
                .homework
                .iter()
                .find(|t| t.id.to_string() == id || t.id.as_uuid().to_string() == id);

            match target {
                Some(task) => {
                    let task_id = task.id;
                    let updated = toggle_status(&data.homework, task_id);
                    if let Some(toggled) = updated.iter().find(|t| t.id == task_id) {
                        println!(
                            "'{}' is now {}.",
                            toggled.title,
                            toggled.status.to_string().to_lowercase()
                        );
                    }
                }
                None => {
                    // Unknown ids are a no-op, not a failure
                    println!("No task found with id {}; nothing to do.", id);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("pending").unwrap(), TaskStatus::Pending);
        assert_eq!(parse_status("Completed").unwrap(), TaskStatus::Completed);
        assert!(parse_status("done").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert_eq!(parse_priority("LOW").unwrap(), Priority::Low);
        assert!(parse_priority("urgent").is_err());
    }
}
