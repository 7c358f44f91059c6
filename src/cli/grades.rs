//! Grades CLI command

use clap::Args;

use crate::data::Dataset;
use crate::display::format_grades_view;
use crate::error::DashboardResult;
use crate::services::grades::{month_view, subject_averages, GradeQuery};

use super::attendance::resolve_month;

/// Arguments for the grades command
#[derive(Debug, Args)]
pub struct GradesArgs {
    /// Month to view (1-12, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to view (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Filter by subject (exact match)
    #[arg(long)]
    pub subject: Option<String>,

    /// Free-text search (subject, assessment, date, or comments)
    #[arg(long)]
    pub search: Option<String>,

    /// Also print per-subject averages for the month
    #[arg(long)]
    pub averages: bool,
}

/// Handle the grades command
pub fn handle_grades_command(data: &Dataset, args: GradesArgs) -> DashboardResult<()> {
    let month = resolve_month(args.month, args.year)?;

    let mut query = GradeQuery::new(month);
    if let Some(subject) = args.subject {
        query = query.subject(subject);
    }
    if let Some(search) = args.search {
        query = query.search(search);
    }

    let view = month_view(&data.grades, &query);
    print!("{}", format_grades_view(&view, month));

    if args.averages {
        println!();
        println!("Subject averages for {}:", month.title());
        for average in subject_averages(&data.grades, month) {
            println!("  {:<20} {:>3}%", average.subject, average.average);
        }
    }

    Ok(())
}
