//! Reports CLI command

use clap::Args;

use crate::data::Dataset;
use crate::display::format_report_list;
use crate::error::{DashboardError, DashboardResult};
use crate::models::ReportKind;
use crate::services::reports::{filtered, ReportQuery};

/// Arguments for the reports command
#[derive(Debug, Args)]
pub struct ReportsArgs {
    /// Filter by report type (academic, behavioral, attendance, progress)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Free-text search over title and content
    #[arg(long)]
    pub search: Option<String>,
}

fn parse_kind(s: &str) -> DashboardResult<ReportKind> {
    match s.to_lowercase().as_str() {
        "academic" => Ok(ReportKind::Academic),
        "behavioral" => Ok(ReportKind::Behavioral),
        "attendance" => Ok(ReportKind::Attendance),
        "progress" => Ok(ReportKind::Progress),
        other => Err(DashboardError::Validation(format!(
            "Unknown report type '{}' (expected academic, behavioral, attendance, or progress)",
            other
        ))),
    }
}

/// Handle the reports command
pub fn handle_reports_command(data: &Dataset, args: ReportsArgs) -> DashboardResult<()> {
    let mut query = ReportQuery::new();
    if let Some(kind) = args.kind.as_deref() {
        query = query.kind(parse_kind(kind)?);
    }
    if let Some(search) = args.search {
        query = query.search(search);
    }

    let rows = filtered(&data.reports, &query);
    print!("{}", format_report_list(&rows));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("academic").unwrap(), ReportKind::Academic);
        assert_eq!(parse_kind("Progress").unwrap(), ReportKind::Progress);
        assert!(parse_kind("disciplinary").is_err());
    }
}
