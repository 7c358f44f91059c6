//! Export CLI command

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::data::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::export::{
    export_attendance_csv, export_full_json, export_full_yaml, export_grades_csv,
    export_homework_csv,
};

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Per-record rows (requires --kind)
    Csv,
    /// Full dataset document
    Json,
    /// Full dataset document, human-readable
    Yaml,
}

/// Which record collection a CSV export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Attendance,
    Grades,
    Homework,
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Record kind for CSV exports
    #[arg(short, long, value_enum)]
    pub kind: Option<ExportKind>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(data: &Dataset, args: ExportArgs) -> DashboardResult<()> {
    let mut writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| DashboardError::Export(format!("Cannot create {:?}: {}", path, e)))?,
        ),
        None => Box::new(io::stdout()),
    };

    match args.format {
        ExportFormat::Csv => {
            let kind = args.kind.ok_or_else(|| {
                DashboardError::Validation("CSV export requires --kind".to_string())
            })?;
            match kind {
                ExportKind::Attendance => export_attendance_csv(&data.attendance, &mut writer)?,
                ExportKind::Grades => export_grades_csv(&data.grades, &mut writer)?,
                ExportKind::Homework => export_homework_csv(&data.homework, &mut writer)?,
            }
        }
        ExportFormat::Json => export_full_json(data, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(data, &mut writer)?,
    }

    if let Some(path) = &args.out {
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}
