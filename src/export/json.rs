//! JSON Export functionality
//!
//! Exports the in-memory dataset to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::data::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{AttendanceEntry, GradeEntry, HomeworkTask, Report};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dataset export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All attendance entries
    pub attendance: Vec<AttendanceEntry>,

    /// All grades
    pub grades: Vec<GradeEntry>,

    /// All homework tasks
    pub homework: Vec<HomeworkTask>,

    /// All reports
    pub reports: Vec<Report>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of attendance entries
    pub attendance_count: usize,

    /// Total number of grades
    pub grade_count: usize,

    /// Total number of homework tasks
    pub homework_count: usize,

    /// Total number of reports
    pub report_count: usize,
}

impl FullExport {
    /// Build an export document from the dataset
    pub fn from_dataset(data: &Dataset) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            attendance: data.attendance.clone(),
            grades: data.grades.clone(),
            homework: data.homework.clone(),
            reports: data.reports.clone(),
            metadata: ExportMetadata {
                attendance_count: data.attendance.len(),
                grade_count: data.grades.len(),
                homework_count: data.homework.len(),
                report_count: data.reports.len(),
            },
        }
    }
}

/// Export the full dataset to JSON format
pub fn export_full_json<W: Write>(data: &Dataset, writer: &mut W) -> DashboardResult<()> {
    let export = FullExport::from_dataset(data);

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_full_export_metadata_counts() {
        let data = Dataset::generate(fixed_today(), 3);
        let export = FullExport::from_dataset(&data);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.attendance_count, data.attendance.len());
        assert_eq!(export.metadata.homework_count, data.homework.len());
    }

    #[test]
    fn test_json_round_trip() {
        let data = Dataset::generate(fixed_today(), 3);

        let mut buffer = Vec::new();
        export_full_json(&data, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.grades.len(), data.grades.len());
        assert_eq!(parsed.metadata.grade_count, data.grades.len());
    }
}
