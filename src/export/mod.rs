//! Export module for Studesk
//!
//! Provides dataset export functionality in multiple formats:
//! - CSV: per-record rows (spreadsheet-compatible)
//! - JSON: machine-readable full dataset export
//! - YAML: human-readable full dataset export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_attendance_csv, export_grades_csv, export_homework_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
