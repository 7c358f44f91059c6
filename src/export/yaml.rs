//! YAML Export functionality
//!
//! Exports the dataset to YAML format for human-readable inspection.

use std::io::Write;

use crate::data::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::export::json::FullExport;

/// Export the full dataset to YAML format
pub fn export_full_yaml<W: Write>(data: &Dataset, writer: &mut W) -> DashboardResult<()> {
    let export = FullExport::from_dataset(data);

    // Add a header comment
    writeln!(writer, "# Studesk Dataset Export")
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DashboardError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export).map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export_has_header_and_sections() {
        let data = Dataset::generate(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(), 3);

        let mut buffer = Vec::new();
        export_full_yaml(&data, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# Studesk Dataset Export"));
        assert!(output.contains("schema_version:"));
        assert!(output.contains("homework:"));
    }
}
