use crate::maintenance::domain::ReportMetadata;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// ReportMetadataGenerator service for stamping forecast reports
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates report metadata with the current timestamp and a unique report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    /// * `reference_date` - Date the forecast was computed against
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        reference_date: NaiveDate,
    ) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
            reference_date,
        )
    }

    /// Generates metadata with the compile-time tool name and version
    pub fn generate_default_metadata(reference_date: NaiveDate) -> ReportMetadata {
        Self::generate_metadata(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            reference_date,
        )
    }
}
