use chrono::NaiveDate;

/// ReportMetadata value object describing one forecast run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
    reference_date: NaiveDate,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        report_id: String,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            report_id,
            reference_date,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    /// Date every prediction of the run was computed against
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let reference_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let metadata = ReportMetadata::new(
            "2024-06-01T08:00:00Z".to_string(),
            "skyguard".to_string(),
            "0.4.0".to_string(),
            "urn:uuid:12345".to_string(),
            reference_date,
        );

        assert_eq!(metadata.timestamp(), "2024-06-01T08:00:00Z");
        assert_eq!(metadata.tool_name(), "skyguard");
        assert_eq!(metadata.tool_version(), "0.4.0");
        assert_eq!(metadata.report_id(), "urn:uuid:12345");
        assert_eq!(metadata.reference_date(), reference_date);
    }
}
