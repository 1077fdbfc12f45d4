use crate::application::read_models::{
    ForecastReadModel, MetadataView, PredictionView, SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for prediction rows
const TABLE_HEADER: &str =
    "| Component | Aircraft | Requirement | Estimated Due Date | Days Remaining | Action |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|-----------|----------|-------------|--------------------|----------------|--------|\n";

/// MarkdownFormatter adapter for human-readable forecast reports
///
/// Renders a header, the fleet summary and one table of predictions in the
/// order they arrive (already sorted by urgency).
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn action_badge(action: &str) -> String {
        match action {
            "Immediate" => "🔴 Immediate".to_string(),
            "Procure" => "🟠 Procure".to_string(),
            "Monitor" => "🟢 Monitor".to_string(),
            other => Self::escape_markdown_table_cell(other),
        }
    }

    /// Countdown and due-date cells for a row
    ///
    /// Rows beyond the countdown threshold carry no meaningful day count:
    /// far-off calendar items read "Calendar Only", rows without a usage
    /// rate read "No usage data".
    fn countdown_cells(prediction: &PredictionView) -> (String, String) {
        if prediction.indeterminate {
            ("N/A".to_string(), "No usage data".to_string())
        } else if !prediction.has_countdown() {
            (
                prediction.estimated_due_date.clone(),
                "Calendar Only".to_string(),
            )
        } else {
            (
                prediction.estimated_due_date.clone(),
                prediction.days_remaining.to_string(),
            )
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &MetadataView) {
        output.push_str("# Maintenance Forecast Report\n\n");
        output.push_str(&format!(
            "- **Reference date:** {}\n",
            metadata.reference_date
        ));
        output.push_str(&format!("- **Generated:** {}\n", metadata.timestamp));
        output.push_str(&format!(
            "- **Tool:** {} {}\n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!("- **Report ID:** {}\n\n", metadata.report_id));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Fleet Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");

        let rows = [
            ("Aircraft", summary.aircraft),
            ("Installed components", summary.installed_components),
            ("Ground assets", summary.ground_assets),
            ("Predictions", summary.predictions),
            ("Immediate", summary.immediate),
            ("Procure", summary.procure),
            ("Monitor", summary.monitor),
            ("Without usage data", summary.indeterminate),
        ];
        for (label, count) in rows {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }
        output.push('\n');

        if summary.immediate > 0 {
            output.push_str(&format!(
                "### ⚠️Warning {} {} require immediate action.\n\n",
                summary.immediate,
                if summary.immediate == 1 {
                    "requirement"
                } else {
                    "requirements"
                }
            ));
        }
    }

    fn render_predictions(&self, output: &mut String, predictions: &[PredictionView]) {
        output.push_str("## Maintenance Predictions\n\n");

        if predictions.is_empty() {
            output.push_str("*No predictions match the selected filters*\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for prediction in predictions {
            let (due_date, countdown) = Self::countdown_cells(prediction);
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&prediction.component_name),
                Self::escape_markdown_table_cell(&prediction.aircraft_registration),
                Self::escape_markdown_table_cell(&prediction.requirement_description),
                due_date,
                countdown,
                Self::action_badge(&prediction.action_required)
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ForecastReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_summary(&mut output, &model.summary);
        self.render_predictions(&mut output, &model.predictions);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> MetadataView {
        MetadataView {
            timestamp: "2024-06-01T08:00:00+00:00".to_string(),
            tool_name: "skyguard".to_string(),
            tool_version: "0.4.0".to_string(),
            report_id: "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
            reference_date: "2024-06-01".to_string(),
        }
    }

    fn row(name: &str, days_remaining: u32, action: &str, indeterminate: bool) -> PredictionView {
        PredictionView {
            component_id: name.to_lowercase(),
            component_name: name.to_string(),
            aircraft_registration: "I-MAUR".to_string(),
            requirement_id: "req".to_string(),
            requirement_description: format!("{} inspection", name),
            estimated_due_date: "2024-07-01".to_string(),
            days_remaining,
            action_required: action.to_string(),
            indeterminate,
        }
    }

    fn model(predictions: Vec<PredictionView>) -> ForecastReadModel {
        let immediate = predictions
            .iter()
            .filter(|p| p.action_required == "Immediate")
            .count();
        ForecastReadModel {
            metadata: metadata(),
            summary: SummaryView {
                predictions: predictions.len(),
                immediate,
                ..SummaryView::default()
            },
            predictions,
        }
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_section_ordering() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![row("Propeller", 30, "Procure", false)]))
            .unwrap();

        let header = output.find("# Maintenance Forecast Report").unwrap();
        let summary = output.find("## Fleet Summary").unwrap();
        let predictions = output.find("## Maintenance Predictions").unwrap();
        assert!(header < summary && summary < predictions);
        assert!(output.contains("- **Reference date:** 2024-06-01"));
    }

    #[test]
    fn test_format_countdown_row() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![row("Propeller", 30, "Procure", false)]))
            .unwrap();

        assert!(output.contains(
            "| Propeller | I-MAUR | Propeller inspection | 2024-07-01 | 30 | 🟠 Procure |"
        ));
    }

    #[test]
    fn test_format_indeterminate_row() {
        let mut spare = row("Alternator", 9999, "Monitor", true);
        spare.aircraft_registration = "Storage".to_string();

        let output = MarkdownFormatter::new().format(&model(vec![spare])).unwrap();

        assert!(output.contains("| Alternator | Storage | Alternator inspection | N/A | No usage data | 🟢 Monitor |"));
    }

    #[test]
    fn test_format_far_calendar_row() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![row("Airframe", 3650, "Monitor", false)]))
            .unwrap();

        assert!(output.contains("| 2024-07-01 | Calendar Only |"));
    }

    #[test]
    fn test_format_immediate_warning() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![row("ELT", 0, "Immediate", false)]))
            .unwrap();

        assert!(output.contains("### ⚠️Warning 1 requirement require immediate action."));
        assert!(output.contains("🔴 Immediate"));
    }

    #[test]
    fn test_format_without_immediate_has_no_warning() {
        let output = MarkdownFormatter::new()
            .format(&model(vec![row("Propeller", 30, "Procure", false)]))
            .unwrap();

        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_format_empty_predictions() {
        let output = MarkdownFormatter::new().format(&model(vec![])).unwrap();

        assert!(output.contains("*No predictions match the selected filters*"));
        assert!(!output.contains(TABLE_HEADER));
    }

    #[test]
    fn test_format_escapes_pipes_in_descriptions() {
        let mut tricky = row("Gear", 10, "Monitor", false);
        tricky.requirement_description = "Left | right".to_string();

        let output = MarkdownFormatter::new().format(&model(vec![tricky])).unwrap();

        assert!(output.contains("Left \\| right"));
    }
}
