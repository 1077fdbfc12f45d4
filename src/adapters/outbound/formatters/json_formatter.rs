use crate::application::read_models::{
    ForecastReadModel, MetadataView, PredictionView, SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    predictions: Vec<Prediction<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    report_id: &'a str,
    reference_date: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    aircraft: usize,
    installed_components: usize,
    ground_assets: usize,
    predictions: usize,
    immediate: usize,
    procure: usize,
    monitor: usize,
    indeterminate: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Prediction<'a> {
    component_id: &'a str,
    component_name: &'a str,
    aircraft_registration: &'a str,
    requirement_id: &'a str,
    requirement_description: &'a str,
    estimated_due_date: &'a str,
    days_remaining: u32,
    action_required: &'a str,
    indeterminate: bool,
}

/// JsonFormatter adapter for machine-readable forecast reports
///
/// Prediction rows keep the field names dashboards already consume
/// (`componentId`, `daysRemaining`, ...), with `requirementId` and
/// `indeterminate` added.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(metadata: &MetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &metadata.timestamp,
            tool: Tool {
                name: &metadata.tool_name,
                version: &metadata.tool_version,
            },
            report_id: &metadata.report_id,
            reference_date: &metadata.reference_date,
        }
    }

    fn build_summary(summary: &SummaryView) -> Summary {
        Summary {
            aircraft: summary.aircraft,
            installed_components: summary.installed_components,
            ground_assets: summary.ground_assets,
            predictions: summary.predictions,
            immediate: summary.immediate,
            procure: summary.procure,
            monitor: summary.monitor,
            indeterminate: summary.indeterminate,
        }
    }

    fn build_prediction(view: &PredictionView) -> Prediction<'_> {
        Prediction {
            component_id: &view.component_id,
            component_name: &view.component_name,
            aircraft_registration: &view.aircraft_registration,
            requirement_id: &view.requirement_id,
            requirement_description: &view.requirement_description,
            estimated_due_date: &view.estimated_due_date,
            days_remaining: view.days_remaining,
            action_required: &view.action_required,
            indeterminate: view.indeterminate,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ForecastReadModel) -> Result<String> {
        let report = Report {
            metadata: Self::build_metadata(&model.metadata),
            summary: Self::build_summary(&model.summary),
            predictions: model.predictions.iter().map(Self::build_prediction).collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
