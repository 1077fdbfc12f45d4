//! Builder for constructing ForecastReadModel from domain objects

use super::forecast_read_model::{ForecastReadModel, MetadataView, SummaryView};
use super::prediction_view::{PredictionView, STORAGE_LABEL};
use crate::application::dto::ForecastResponse;
use crate::maintenance::domain::{ForecastSummary, PredictionResult, ReportMetadata};

/// Builder for constructing ForecastReadModel from a forecast response
pub struct ForecastReadModelBuilder;

impl ForecastReadModelBuilder {
    /// Builds a ForecastReadModel from the use case response
    pub fn build(response: &ForecastResponse) -> ForecastReadModel {
        ForecastReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: Self::build_summary(&response.summary),
            predictions: response
                .predictions
                .iter()
                .map(Self::build_prediction)
                .collect(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> MetadataView {
        MetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
            reference_date: metadata.reference_date().to_string(),
        }
    }

    fn build_summary(summary: &ForecastSummary) -> SummaryView {
        SummaryView {
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

    /// Flattens a prediction, substituting the storage label for ground assets
    fn build_prediction(prediction: &PredictionResult) -> PredictionView {
        PredictionView {
            component_id: prediction.component_id().to_string(),
            component_name: prediction.component_name().to_string(),
            aircraft_registration: prediction
                .aircraft_registration()
                .unwrap_or(STORAGE_LABEL)
                .to_string(),
            requirement_id: prediction.requirement_id().to_string(),
            requirement_description: prediction.requirement_description().to_string(),
            estimated_due_date: prediction.estimated_due_date().format("%Y-%m-%d").to_string(),
            days_remaining: prediction.days_remaining(),
            action_required: prediction.action_required().to_string(),
            indeterminate: prediction.forecast().is_indeterminate(),
        }
    }
}
