//! Forecast read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all forecast data in a presentation-ready format.

use super::prediction_view::PredictionView;

/// Main read model for a forecast report
#[derive(Debug, Clone)]
pub struct ForecastReadModel {
    pub metadata: MetadataView,
    pub summary: SummaryView,
    pub predictions: Vec<PredictionView>,
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataView {
    /// RFC 3339 generation timestamp
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
    /// ISO date the forecast was computed against
    pub reference_date: String,
}

/// View representation of the dashboard counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryView {
    pub aircraft: usize,
    pub installed_components: usize,
    pub ground_assets: usize,
    pub predictions: usize,
    pub immediate: usize,
    pub procure: usize,
    pub monitor: usize,
    pub indeterminate: usize,
}
