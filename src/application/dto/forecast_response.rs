use crate::maintenance::domain::{ForecastSummary, PredictionResult, ReportMetadata};
use crate::maintenance::services::UnresolvedInstallation;

/// ForecastResponse - Response DTO from the fleet forecast use case
///
/// Predictions are already filtered and sorted by urgency; the summary is
/// tallied over that same filtered set.
#[derive(Debug, Clone)]
pub struct ForecastResponse {
    pub metadata: ReportMetadata,
    pub summary: ForecastSummary,
    pub predictions: Vec<PredictionResult>,
    /// Components whose aircraft id did not resolve; forecast as ground assets
    pub unresolved: Vec<UnresolvedInstallation>,
}

impl ForecastResponse {
    pub fn new(
        metadata: ReportMetadata,
        summary: ForecastSummary,
        predictions: Vec<PredictionResult>,
        unresolved: Vec<UnresolvedInstallation>,
    ) -> Self {
        Self {
            metadata,
            summary,
            predictions,
            unresolved,
        }
    }

    /// Whether any reported prediction needs immediate action
    ///
    /// Used to determine the exit code under `--fail-on-immediate`.
    pub fn has_immediate(&self) -> bool {
        self.summary.has_immediate()
    }
}
