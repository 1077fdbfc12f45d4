use super::fleet::Fleet;
use super::prediction::{ActionRequired, PredictionResult};

/// Dashboard figures for a forecast run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastSummary {
    pub aircraft: usize,
    pub installed_components: usize,
    pub ground_assets: usize,
    pub predictions: usize,
    pub immediate: usize,
    pub procure: usize,
    pub monitor: usize,
    pub indeterminate: usize,
}

impl ForecastSummary {
    /// Counts fleet assets and tallies the (already filtered) predictions.
    ///
    /// A component whose aircraft id does not resolve counts as a ground asset,
    /// matching how it is forecast.
    pub fn tally(fleet: &Fleet, predictions: &[PredictionResult]) -> Self {
        let installed_components = fleet
            .components()
            .iter()
            .filter(|c| fleet.carrier_of(c).is_some())
            .count();

        let mut summary = Self {
            aircraft: fleet.aircraft().len(),
            installed_components,
            ground_assets: fleet.components().len() - installed_components,
            predictions: predictions.len(),
            ..Self::default()
        };

        for prediction in predictions {
            match prediction.action_required() {
                ActionRequired::Immediate => summary.immediate += 1,
                ActionRequired::Procure => summary.procure += 1,
                ActionRequired::Monitor => summary.monitor += 1,
            }
            if prediction.forecast().is_indeterminate() {
                summary.indeterminate += 1;
            }
        }

        summary
    }

    pub fn has_immediate(&self) -> bool {
        self.immediate > 0
    }
}
