use crate::maintenance::domain::{ActionRequired, PredictionResult};

/// PredictionFilter narrows a forecast to the rows a report asks for
///
/// A prediction is kept when it passes both criteria:
/// - horizon: determinate and due within `within_days` (indeterminate
///   predictions never fall inside a horizon)
/// - actions: its action tier is in the list (an empty list keeps all tiers)
#[derive(Debug, Clone, Default)]
pub struct PredictionFilter {
    within_days: Option<u32>,
    actions: Vec<ActionRequired>,
}

impl PredictionFilter {
    pub fn new(within_days: Option<u32>, actions: Vec<ActionRequired>) -> Self {
        Self {
            within_days,
            actions,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.within_days.is_none() && self.actions.is_empty()
    }

    pub fn matches(&self, prediction: &PredictionResult) -> bool {
        let within_horizon = match self.within_days {
            Some(limit) => {
                !prediction.forecast().is_indeterminate() && prediction.days_remaining() <= limit
            }
            None => true,
        };
        let action_selected =
            self.actions.is_empty() || self.actions.contains(&prediction.action_required());

        within_horizon && action_selected
    }

    pub fn apply(&self, predictions: Vec<PredictionResult>) -> Vec<PredictionResult> {
        if self.is_noop() {
            return predictions;
        }
        predictions.into_iter().filter(|p| self.matches(p)).collect()
    }

    /// Orders predictions by ascending days remaining.
    ///
    /// The sort is stable, so ties keep their fleet order.
    pub fn sort_by_urgency(predictions: &mut [PredictionResult]) {
        predictions.sort_by_key(|p| p.days_remaining());
    }
}
