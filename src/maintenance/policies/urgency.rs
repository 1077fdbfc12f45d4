use crate::maintenance::domain::{ActionRequired, Forecast};

/// Anything due within this many days needs action now
pub const IMMEDIATE_THRESHOLD_DAYS: f64 = 7.0;

/// UrgencyPolicy for classifying forecasts into action tiers
///
/// Rules, evaluated on the raw (unclamped) day count:
/// 1. `Immediate` when due within [`IMMEDIATE_THRESHOLD_DAYS`]
/// 2. `Procure` when due within the component's procurement lead time
/// 3. `Monitor` otherwise, which includes every indeterminate forecast
pub struct UrgencyPolicy;

impl UrgencyPolicy {
    pub fn classify(forecast: &Forecast, lead_time_days: f64) -> ActionRequired {
        let days = forecast.raw_days();

        if days <= IMMEDIATE_THRESHOLD_DAYS {
            ActionRequired::Immediate
        } else if days <= lead_time_days {
            ActionRequired::Procure
        } else {
            ActionRequired::Monitor
        }
    }
}
