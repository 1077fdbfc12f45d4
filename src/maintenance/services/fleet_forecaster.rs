use super::PredictionEngine;
use crate::maintenance::domain::{Component, Fleet, PredictionResult};
use chrono::NaiveDate;

/// A component pointing at an aircraft id that is not in the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedInstallation {
    pub component_id: String,
    pub aircraft_id: String,
}

/// Output of a batch forecast over a whole fleet
#[derive(Debug, Clone, Default)]
pub struct FleetForecast {
    pub predictions: Vec<PredictionResult>,
    pub unresolved: Vec<UnresolvedInstallation>,
}

/// FleetForecaster runs the prediction engine over every component
///
/// The reference date is pinned for the whole batch so that every
/// prediction in a run is comparable.
pub struct FleetForecaster;

impl FleetForecaster {
    pub fn forecast(fleet: &Fleet, reference_date: NaiveDate) -> FleetForecast {
        Self::forecast_with_progress(fleet, reference_date, |_, _, _| {})
    }

    /// Same as [`FleetForecaster::forecast`], invoking `on_component` with
    /// `(done, total, component)` after each component is evaluated.
    pub fn forecast_with_progress<F>(
        fleet: &Fleet,
        reference_date: NaiveDate,
        mut on_component: F,
    ) -> FleetForecast
    where
        F: FnMut(usize, usize, &Component),
    {
        let total = fleet.components().len();
        let mut forecast = FleetForecast::default();

        for (idx, component) in fleet.components().iter().enumerate() {
            let aircraft = fleet.carrier_of(component);

            // Dangling installation ids are forecast as ground assets
            if aircraft.is_none() {
                if let Some(aircraft_id) = component.location().aircraft_id() {
                    forecast.unresolved.push(UnresolvedInstallation {
                        component_id: component.id().to_string(),
                        aircraft_id: aircraft_id.to_string(),
                    });
                }
            }

            forecast
                .predictions
                .extend(PredictionEngine::predict(component, aircraft, reference_date));
            on_component(idx + 1, total, component);
        }

        forecast
    }
}
