use crate::maintenance::domain::{
    Aircraft, Component, Forecast, MaintenanceRequirement, PredictionResult, Schedule,
};
use crate::maintenance::policies::{UrgencyPolicy, UsageRatePolicy};
use chrono::{NaiveDate, TimeDelta};

/// PredictionEngine estimates when each maintenance requirement comes due
///
/// This service contains pure business logic: a linear extrapolation of the
/// governing counter at a constant daily rate, or the calendar distance for
/// date-based requirements. It owns no state and never fails.
pub struct PredictionEngine;

impl PredictionEngine {
    /// Predicts every requirement of a component
    ///
    /// # Arguments
    /// * `component` - Component whose requirements are evaluated
    /// * `aircraft` - Carrying aircraft, or `None` for a ground asset
    /// * `reference_date` - Date the forecast is computed against
    ///
    /// # Returns
    /// One PredictionResult per requirement, in requirement order
    pub fn predict(
        component: &Component,
        aircraft: Option<&Aircraft>,
        reference_date: NaiveDate,
    ) -> Vec<PredictionResult> {
        component
            .requirements()
            .iter()
            .map(|requirement| {
                Self::predict_requirement(component, aircraft, requirement, reference_date)
            })
            .collect()
    }

    fn predict_requirement(
        component: &Component,
        aircraft: Option<&Aircraft>,
        requirement: &MaintenanceRequirement,
        reference_date: NaiveDate,
    ) -> PredictionResult {
        let (forecast, estimated_due_date) =
            Self::estimate(component, aircraft, requirement.schedule(), reference_date);
        let action_required = UrgencyPolicy::classify(&forecast, component.lead_time_days());

        PredictionResult::new(
            component.id().to_string(),
            component.name().to_string(),
            aircraft.map(|ac| ac.registration().to_string()),
            requirement.id().to_string(),
            requirement.description().to_string(),
            estimated_due_date,
            forecast,
            action_required,
        )
    }

    fn estimate(
        component: &Component,
        aircraft: Option<&Aircraft>,
        schedule: &Schedule,
        reference_date: NaiveDate,
    ) -> (Forecast, NaiveDate) {
        let next_due = match schedule {
            Schedule::Calendar { next_date, .. } => {
                let days = next_date.signed_duration_since(reference_date).num_days() as f64;
                return (Forecast::Determinate { days }, *next_date);
            }
            Schedule::FlightHours { next_hours, .. }
            | Schedule::OperatingHours { next_hours, .. } => *next_hours,
            Schedule::Cycles { next_cycles, .. } => *next_cycles,
        };

        let kind = schedule.kind();
        let counters = match aircraft {
            Some(ac) => ac.counters(),
            None => component.ground_counters(),
        };
        let current = counters.value_for(kind).unwrap_or_default();
        let remaining = next_due - current;

        let daily_rate = UsageRatePolicy::daily_rate(kind, aircraft);
        if daily_rate > 0.0 {
            let days = remaining / daily_rate;
            (
                Forecast::Determinate { days },
                offset_date(reference_date, days.floor()),
            )
        } else {
            (Forecast::Indeterminate, reference_date)
        }
    }
}

/// Shifts a date by a whole number of days, saturating at the calendar bounds
fn offset_date(date: NaiveDate, days: f64) -> NaiveDate {
    let saturated = if days >= 0.0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    };

    TimeDelta::try_days(days as i64)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(saturated)
}
