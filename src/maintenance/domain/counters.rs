use super::requirement::RequirementKind;
use crate::shared::error::SkyguardError;
use crate::shared::Result;

/// Rejects counter values that cannot take part in a forecast.
pub fn validate_counter(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(SkyguardError::InvalidCounter { field, value }.into());
    }
    Ok(value)
}

/// Absolute usage counters.
///
/// Aircraft carry their running totals here; ground components carry the
/// values last entered by hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsageCounters {
    flight_hours: f64,
    operating_hours: f64,
    cycles: f64,
}

impl UsageCounters {
    pub fn new(flight_hours: f64, operating_hours: f64, cycles: f64) -> Result<Self> {
        Ok(Self {
            flight_hours: validate_counter("flight hours", flight_hours)?,
            operating_hours: validate_counter("operating hours", operating_hours)?,
            cycles: validate_counter("cycles", cycles)?,
        })
    }

    pub fn flight_hours(&self) -> f64 {
        self.flight_hours
    }

    pub fn operating_hours(&self) -> f64 {
        self.operating_hours
    }

    pub fn cycles(&self) -> f64 {
        self.cycles
    }

    /// Counter governing a requirement kind; calendar requirements have none.
    pub fn value_for(&self, kind: RequirementKind) -> Option<f64> {
        match kind {
            RequirementKind::FlightHours => Some(self.flight_hours),
            RequirementKind::OperatingHours => Some(self.operating_hours),
            RequirementKind::Cycles => Some(self.cycles),
            RequirementKind::Calendar => None,
        }
    }
}
