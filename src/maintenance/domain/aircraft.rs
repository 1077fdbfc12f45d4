use super::counters::{validate_counter, UsageCounters};
use crate::shared::Result;

/// Operational state of an aircraft. Informational only for forecasting.
///
/// Codes outside A/R/M/I (older snapshots use `EFF` and `PROG`) are kept
/// verbatim in [`AircraftStatus::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AircraftStatus {
    Active,
    Repair,
    Maintenance,
    Inefficient,
    Other(String),
}

impl AircraftStatus {
    pub fn code(&self) -> &str {
        match self {
            AircraftStatus::Active => "A",
            AircraftStatus::Repair => "R",
            AircraftStatus::Maintenance => "M",
            AircraftStatus::Inefficient => "I",
            AircraftStatus::Other(code) => code.as_str(),
        }
    }
}

impl From<&str> for AircraftStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "A" | "ACTIVE" => AircraftStatus::Active,
            "R" | "REPAIR" => AircraftStatus::Repair,
            "M" | "MAINTENANCE" => AircraftStatus::Maintenance,
            "I" | "INEFFICIENT" => AircraftStatus::Inefficient,
            _ => AircraftStatus::Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for AircraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Average monthly utilization used to project counters forward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UtilizationRates {
    avg_monthly_fh: f64,
    avg_monthly_cycles: f64,
}

impl UtilizationRates {
    pub fn new(avg_monthly_fh: f64, avg_monthly_cycles: f64) -> Result<Self> {
        Ok(Self {
            avg_monthly_fh: validate_counter("average monthly flight hours", avg_monthly_fh)?,
            avg_monthly_cycles: validate_counter("average monthly cycles", avg_monthly_cycles)?,
        })
    }

    pub fn avg_monthly_fh(&self) -> f64 {
        self.avg_monthly_fh
    }

    pub fn avg_monthly_cycles(&self) -> f64 {
        self.avg_monthly_cycles
    }
}

/// A flying asset with absolute usage counters and consumption rates
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    id: String,
    registration: String,
    model: String,
    status: AircraftStatus,
    counters: UsageCounters,
    rates: UtilizationRates,
}

impl Aircraft {
    pub fn new(
        id: String,
        registration: String,
        model: String,
        status: AircraftStatus,
        counters: UsageCounters,
        rates: UtilizationRates,
    ) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Aircraft id cannot be empty");
        }
        if registration.trim().is_empty() {
            anyhow::bail!("Aircraft registration cannot be empty");
        }

        Ok(Self {
            id,
            registration,
            model,
            status,
            counters,
            rates,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn status(&self) -> &AircraftStatus {
        &self.status
    }

    pub fn counters(&self) -> &UsageCounters {
        &self.counters
    }

    pub fn rates(&self) -> &UtilizationRates {
        &self.rates
    }

    pub(crate) fn set_counters(&mut self, counters: UsageCounters) {
        self.counters = counters;
    }

    /// Applies the set fields of an edit; nothing changes if any field is invalid
    pub(crate) fn apply_edit(&mut self, edit: AircraftEdit) -> Result<()> {
        if let Some(registration) = &edit.registration {
            if registration.trim().is_empty() {
                anyhow::bail!("Aircraft registration cannot be empty");
            }
        }
        let rates = UtilizationRates::new(
            edit.avg_monthly_fh.unwrap_or(self.rates.avg_monthly_fh),
            edit.avg_monthly_cycles.unwrap_or(self.rates.avg_monthly_cycles),
        )?;

        if let Some(registration) = edit.registration {
            self.registration = registration;
        }
        if let Some(model) = edit.model {
            self.model = model;
        }
        if let Some(status) = edit.status {
            self.status = status;
        }
        self.rates = rates;
        Ok(())
    }
}

/// Descriptive fields and utilization rates of an aircraft that can be
/// changed after registration. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AircraftEdit {
    pub registration: Option<String>,
    pub model: Option<String>,
    pub status: Option<AircraftStatus>,
    pub avg_monthly_fh: Option<f64>,
    pub avg_monthly_cycles: Option<f64>,
}

impl AircraftEdit {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_new_valid() {
        let aircraft = Aircraft::new(
            "ac1".to_string(),
            "I-MAUR".to_string(),
            "Cessna 172S".to_string(),
            AircraftStatus::Active,
            UsageCounters::new(2450.5, 2580.2, 12400.0).unwrap(),
            UtilizationRates::new(45.0, 220.0).unwrap(),
        )
        .unwrap();

        assert_eq!(aircraft.registration(), "I-MAUR");
        assert_eq!(aircraft.counters().cycles(), 12400.0);
        assert_eq!(aircraft.rates().avg_monthly_fh(), 45.0);
    }

    #[test]
    fn test_aircraft_new_empty_registration() {
        let result = Aircraft::new(
            "ac1".to_string(),
            "".to_string(),
            "Piper PA-28".to_string(),
            AircraftStatus::Repair,
            UsageCounters::default(),
            UtilizationRates::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_utilization_rates_rejects_negative() {
        assert!(UtilizationRates::new(-3.0, 10.0).is_err());
    }

    #[test]
    fn test_aircraft_status_round_trip_codes() {
        for status in [
            AircraftStatus::Active,
            AircraftStatus::Repair,
            AircraftStatus::Maintenance,
            AircraftStatus::Inefficient,
        ] {
            assert_eq!(AircraftStatus::from(status.code()), status);
        }
        assert_eq!(AircraftStatus::from("maintenance"), AircraftStatus::Maintenance);
    }

    #[test]
    fn test_aircraft_status_keeps_legacy_codes() {
        let status = AircraftStatus::from("EFF");
        assert_eq!(status, AircraftStatus::Other("EFF".to_string()));
        assert_eq!(status.code(), "EFF");
        assert_eq!(AircraftStatus::from("PROG").to_string(), "PROG");
    }

    #[test]
    fn test_apply_edit_changes_rates_and_status() {
        let mut aircraft = Aircraft::new(
            "ac1".to_string(),
            "I-MAUR".to_string(),
            "Cessna 172S".to_string(),
            AircraftStatus::Active,
            UsageCounters::default(),
            UtilizationRates::new(45.0, 220.0).unwrap(),
        )
        .unwrap();

        aircraft
            .apply_edit(AircraftEdit {
                status: Some(AircraftStatus::Repair),
                avg_monthly_fh: Some(20.0),
                ..AircraftEdit::default()
            })
            .unwrap();

        assert_eq!(aircraft.status(), &AircraftStatus::Repair);
        assert_eq!(aircraft.rates().avg_monthly_fh(), 20.0);
        assert_eq!(aircraft.rates().avg_monthly_cycles(), 220.0);
        assert_eq!(aircraft.registration(), "I-MAUR");
    }

    #[test]
    fn test_apply_edit_rejects_blank_registration() {
        let mut aircraft = Aircraft::new(
            "ac1".to_string(),
            "I-MAUR".to_string(),
            "Cessna 172S".to_string(),
            AircraftStatus::Active,
            UsageCounters::default(),
            UtilizationRates::default(),
        )
        .unwrap();
        let before = aircraft.clone();

        let result = aircraft.apply_edit(AircraftEdit {
            registration: Some(" ".to_string()),
            model: Some("Piper PA-28".to_string()),
            ..AircraftEdit::default()
        });

        assert!(result.is_err());
        assert_eq!(aircraft, before);
    }
}
