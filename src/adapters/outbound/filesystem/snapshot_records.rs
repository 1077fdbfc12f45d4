//! Wire records of the fleet snapshot file
//!
//! The snapshot keeps the camelCase layout and loose typing of the records
//! the fleet office has always exchanged: requirement thresholds are either
//! numbers or ISO date strings depending on the `type` code, and
//! `aircraftId` is nullable. Everything is converted into the typed domain
//! model on the way in and rejected there if it does not fit.

use crate::maintenance::domain::{
    Aircraft, AircraftStatus, Component, Criticality, Fleet, Location, MaintenanceRequirement,
    RequirementKind, Schedule, UsageCounters, UtilizationRates,
};
use crate::shared::error::SkyguardError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Root document: `{ "aircraft": [...], "components": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub aircraft: Vec<AircraftRecord>,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftRecord {
    pub id: String,
    pub registration: String,
    pub model: String,
    pub status: String,
    pub total_flight_hours: f64,
    pub total_operating_hours: f64,
    pub total_cycles: f64,
    #[serde(rename = "avgMonthlyFH")]
    pub avg_monthly_fh: f64,
    pub avg_monthly_cycles: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub aircraft_id: Option<String>,
    pub criticality: String,
    pub lead_time_days: f64,
    #[serde(rename = "currentFH", default)]
    pub current_fh: f64,
    #[serde(rename = "currentOH", default)]
    pub current_oh: f64,
    #[serde(default)]
    pub current_cycles: f64,
    #[serde(default)]
    pub requirements: Vec<RequirementRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub interval: f64,
    pub last_performed_value: ThresholdValue,
    pub next_due_value: ThresholdValue,
    pub description: String,
}

/// A threshold as written in the snapshot: hours/cycles or an ISO date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdValue {
    Number(f64),
    Text(String),
}

impl SnapshotDocument {
    /// Validates every record and assembles the domain aggregate
    pub fn into_fleet(self) -> Result<Fleet> {
        let aircraft = self
            .aircraft
            .into_iter()
            .map(AircraftRecord::into_domain)
            .collect::<Result<Vec<_>>>()?;
        let components = self
            .components
            .into_iter()
            .map(ComponentRecord::into_domain)
            .collect::<Result<Vec<_>>>()?;

        Fleet::new(aircraft, components)
    }

    pub fn from_fleet(fleet: &Fleet) -> Self {
        Self {
            aircraft: fleet.aircraft().iter().map(AircraftRecord::from_domain).collect(),
            components: fleet
                .components()
                .iter()
                .map(ComponentRecord::from_domain)
                .collect(),
        }
    }
}

/// Rewraps a domain validation failure as an invalid-record error
fn invalid_record(entity: &'static str, id: &str, error: anyhow::Error) -> anyhow::Error {
    let reason = match error.downcast_ref::<SkyguardError>() {
        Some(SkyguardError::InvalidCounter { field, value }) => {
            format!("{} must be a finite, non-negative number (got {})", field, value)
        }
        _ => error.to_string(),
    };
    SkyguardError::InvalidRecord {
        entity,
        id: id.to_string(),
        reason,
    }
    .into()
}

impl AircraftRecord {
    fn into_domain(self) -> Result<Aircraft> {
        let id = self.id;
        let status = AircraftStatus::from(self.status.as_str());

        let build = || -> Result<Aircraft> {
            let counters = UsageCounters::new(
                self.total_flight_hours,
                self.total_operating_hours,
                self.total_cycles,
            )?;
            let rates = UtilizationRates::new(self.avg_monthly_fh, self.avg_monthly_cycles)?;
            Aircraft::new(
                id.clone(),
                self.registration.clone(),
                self.model.clone(),
                status.clone(),
                counters,
                rates,
            )
        };
        build().map_err(|e| invalid_record("aircraft", &id, e))
    }

    fn from_domain(aircraft: &Aircraft) -> Self {
        Self {
            id: aircraft.id().to_string(),
            registration: aircraft.registration().to_string(),
            model: aircraft.model().to_string(),
            status: aircraft.status().code().to_string(),
            total_flight_hours: aircraft.counters().flight_hours(),
            total_operating_hours: aircraft.counters().operating_hours(),
            total_cycles: aircraft.counters().cycles(),
            avg_monthly_fh: aircraft.rates().avg_monthly_fh(),
            avg_monthly_cycles: aircraft.rates().avg_monthly_cycles(),
        }
    }
}

impl ComponentRecord {
    fn into_domain(self) -> Result<Component> {
        let id = self.id;
        let invalid = |reason: String| -> anyhow::Error {
            SkyguardError::InvalidRecord {
                entity: "component",
                id: id.clone(),
                reason,
            }
            .into()
        };

        let criticality: Criticality = self.criticality.parse().map_err(invalid)?;
        if !(self.lead_time_days.is_finite() && self.lead_time_days >= 0.0) {
            return Err(invalid(format!(
                "leadTimeDays must be a finite, non-negative number of days (got {})",
                self.lead_time_days
            )));
        }
        let location = match self.aircraft_id {
            Some(aircraft_id) if !aircraft_id.trim().is_empty() => Location::Installed(aircraft_id),
            _ => Location::Ground,
        };
        let ground_counters =
            UsageCounters::new(self.current_fh, self.current_oh, self.current_cycles)
                .map_err(|e| invalid_record("component", &id, e))?;

        let mut component = Component::new(
            id.clone(),
            self.name,
            self.serial_number,
            location,
            criticality,
            self.lead_time_days,
        )
        .map_err(|e| invalid_record("component", &id, e))?
        .with_ground_counters(ground_counters);

        for requirement in self.requirements {
            let requirement = requirement.into_domain(&id)?;
            component = component
                .with_requirement(requirement)
                .map_err(|e| invalid_record("component", &id, e))?;
        }

        Ok(component)
    }

    fn from_domain(component: &Component) -> Self {
        Self {
            id: component.id().to_string(),
            name: component.name().to_string(),
            serial_number: component.serial_number().to_string(),
            aircraft_id: component.location().aircraft_id().map(str::to_string),
            criticality: component.criticality().as_str().to_string(),
            lead_time_days: component.lead_time_days(),
            current_fh: component.ground_counters().flight_hours(),
            current_oh: component.ground_counters().operating_hours(),
            current_cycles: component.ground_counters().cycles(),
            requirements: component
                .requirements()
                .iter()
                .map(RequirementRecord::from_domain)
                .collect(),
        }
    }
}

impl RequirementRecord {
    fn into_domain(self, component_id: &str) -> Result<MaintenanceRequirement> {
        let record_id = format!("{}/{}", component_id, self.id);
        let invalid = |reason: String| -> anyhow::Error {
            SkyguardError::InvalidRecord {
                entity: "requirement",
                id: record_id.clone(),
                reason,
            }
            .into()
        };

        let kind: RequirementKind = self.kind.parse().map_err(invalid)?;
        let schedule = match kind {
            RequirementKind::Calendar => Schedule::Calendar {
                interval_days: calendar_interval(self.interval).map_err(invalid)?,
                last_date: expect_date("lastPerformedValue", &self.last_performed_value)
                    .map_err(invalid)?,
                next_date: expect_date("nextDueValue", &self.next_due_value).map_err(invalid)?,
            },
            RequirementKind::FlightHours | RequirementKind::OperatingHours => {
                let last_hours =
                    expect_number("lastPerformedValue", &self.last_performed_value, kind)
                        .map_err(invalid)?;
                let next_hours = expect_number("nextDueValue", &self.next_due_value, kind)
                    .map_err(invalid)?;
                if kind == RequirementKind::FlightHours {
                    Schedule::FlightHours {
                        interval: self.interval,
                        last_hours,
                        next_hours,
                    }
                } else {
                    Schedule::OperatingHours {
                        interval: self.interval,
                        last_hours,
                        next_hours,
                    }
                }
            }
            RequirementKind::Cycles => Schedule::Cycles {
                interval: self.interval,
                last_cycles: expect_number("lastPerformedValue", &self.last_performed_value, kind)
                    .map_err(invalid)?,
                next_cycles: expect_number("nextDueValue", &self.next_due_value, kind)
                    .map_err(invalid)?,
            },
        };

        MaintenanceRequirement::new(self.id, self.description, schedule)
            .map_err(|e| invalid_record("requirement", &record_id, e))
    }

    fn from_domain(requirement: &MaintenanceRequirement) -> Self {
        let (interval, last, next) = match requirement.schedule() {
            Schedule::FlightHours {
                interval,
                last_hours,
                next_hours,
            }
            | Schedule::OperatingHours {
                interval,
                last_hours,
                next_hours,
            } => (
                *interval,
                ThresholdValue::Number(*last_hours),
                ThresholdValue::Number(*next_hours),
            ),
            Schedule::Cycles {
                interval,
                last_cycles,
                next_cycles,
            } => (
                *interval,
                ThresholdValue::Number(*last_cycles),
                ThresholdValue::Number(*next_cycles),
            ),
            Schedule::Calendar {
                interval_days,
                last_date,
                next_date,
            } => (
                f64::from(*interval_days),
                ThresholdValue::Text(last_date.format(DATE_FORMAT).to_string()),
                ThresholdValue::Text(next_date.format(DATE_FORMAT).to_string()),
            ),
        };

        Self {
            id: requirement.id().to_string(),
            kind: requirement.kind().code().to_string(),
            interval,
            last_performed_value: last,
            next_due_value: next,
            description: requirement.description().to_string(),
        }
    }
}

fn calendar_interval(interval: f64) -> std::result::Result<u32, String> {
    if interval.is_finite() && interval >= 0.0 && interval.fract() == 0.0 && interval <= f64::from(u32::MAX) {
        Ok(interval as u32)
    } else {
        Err(format!(
            "calendar interval must be a whole, non-negative number of days (got {})",
            interval
        ))
    }
}

fn expect_number(
    field: &str,
    value: &ThresholdValue,
    kind: RequirementKind,
) -> std::result::Result<f64, String> {
    match value {
        ThresholdValue::Number(n) => Ok(*n),
        ThresholdValue::Text(text) => Err(format!(
            "{} must be a number for {} requirements (got \"{}\")",
            field, kind, text
        )),
    }
}

fn expect_date(field: &str, value: &ThresholdValue) -> std::result::Result<NaiveDate, String> {
    match value {
        ThresholdValue::Text(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map_err(|e| format!("{} '{}' is not a YYYY-MM-DD date ({})", field, text, e)),
        ThresholdValue::Number(n) => Err(format!(
            "{} must be a YYYY-MM-DD date for CAL requirements (got {})",
            field, n
        )),
    }
}
