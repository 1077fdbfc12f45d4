use crate::application::dto::{
    FleetMutation, MaintenanceRequest, MaintenanceResponse, NewRequirement,
};
use crate::maintenance::domain::{
    Aircraft, AircraftStatus, Component, Fleet, Location, MaintenanceRequirement, Schedule,
    UsageCounters, UtilizationRates,
};
use crate::ports::outbound::{FleetReader, FleetWriter, ProgressReporter};
use crate::shared::error::SkyguardError;
use crate::shared::Result;
use uuid::Uuid;

/// Generates an id such as `cmp-1f0c2a9e` for records registered without one
fn generate_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &uuid[..8])
}

/// MaintainFleetUseCase - Applies one edit to the fleet snapshot
///
/// Loads the snapshot, applies the mutation through the domain aggregate
/// and writes the snapshot back. Nothing is written if the mutation fails.
///
/// # Type Parameters
/// * `FR` - FleetReader implementation
/// * `FW` - FleetWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct MaintainFleetUseCase<FR, FW, PR> {
    fleet_reader: FR,
    fleet_writer: FW,
    progress_reporter: PR,
}

impl<FR, FW, PR> MaintainFleetUseCase<FR, FW, PR>
where
    FR: FleetReader,
    FW: FleetWriter,
    PR: ProgressReporter,
{
    pub fn new(fleet_reader: FR, fleet_writer: FW, progress_reporter: PR) -> Self {
        Self {
            fleet_reader,
            fleet_writer,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: MaintenanceRequest) -> Result<MaintenanceResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading fleet snapshot from: {}",
            request.fleet_path.display()
        ));
        let mut fleet = self.fleet_reader.read_fleet(&request.fleet_path)?;

        let message = Self::apply(&mut fleet, &request.mutation)?;

        self.fleet_writer.write_fleet(&request.fleet_path, &fleet)?;
        self.progress_reporter.report_completion(&format!("✅ {}", message));

        Ok(MaintenanceResponse::new(message))
    }

    fn apply(fleet: &mut Fleet, mutation: &FleetMutation) -> Result<String> {
        match mutation {
            FleetMutation::AddAircraft {
                aircraft_id,
                registration,
                model,
                status,
                flight_hours,
                operating_hours,
                cycles,
                avg_monthly_fh,
                avg_monthly_cycles,
            } => {
                let id = aircraft_id.clone().unwrap_or_else(|| generate_id("ac"));
                let aircraft = Aircraft::new(
                    id.clone(),
                    registration.clone(),
                    model.clone(),
                    AircraftStatus::from(status.as_str()),
                    UsageCounters::new(*flight_hours, *operating_hours, *cycles)?,
                    UtilizationRates::new(*avg_monthly_fh, *avg_monthly_cycles)?,
                )?;
                fleet.add_aircraft(aircraft)?;
                Ok(format!("Registered aircraft '{}' ({})", id, registration))
            }
            FleetMutation::AddComponent {
                component_id,
                name,
                serial_number,
                aircraft_id,
                criticality,
                lead_time_days,
                requirement,
            } => {
                let id = component_id.clone().unwrap_or_else(|| generate_id("cmp"));
                let location = aircraft_id
                    .clone()
                    .map_or(Location::Ground, Location::Installed);
                let component = Component::new(
                    id.clone(),
                    name.clone(),
                    serial_number.clone(),
                    location,
                    *criticality,
                    *lead_time_days,
                )?
                .with_requirement(Self::build_requirement(requirement)?)?;
                fleet.add_component(component)?;
                Ok(match aircraft_id {
                    Some(aircraft_id) => format!(
                        "Registered component '{}' ({}) on aircraft '{}'",
                        id, name, aircraft_id
                    ),
                    None => format!("Registered component '{}' ({}) in storage", id, name),
                })
            }
            FleetMutation::RelocateComponent {
                component_id,
                aircraft_id,
            } => {
                let location = aircraft_id
                    .clone()
                    .map_or(Location::Ground, Location::Installed);
                fleet.relocate_component(component_id, location)?;
                Ok(match aircraft_id {
                    Some(aircraft_id) => format!(
                        "Installed component '{}' on aircraft '{}'",
                        component_id, aircraft_id
                    ),
                    None => format!("Moved component '{}' to storage", component_id),
                })
            }
            FleetMutation::EditAircraft { aircraft_id, edit } => {
                if edit.is_empty() {
                    return Err(nothing_to_edit("aircraft"));
                }
                fleet.edit_aircraft(aircraft_id, edit.clone())?;
                Ok(format!("Updated aircraft '{}'", aircraft_id))
            }
            FleetMutation::EditComponent { component_id, edit } => {
                if edit.is_empty() {
                    return Err(nothing_to_edit("component"));
                }
                fleet.edit_component(component_id, edit.clone())?;
                Ok(format!("Updated component '{}'", component_id))
            }
            FleetMutation::SignOff {
                component_id,
                requirement_id,
                value,
            } => {
                fleet.sign_off(component_id, requirement_id, value)?;
                Ok(format!(
                    "Signed off requirement '{}' on component '{}' at {}",
                    requirement_id, component_id, value
                ))
            }
            FleetMutation::UpdateAircraftCounters {
                aircraft_id,
                flight_hours,
                operating_hours,
                cycles,
            } => {
                let counters = UsageCounters::new(*flight_hours, *operating_hours, *cycles)?;
                fleet.update_aircraft_counters(aircraft_id, counters)?;
                Ok(format!("Updated counters of aircraft '{}'", aircraft_id))
            }
            FleetMutation::UpdateGroundUsage {
                component_id,
                flight_hours,
                operating_hours,
                cycles,
            } => {
                let counters = UsageCounters::new(*flight_hours, *operating_hours, *cycles)?;
                fleet.update_ground_usage(component_id, counters)?;
                Ok(format!("Updated ground usage of component '{}'", component_id))
            }
            FleetMutation::RemoveAircraft { aircraft_id } => {
                let grounded = fleet.remove_aircraft(aircraft_id)?;
                Ok(format!(
                    "Removed aircraft '{}'; {} component(s) moved to storage",
                    aircraft_id, grounded
                ))
            }
            FleetMutation::RemoveComponent { component_id } => {
                let removed = fleet.remove_component(component_id)?;
                Ok(format!(
                    "Removed component '{}' ({})",
                    removed.id(),
                    removed.name()
                ))
            }
        }
    }

    fn build_requirement(requirement: &NewRequirement) -> Result<MaintenanceRequirement> {
        let id = requirement
            .requirement_id
            .clone()
            .unwrap_or_else(|| generate_id("req"));
        let schedule = Schedule::from_thresholds(
            requirement.kind,
            requirement.interval,
            &requirement.last_performed,
            &requirement.next_due,
            &id,
        )?;
        MaintenanceRequirement::new(id, requirement.description.clone(), schedule)
    }
}

fn nothing_to_edit(entity: &str) -> anyhow::Error {
    SkyguardError::Validation {
        message: format!("no {} fields to change were given", entity),
    }
    .into()
}
