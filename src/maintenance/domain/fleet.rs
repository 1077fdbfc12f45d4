use super::aircraft::{Aircraft, AircraftEdit};
use super::component::{Component, ComponentEdit, Location};
use super::counters::UsageCounters;
use super::requirement::Completion;
use crate::shared::error::SkyguardError;
use crate::shared::Result;
use std::collections::HashSet;

/// Snapshot aggregate holding every aircraft and component
///
/// Order of both collections is preserved; it drives the order of
/// predictions in a forecast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
    components: Vec<Component>,
}

impl Fleet {
    pub fn new(aircraft: Vec<Aircraft>, components: Vec<Component>) -> Result<Self> {
        let mut seen = HashSet::new();
        for ac in &aircraft {
            if !seen.insert(ac.id()) {
                return Err(SkyguardError::InvalidRecord {
                    entity: "aircraft",
                    id: ac.id().to_string(),
                    reason: "duplicate aircraft id".to_string(),
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for component in &components {
            if !seen.insert(component.id()) {
                return Err(SkyguardError::InvalidRecord {
                    entity: "component",
                    id: component.id().to_string(),
                    reason: "duplicate component id".to_string(),
                }
                .into());
            }
        }

        Ok(Self {
            aircraft,
            components,
        })
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn find_aircraft(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|ac| ac.id() == id)
    }

    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Aircraft carrying a component, if it is installed and the id resolves
    pub fn carrier_of(&self, component: &Component) -> Option<&Aircraft> {
        component
            .location()
            .aircraft_id()
            .and_then(|id| self.find_aircraft(id))
    }

    /// Registers a new aircraft, rejecting an id already in the fleet
    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> Result<()> {
        if self.find_aircraft(aircraft.id()).is_some() {
            return Err(SkyguardError::DuplicateId {
                entity: "aircraft",
                id: aircraft.id().to_string(),
            }
            .into());
        }
        self.aircraft.push(aircraft);
        Ok(())
    }

    /// Registers a new component, installed or in storage.
    ///
    /// The id must be unused and an installation must name a known aircraft.
    pub fn add_component(&mut self, component: Component) -> Result<()> {
        if self.find_component(component.id()).is_some() {
            return Err(SkyguardError::DuplicateId {
                entity: "component",
                id: component.id().to_string(),
            }
            .into());
        }
        self.ensure_aircraft_exists(component.location())?;
        self.components.push(component);
        Ok(())
    }

    /// Installs a component on a known aircraft or moves it to ground storage
    pub fn relocate_component(&mut self, component_id: &str, location: Location) -> Result<()> {
        self.ensure_aircraft_exists(&location)?;
        self.component_mut(component_id)?.relocate(location);
        Ok(())
    }

    pub fn edit_aircraft(&mut self, aircraft_id: &str, edit: AircraftEdit) -> Result<()> {
        self.aircraft_mut(aircraft_id)?.apply_edit(edit)
    }

    pub fn edit_component(&mut self, component_id: &str, edit: ComponentEdit) -> Result<()> {
        self.component_mut(component_id)?.apply_edit(edit)
    }

    /// Records completion of a requirement from raw input (number or date)
    pub fn sign_off(
        &mut self,
        component_id: &str,
        requirement_id: &str,
        raw_completion: &str,
    ) -> Result<()> {
        let component = self.component_mut(component_id)?;
        let requirement = component.requirement_mut(requirement_id).ok_or_else(|| {
            SkyguardError::UnknownRequirement {
                component_id: component_id.to_string(),
                requirement_id: requirement_id.to_string(),
            }
        })?;

        let completion = Completion::parse_for(requirement.kind(), raw_completion, requirement_id)?;
        requirement.sign_off(completion)
    }

    /// Overwrites an aircraft's absolute counters
    pub fn update_aircraft_counters(&mut self, aircraft_id: &str, counters: UsageCounters) -> Result<()> {
        self.aircraft_mut(aircraft_id)?.set_counters(counters);
        Ok(())
    }

    /// Overwrites the manually tracked counters of a ground component
    pub fn update_ground_usage(&mut self, component_id: &str, counters: UsageCounters) -> Result<()> {
        let component = self.component_mut(component_id)?;
        if let Location::Installed(aircraft_id) = component.location() {
            return Err(SkyguardError::ComponentInstalled {
                id: component_id.to_string(),
                aircraft_id: aircraft_id.clone(),
            }
            .into());
        }
        component.set_ground_counters(counters);
        Ok(())
    }

    /// Deletes an aircraft and moves its installed components to ground storage.
    ///
    /// Returns the number of components moved.
    pub fn remove_aircraft(&mut self, aircraft_id: &str) -> Result<usize> {
        let index = self
            .aircraft
            .iter()
            .position(|ac| ac.id() == aircraft_id)
            .ok_or_else(|| SkyguardError::UnknownAircraft {
                id: aircraft_id.to_string(),
            })?;
        self.aircraft.remove(index);

        let mut detached = 0;
        for component in &mut self.components {
            if component.location().aircraft_id() == Some(aircraft_id) {
                component.relocate(Location::Ground);
                detached += 1;
            }
        }
        Ok(detached)
    }

    pub fn remove_component(&mut self, component_id: &str) -> Result<Component> {
        let index = self
            .components
            .iter()
            .position(|c| c.id() == component_id)
            .ok_or_else(|| SkyguardError::UnknownComponent {
                id: component_id.to_string(),
            })?;
        Ok(self.components.remove(index))
    }

    fn ensure_aircraft_exists(&self, location: &Location) -> Result<()> {
        match location.aircraft_id() {
            Some(id) if self.find_aircraft(id).is_none() => Err(SkyguardError::UnknownAircraft {
                id: id.to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }

    fn aircraft_mut(&mut self, aircraft_id: &str) -> Result<&mut Aircraft> {
        self.aircraft
            .iter_mut()
            .find(|ac| ac.id() == aircraft_id)
            .ok_or_else(|| {
                SkyguardError::UnknownAircraft {
                    id: aircraft_id.to_string(),
                }
                .into()
            })
    }

    fn component_mut(&mut self, component_id: &str) -> Result<&mut Component> {
        self.components
            .iter_mut()
            .find(|c| c.id() == component_id)
            .ok_or_else(|| {
                SkyguardError::UnknownComponent {
                    id: component_id.to_string(),
                }
                .into()
            })
    }
}
