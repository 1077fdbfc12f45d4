use super::counters::{validate_counter, UsageCounters};
use super::requirement::MaintenanceRequirement;
use crate::shared::Result;

/// Where a component currently lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Installed on the aircraft with this id
    Installed(String),
    /// Held in ground inventory
    Ground,
}

impl Location {
    pub fn aircraft_id(&self) -> Option<&str> {
        match self {
            Location::Installed(id) => Some(id.as_str()),
            Location::Ground => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl Criticality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Low => "Low",
            Criticality::Medium => "Medium",
            Criticality::High => "High",
        }
    }
}

impl std::str::FromStr for Criticality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Criticality::Low),
            "medium" => Ok(Criticality::Medium),
            "high" => Ok(Criticality::High),
            _ => Err(format!(
                "Unknown criticality: {}. Expected Low, Medium or High",
                s
            )),
        }
    }
}

/// A physical part, trackable whether installed or in storage
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: String,
    name: String,
    serial_number: String,
    location: Location,
    criticality: Criticality,
    lead_time_days: f64,
    ground_counters: UsageCounters,
    requirements: Vec<MaintenanceRequirement>,
}

impl Component {
    /// Registers a component with zeroed ground counters and no requirements
    pub fn new(
        id: String,
        name: String,
        serial_number: String,
        location: Location,
        criticality: Criticality,
        lead_time_days: f64,
    ) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Component id cannot be empty");
        }
        if name.trim().is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }
        let lead_time_days = validate_counter("lead time days", lead_time_days)?;

        Ok(Self {
            id,
            name,
            serial_number,
            location,
            criticality,
            lead_time_days,
            ground_counters: UsageCounters::default(),
            requirements: Vec::new(),
        })
    }

    pub fn with_ground_counters(mut self, counters: UsageCounters) -> Self {
        self.ground_counters = counters;
        self
    }

    /// Appends a requirement, rejecting duplicate requirement ids
    pub fn with_requirement(mut self, requirement: MaintenanceRequirement) -> Result<Self> {
        if self.requirement(requirement.id()).is_some() {
            anyhow::bail!(
                "Duplicate requirement id '{}' on component '{}'",
                requirement.id(),
                self.id
            );
        }
        self.requirements.push(requirement);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn criticality(&self) -> Criticality {
        self.criticality
    }

    /// Procurement lead time; fractional days are allowed
    pub fn lead_time_days(&self) -> f64 {
        self.lead_time_days
    }

    pub fn ground_counters(&self) -> &UsageCounters {
        &self.ground_counters
    }

    pub fn requirements(&self) -> &[MaintenanceRequirement] {
        &self.requirements
    }

    pub fn requirement(&self, requirement_id: &str) -> Option<&MaintenanceRequirement> {
        self.requirements.iter().find(|r| r.id() == requirement_id)
    }

    pub(crate) fn requirement_mut(
        &mut self,
        requirement_id: &str,
    ) -> Option<&mut MaintenanceRequirement> {
        self.requirements.iter_mut().find(|r| r.id() == requirement_id)
    }

    pub(crate) fn set_ground_counters(&mut self, counters: UsageCounters) {
        self.ground_counters = counters;
    }

    pub(crate) fn relocate(&mut self, location: Location) {
        self.location = location;
    }

    /// Applies the set fields of an edit; nothing changes if any field is invalid
    pub(crate) fn apply_edit(&mut self, edit: ComponentEdit) -> Result<()> {
        if let Some(name) = &edit.name {
            if name.trim().is_empty() {
                anyhow::bail!("Component name cannot be empty");
            }
        }
        let lead_time_days = edit
            .lead_time_days
            .map(|days| validate_counter("lead time days", days))
            .transpose()?;

        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(serial_number) = edit.serial_number {
            self.serial_number = serial_number;
        }
        if let Some(criticality) = edit.criticality {
            self.criticality = criticality;
        }
        if let Some(days) = lead_time_days {
            self.lead_time_days = days;
        }
        Ok(())
    }
}

/// Descriptive fields of a component that can be changed after registration.
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentEdit {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub criticality: Option<Criticality>,
    pub lead_time_days: Option<f64>,
}

impl ComponentEdit {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
