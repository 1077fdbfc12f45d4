use crate::maintenance::domain::{AircraftEdit, ComponentEdit, Criticality, RequirementKind};
use std::path::PathBuf;

/// First requirement of a newly registered component, thresholds as raw input
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequirement {
    /// Generated when absent
    pub requirement_id: Option<String>,
    pub kind: RequirementKind,
    pub interval: f64,
    pub last_performed: String,
    pub next_due: String,
    pub description: String,
}

/// A single change applied to the fleet snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum FleetMutation {
    /// Register an aircraft; the id is generated when absent
    AddAircraft {
        aircraft_id: Option<String>,
        registration: String,
        model: String,
        status: String,
        flight_hours: f64,
        operating_hours: f64,
        cycles: f64,
        avg_monthly_fh: f64,
        avg_monthly_cycles: f64,
    },
    /// Register a component with its first requirement; `aircraft_id: None` stores it on the ground
    AddComponent {
        component_id: Option<String>,
        name: String,
        serial_number: String,
        aircraft_id: Option<String>,
        criticality: Criticality,
        lead_time_days: f64,
        requirement: NewRequirement,
    },
    /// Install on an aircraft, or move to storage with `aircraft_id: None`
    RelocateComponent {
        component_id: String,
        aircraft_id: Option<String>,
    },
    EditAircraft {
        aircraft_id: String,
        edit: AircraftEdit,
    },
    EditComponent {
        component_id: String,
        edit: ComponentEdit,
    },
    /// Record completion of a requirement; `value` is hours/cycles or an ISO date
    SignOff {
        component_id: String,
        requirement_id: String,
        value: String,
    },
    UpdateAircraftCounters {
        aircraft_id: String,
        flight_hours: f64,
        operating_hours: f64,
        cycles: f64,
    },
    UpdateGroundUsage {
        component_id: String,
        flight_hours: f64,
        operating_hours: f64,
        cycles: f64,
    },
    RemoveAircraft {
        aircraft_id: String,
    },
    RemoveComponent {
        component_id: String,
    },
}

/// MaintenanceRequest - Request DTO for snapshot-editing operations
#[derive(Debug, Clone)]
pub struct MaintenanceRequest {
    pub fleet_path: PathBuf,
    pub mutation: FleetMutation,
}

impl MaintenanceRequest {
    pub fn new(fleet_path: PathBuf, mutation: FleetMutation) -> Self {
        Self {
            fleet_path,
            mutation,
        }
    }
}

/// MaintenanceResponse - Human-readable outcome of a snapshot edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceResponse {
    pub message: String,
}

impl MaintenanceResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
