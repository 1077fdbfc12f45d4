//! skyguard - maintenance forecasting for aircraft and ground-stored components
//!
//! This library predicts when each maintenance requirement of a fleet falls due,
//! from flight hours, operating hours, cycles or calendar thresholds, and
//! classifies every prediction as Immediate, Procure or Monitor. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`maintenance`): Pure business logic, the prediction engine and its policies
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use skyguard::prelude::*;
//! use chrono::NaiveDate;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateForecastUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ForecastRequest::new(PathBuf::from("fleet.json"))
//!     .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let read_model = ForecastReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod maintenance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, UrgencyBanner};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, SnapshotFileWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        FleetMutation, ForecastRequest, ForecastResponse, MaintenanceRequest,
        MaintenanceResponse, NewRequirement, OutputFormat,
    };
    pub use crate::application::read_models::{ForecastReadModel, ForecastReadModelBuilder};
    pub use crate::application::use_cases::{GenerateForecastUseCase, MaintainFleetUseCase};
    pub use crate::maintenance::domain::{
        ActionRequired, Aircraft, AircraftEdit, AircraftStatus, Component, ComponentEdit,
        Criticality, Fleet, Forecast, ForecastSummary, Location, MaintenanceRequirement,
        PredictionResult, RequirementKind, Schedule, UsageCounters, UtilizationRates,
    };
    pub use crate::maintenance::services::{FleetForecaster, PredictionEngine, PredictionFilter};
    pub use crate::ports::inbound::ForecastPort;
    pub use crate::ports::outbound::{
        FleetReader, FleetWriter, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, SkyguardError};
    pub use crate::shared::Result;
}
