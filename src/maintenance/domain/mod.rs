pub mod aircraft;
pub mod component;
pub mod counters;
pub mod fleet;
pub mod forecast_summary;
pub mod prediction;
pub mod report_metadata;
pub mod requirement;

pub use aircraft::{Aircraft, AircraftEdit, AircraftStatus, UtilizationRates};
pub use component::{Component, ComponentEdit, Criticality, Location};
pub use counters::{validate_counter, UsageCounters};
pub use fleet::Fleet;
pub use forecast_summary::ForecastSummary;
pub use prediction::{
    ActionRequired, Forecast, PredictionResult, INDETERMINATE_DAYS, NO_COUNTDOWN_THRESHOLD,
};
pub use report_metadata::ReportMetadata;
pub use requirement::{Completion, MaintenanceRequirement, RequirementKind, Schedule};
