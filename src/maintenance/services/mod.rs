mod fleet_forecaster;
mod prediction_engine;
mod prediction_filter;
mod report_metadata_generator;

pub use fleet_forecaster::{FleetForecast, FleetForecaster, UnresolvedInstallation};
pub use prediction_engine::PredictionEngine;
pub use prediction_filter::PredictionFilter;
pub use report_metadata_generator::ReportMetadataGenerator;
