//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a flattened representation of forecast data for the formatters.

pub mod forecast_read_model;
pub mod forecast_read_model_builder;
pub mod prediction_view;

pub use forecast_read_model::{ForecastReadModel, MetadataView, SummaryView};
pub use forecast_read_model_builder::ForecastReadModelBuilder;
pub use prediction_view::{PredictionView, STORAGE_LABEL};
