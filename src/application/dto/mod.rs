/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod forecast_request;
mod forecast_response;
mod maintenance_request;
mod output_format;

pub use forecast_request::ForecastRequest;
pub use forecast_response::ForecastResponse;
pub use maintenance_request::{
    FleetMutation, MaintenanceRequest, MaintenanceResponse, NewRequirement,
};
pub use output_format::OutputFormat;
