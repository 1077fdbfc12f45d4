/// Use cases module containing application business logic orchestration
mod generate_forecast;
mod maintain_fleet;

pub use generate_forecast::GenerateForecastUseCase;
pub use maintain_fleet::MaintainFleetUseCase;
