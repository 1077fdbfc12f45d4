use crate::application::dto::{ForecastRequest, ForecastResponse};
use crate::shared::Result;

/// ForecastPort - Inbound port for the fleet forecast use case
///
/// External adapters (the CLI today) drive forecasting through this trait
/// without knowing which readers or reporters sit behind it.
pub trait ForecastPort {
    /// Loads the fleet named in `request` and forecasts every requirement
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or fails validation
    fn forecast(&self, request: ForecastRequest) -> Result<ForecastResponse>;
}
