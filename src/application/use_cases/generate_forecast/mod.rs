use crate::application::dto::{ForecastRequest, ForecastResponse};
use crate::maintenance::domain::{Fleet, ForecastSummary, PredictionResult};
use crate::maintenance::services::{
    FleetForecast, FleetForecaster, PredictionFilter, ReportMetadataGenerator,
};
use crate::ports::inbound::ForecastPort;
use crate::ports::outbound::{FleetReader, ProgressReporter};
use crate::shared::Result;
use chrono::{Local, NaiveDate};

/// GenerateForecastUseCase - Core use case for fleet forecasting
///
/// This use case orchestrates the forecast workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `FR` - FleetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateForecastUseCase<FR, PR> {
    fleet_reader: FR,
    progress_reporter: PR,
}

impl<FR, PR> GenerateForecastUseCase<FR, PR>
where
    FR: FleetReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateForecastUseCase with injected dependencies
    pub fn new(fleet_reader: FR, progress_reporter: PR) -> Self {
        Self {
            fleet_reader,
            progress_reporter,
        }
    }

    /// Executes the forecast use case
    ///
    /// # Arguments
    /// * `request` - Snapshot location, reference date and report filters
    ///
    /// # Returns
    /// ForecastResponse with filtered, urgency-sorted predictions
    pub fn execute(&self, request: ForecastRequest) -> Result<ForecastResponse> {
        // Step 1: Pin the reference date for the whole batch
        let reference_date = Self::resolve_reference_date(&request);

        // Step 2: Load and validate the snapshot
        let fleet = self.read_and_report_fleet(&request)?;

        // Step 3: Run the engine over every component
        let forecast = self.forecast_fleet(&fleet, reference_date);
        self.report_unresolved(&forecast);

        // Step 4: Filter and order for the report
        let predictions = self.apply_filters(forecast.predictions, &request);

        // Step 5: Build the response
        let summary = ForecastSummary::tally(&fleet, &predictions);
        let metadata = ReportMetadataGenerator::generate_default_metadata(reference_date);

        Ok(ForecastResponse::new(
            metadata,
            summary,
            predictions,
            forecast.unresolved,
        ))
    }

    fn resolve_reference_date(request: &ForecastRequest) -> NaiveDate {
        request
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    fn read_and_report_fleet(&self, request: &ForecastRequest) -> Result<Fleet> {
        self.progress_reporter.report(&format!(
            "📖 Loading fleet snapshot from: {}",
            request.fleet_path.display()
        ));

        let fleet = self.fleet_reader.read_fleet(&request.fleet_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} aircraft and {} component(s)",
            fleet.aircraft().len(),
            fleet.components().len()
        ));

        Ok(fleet)
    }

    fn forecast_fleet(&self, fleet: &Fleet, reference_date: NaiveDate) -> FleetForecast {
        self.progress_reporter.report(&format!(
            "🔮 Forecasting maintenance as of {}...",
            reference_date
        ));

        let forecast =
            FleetForecaster::forecast_with_progress(fleet, reference_date, |done, total, c| {
                self.progress_reporter
                    .report_progress(done, total, Some(c.id()));
            });

        self.progress_reporter.report_completion(&format!(
            "✅ Forecast complete: {} prediction(s)",
            forecast.predictions.len()
        ));

        forecast
    }

    fn report_unresolved(&self, forecast: &FleetForecast) {
        for unresolved in &forecast.unresolved {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Component '{}' references unknown aircraft '{}'; treating it as a ground asset.",
                unresolved.component_id, unresolved.aircraft_id
            ));
        }
    }

    fn apply_filters(
        &self,
        predictions: Vec<PredictionResult>,
        request: &ForecastRequest,
    ) -> Vec<PredictionResult> {
        let filter = PredictionFilter::new(request.within_days, request.actions.clone());
        let original_count = predictions.len();
        let mut predictions = filter.apply(predictions);

        let filtered_out = original_count - predictions.len();
        if filtered_out > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Filtered out {} prediction(s)",
                filtered_out
            ));
        }

        PredictionFilter::sort_by_urgency(&mut predictions);
        predictions
    }
}

impl<FR, PR> ForecastPort for GenerateForecastUseCase<FR, PR>
where
    FR: FleetReader,
    PR: ProgressReporter,
{
    fn forecast(&self, request: ForecastRequest) -> Result<ForecastResponse> {
        self.execute(request)
    }
}
