use crate::application::read_models::ForecastReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering forecast reports
///
/// This port abstracts the formatting logic for the different report
/// formats (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats a forecast report from the read model
    ///
    /// # Arguments
    /// * `model` - The forecast read model containing metadata, summary and
    ///   prediction rows
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ForecastReadModel) -> Result<String>;
}
