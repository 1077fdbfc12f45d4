use crate::maintenance::domain::ForecastSummary;
use owo_colors::OwoColorize;

/// One-line urgency tally printed to stderr after a forecast
pub struct UrgencyBanner;

impl UrgencyBanner {
    /// Renders the tally, coloured by tier when `colored` is set.
    pub fn render(summary: &ForecastSummary, colored: bool) -> String {
        let immediate = format!("{} Immediate", summary.immediate);
        let procure = format!("{} Procure", summary.procure);
        let monitor = format!("{} Monitor", summary.monitor);

        let tiers = if colored {
            format!(
                "{} | {} | {}",
                immediate.red().bold(),
                procure.yellow(),
                monitor.green()
            )
        } else {
            format!("{} | {} | {}", immediate, procure, monitor)
        };

        let icon = if summary.has_immediate() { "🚨" } else { "🛫" };
        format!(
            "{} {} across {} prediction(s)",
            icon, tiers, summary.predictions
        )
    }
}
