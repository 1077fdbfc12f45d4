/// Console adapters for stderr feedback
mod progress_reporter;
mod urgency_banner;

pub use progress_reporter::StderrProgressReporter;
pub use urgency_banner::UrgencyBanner;
