mod urgency;
mod usage_rate;

pub use urgency::{UrgencyPolicy, IMMEDIATE_THRESHOLD_DAYS};
pub use usage_rate::{UsageRatePolicy, DAYS_PER_MONTH, OPERATING_HOURS_FACTOR};
