use crate::maintenance::domain::{Aircraft, RequirementKind};

/// Average days per month used to turn monthly utilization into a daily rate
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Operating hours are flight hours plus ground running and taxi time
pub const OPERATING_HOURS_FACTOR: f64 = 1.05;

/// UsageRatePolicy for projecting counters forward in time
///
/// Only installed components accrue usage. A ground asset, or an aircraft
/// without a recorded monthly rate, yields a rate of zero.
pub struct UsageRatePolicy;

impl UsageRatePolicy {
    /// Daily consumption of the counter governing `kind`
    ///
    /// # Arguments
    /// * `kind` - Requirement kind selecting the counter
    /// * `aircraft` - Carrying aircraft, `None` for ground assets
    ///
    /// # Returns
    /// Units per day; `0.0` when no projection is possible
    pub fn daily_rate(kind: RequirementKind, aircraft: Option<&Aircraft>) -> f64 {
        let Some(aircraft) = aircraft else {
            return 0.0;
        };

        let rates = aircraft.rates();
        let monthly = match kind {
            RequirementKind::FlightHours => rates.avg_monthly_fh(),
            RequirementKind::OperatingHours => rates.avg_monthly_fh() * OPERATING_HOURS_FACTOR,
            RequirementKind::Cycles => rates.avg_monthly_cycles(),
            RequirementKind::Calendar => 0.0,
        };

        monthly / DAYS_PER_MONTH
    }
}
