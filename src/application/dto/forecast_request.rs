use crate::maintenance::domain::ActionRequired;
use chrono::NaiveDate;
use std::path::PathBuf;

/// ForecastRequest - Request DTO for the fleet forecast use case
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    /// Path to the fleet snapshot file
    pub fleet_path: PathBuf,
    /// Date to forecast against; today's local date when `None`
    pub reference_date: Option<NaiveDate>,
    /// Keep only determinate predictions due within this many days
    pub within_days: Option<u32>,
    /// Keep only these action tiers (empty keeps all)
    pub actions: Vec<ActionRequired>,
}

impl ForecastRequest {
    pub fn new(fleet_path: PathBuf) -> Self {
        Self {
            fleet_path,
            reference_date: None,
            within_days: None,
            actions: Vec::new(),
        }
    }

    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn with_within_days(mut self, within_days: Option<u32>) -> Self {
        self.within_days = within_days;
        self
    }

    pub fn with_actions(mut self, actions: Vec<ActionRequired>) -> Self {
        self.actions = actions;
        self
    }
}
