//! Prediction view structs for read model
//!
//! One flattened row per requirement, shaped for presentation.

use crate::maintenance::domain::NO_COUNTDOWN_THRESHOLD;

/// Location label for components that are not installed on an aircraft
pub const STORAGE_LABEL: &str = "Storage";

/// View representation of a single prediction row
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub component_id: String,
    pub component_name: String,
    /// Aircraft registration, or [`STORAGE_LABEL`] for ground assets
    pub aircraft_registration: String,
    pub requirement_id: String,
    pub requirement_description: String,
    /// ISO `YYYY-MM-DD`
    pub estimated_due_date: String,
    pub days_remaining: u32,
    pub action_required: String,
    pub indeterminate: bool,
}

impl PredictionView {
    /// Whether the row carries a usable countdown
    pub fn has_countdown(&self) -> bool {
        self.days_remaining <= NO_COUNTDOWN_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(days_remaining: u32) -> PredictionView {
        PredictionView {
            component_id: "c1".to_string(),
            component_name: "Magneto".to_string(),
            aircraft_registration: STORAGE_LABEL.to_string(),
            requirement_id: "r1".to_string(),
            requirement_description: "Overhaul".to_string(),
            estimated_due_date: "2024-06-01".to_string(),
            days_remaining,
            action_required: "Monitor".to_string(),
            indeterminate: false,
        }
    }

    #[test]
    fn test_has_countdown_boundary() {
        assert!(view(0).has_countdown());
        assert!(view(3000).has_countdown());
        assert!(!view(3001).has_countdown());
        assert!(!view(9999).has_countdown());
    }
}
