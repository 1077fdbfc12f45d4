use chrono::NaiveDate;

/// Day count emitted when no countdown can be estimated (no usage rate)
pub const INDETERMINATE_DAYS: u32 = 9999;

/// Day counts above this are "no meaningful countdown" for consumers
pub const NO_COUNTDOWN_THRESHOLD: u32 = 3000;

/// Time-to-due estimate for one requirement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Forecast {
    /// Exact, unclamped day count (negative once the threshold has passed)
    Determinate { days: f64 },
    /// No usable consumption rate, so the due date cannot be projected
    Indeterminate,
}

impl Forecast {
    /// Raw day count; indeterminate forecasts are infinitely far away.
    pub fn raw_days(&self) -> f64 {
        match self {
            Forecast::Determinate { days } => *days,
            Forecast::Indeterminate => f64::INFINITY,
        }
    }

    /// Day count for the single numeric output channel.
    ///
    /// Determinate values are floored and clamped at zero; indeterminate ones
    /// map to [`INDETERMINATE_DAYS`].
    pub fn days_remaining(&self) -> u32 {
        match self {
            Forecast::Determinate { days } => days.floor().max(0.0) as u32,
            Forecast::Indeterminate => INDETERMINATE_DAYS,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Forecast::Indeterminate)
    }
}

/// Urgency tier of a prediction, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionRequired {
    Monitor,
    Procure,
    Immediate,
}

impl ActionRequired {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionRequired::Monitor => "Monitor",
            ActionRequired::Procure => "Procure",
            ActionRequired::Immediate => "Immediate",
        }
    }
}

impl std::str::FromStr for ActionRequired {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monitor" => Ok(ActionRequired::Monitor),
            "procure" => Ok(ActionRequired::Procure),
            "immediate" => Ok(ActionRequired::Immediate),
            _ => Err(format!(
                "Invalid action: {}. Please specify 'monitor', 'procure' or 'immediate'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ActionRequired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine output for a single requirement
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    component_id: String,
    component_name: String,
    aircraft_registration: Option<String>,
    requirement_id: String,
    requirement_description: String,
    estimated_due_date: NaiveDate,
    forecast: Forecast,
    action_required: ActionRequired,
}

impl PredictionResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        component_id: String,
        component_name: String,
        aircraft_registration: Option<String>,
        requirement_id: String,
        requirement_description: String,
        estimated_due_date: NaiveDate,
        forecast: Forecast,
        action_required: ActionRequired,
    ) -> Self {
        Self {
            component_id,
            component_name,
            aircraft_registration,
            requirement_id,
            requirement_description,
            estimated_due_date,
            forecast,
            action_required,
        }
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Registration of the carrying aircraft; `None` for ground storage
    pub fn aircraft_registration(&self) -> Option<&str> {
        self.aircraft_registration.as_deref()
    }

    pub fn requirement_id(&self) -> &str {
        &self.requirement_id
    }

    pub fn requirement_description(&self) -> &str {
        &self.requirement_description
    }

    pub fn estimated_due_date(&self) -> NaiveDate {
        self.estimated_due_date
    }

    pub fn forecast(&self) -> Forecast {
        self.forecast
    }

    pub fn days_remaining(&self) -> u32 {
        self.forecast.days_remaining()
    }

    pub fn action_required(&self) -> ActionRequired {
        self.action_required
    }
}
