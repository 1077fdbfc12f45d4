use super::counters::validate_counter;
use crate::shared::error::SkyguardError;
use crate::shared::Result;
use chrono::{Days, NaiveDate};

/// Which counter (or the calendar) governs a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementKind {
    FlightHours,
    OperatingHours,
    Cycles,
    Calendar,
}

impl RequirementKind {
    /// Short code used in snapshots and reports
    pub fn code(&self) -> &'static str {
        match self {
            RequirementKind::FlightHours => "FH",
            RequirementKind::OperatingHours => "OH",
            RequirementKind::Cycles => "C",
            RequirementKind::Calendar => "CAL",
        }
    }
}

impl std::str::FromStr for RequirementKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FH" => Ok(RequirementKind::FlightHours),
            "OH" => Ok(RequirementKind::OperatingHours),
            "C" => Ok(RequirementKind::Cycles),
            "CAL" => Ok(RequirementKind::Calendar),
            _ => Err(format!(
                "Unknown requirement type: {}. Expected one of FH, OH, C, CAL",
                s
            )),
        }
    }
}

impl std::fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Recurrence schedule of a requirement, one variant per governing counter.
#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    FlightHours {
        interval: f64,
        last_hours: f64,
        next_hours: f64,
    },
    OperatingHours {
        interval: f64,
        last_hours: f64,
        next_hours: f64,
    },
    Cycles {
        interval: f64,
        last_cycles: f64,
        next_cycles: f64,
    },
    Calendar {
        interval_days: u32,
        last_date: NaiveDate,
        next_date: NaiveDate,
    },
}

impl Schedule {
    pub fn kind(&self) -> RequirementKind {
        match self {
            Schedule::FlightHours { .. } => RequirementKind::FlightHours,
            Schedule::OperatingHours { .. } => RequirementKind::OperatingHours,
            Schedule::Cycles { .. } => RequirementKind::Cycles,
            Schedule::Calendar { .. } => RequirementKind::Calendar,
        }
    }

    /// Builds a schedule from raw threshold input: numbers for FH/OH/C,
    /// `YYYY-MM-DD` dates for CAL, whose interval must be whole days.
    pub fn from_thresholds(
        kind: RequirementKind,
        interval: f64,
        last_performed: &str,
        next_due: &str,
        requirement_id: &str,
    ) -> Result<Self> {
        let last = Completion::parse_for(kind, last_performed, requirement_id)?;
        let next = Completion::parse_for(kind, next_due, requirement_id)?;

        let schedule = match (kind, last, next) {
            (RequirementKind::Calendar, Completion::Date(last_date), Completion::Date(next_date)) => {
                if !(interval.is_finite()
                    && interval >= 0.0
                    && interval.fract() == 0.0
                    && interval <= f64::from(u32::MAX))
                {
                    anyhow::bail!(
                        "Calendar interval must be a whole, non-negative number of days (got {})",
                        interval
                    );
                }
                Schedule::Calendar {
                    interval_days: interval as u32,
                    last_date,
                    next_date,
                }
            }
            (RequirementKind::FlightHours, Completion::Counter(last), Completion::Counter(next)) => {
                Schedule::FlightHours {
                    interval,
                    last_hours: last,
                    next_hours: next,
                }
            }
            (RequirementKind::OperatingHours, Completion::Counter(last), Completion::Counter(next)) => {
                Schedule::OperatingHours {
                    interval,
                    last_hours: last,
                    next_hours: next,
                }
            }
            (RequirementKind::Cycles, Completion::Counter(last), Completion::Counter(next)) => {
                Schedule::Cycles {
                    interval,
                    last_cycles: last,
                    next_cycles: next,
                }
            }
            (kind, last, next) => {
                anyhow::bail!("Thresholds {:?} and {:?} do not fit a {} requirement", last, next, kind)
            }
        };
        schedule.validate()?;
        Ok(schedule)
    }

    fn validate(&self) -> Result<()> {
        match self {
            Schedule::FlightHours {
                interval,
                last_hours,
                next_hours,
            }
            | Schedule::OperatingHours {
                interval,
                last_hours,
                next_hours,
            } => {
                validate_counter("interval", *interval)?;
                validate_counter("last performed hours", *last_hours)?;
                validate_counter("next due hours", *next_hours)?;
            }
            Schedule::Cycles {
                interval,
                last_cycles,
                next_cycles,
            } => {
                validate_counter("interval", *interval)?;
                validate_counter("last performed cycles", *last_cycles)?;
                validate_counter("next due cycles", *next_cycles)?;
            }
            Schedule::Calendar { .. } => {}
        }
        Ok(())
    }
}

/// Value recorded when a requirement is signed off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    /// Counter reading at completion (hours or cycles)
    Counter(f64),
    /// Completion date for calendar requirements
    Date(NaiveDate),
}

impl Completion {
    /// Parses raw sign-off input according to the requirement kind it targets.
    pub fn parse_for(kind: RequirementKind, raw: &str, requirement_id: &str) -> Result<Self> {
        let raw = raw.trim();
        let mismatch = |reason: String| SkyguardError::CompletionMismatch {
            requirement_id: requirement_id.to_string(),
            reason,
        };

        match kind {
            RequirementKind::Calendar => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Completion::Date)
                .map_err(|e| mismatch(format!("'{}' is not a YYYY-MM-DD date ({})", raw, e)).into()),
            _ => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| mismatch(format!("'{}' is not a {} value", raw, kind)))?;
                Ok(Completion::Counter(validate_counter("completion value", value)?))
            }
        }
    }
}

/// One recurring maintenance obligation attached to a component.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRequirement {
    id: String,
    description: String,
    schedule: Schedule,
}

impl MaintenanceRequirement {
    pub fn new(id: String, description: String, schedule: Schedule) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Requirement id cannot be empty");
        }
        schedule.validate()?;

        Ok(Self {
            id,
            description,
            schedule,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn kind(&self) -> RequirementKind {
        self.schedule.kind()
    }

    /// Records a completion and advances the next-due threshold by one interval.
    pub fn sign_off(&mut self, completion: Completion) -> Result<()> {
        match (&mut self.schedule, completion) {
            (
                Schedule::FlightHours {
                    interval,
                    last_hours,
                    next_hours,
                }
                | Schedule::OperatingHours {
                    interval,
                    last_hours,
                    next_hours,
                },
                Completion::Counter(value),
            ) => {
                let next = validate_counter("next due hours", value + *interval)?;
                *last_hours = value;
                *next_hours = next;
            }
            (
                Schedule::Cycles {
                    interval,
                    last_cycles,
                    next_cycles,
                },
                Completion::Counter(value),
            ) => {
                let next = validate_counter("next due cycles", value + *interval)?;
                *last_cycles = value;
                *next_cycles = next;
            }
            (
                Schedule::Calendar {
                    interval_days,
                    last_date,
                    next_date,
                },
                Completion::Date(date),
            ) => {
                let next = date
                    .checked_add_days(Days::new(u64::from(*interval_days)))
                    .ok_or_else(|| SkyguardError::CompletionMismatch {
                        requirement_id: self.id.clone(),
                        reason: format!("{} + {} days is out of range", date, interval_days),
                    })?;
                *last_date = date;
                *next_date = next;
            }
            (schedule, completion) => {
                let expected = match schedule {
                    Schedule::Calendar { .. } => "a completion date",
                    _ => "a counter value",
                };
                return Err(SkyguardError::CompletionMismatch {
                    requirement_id: self.id.clone(),
                    reason: format!("expected {}, got {:?}", expected, completion),
                }
                .into());
            }
        }
        Ok(())
    }
}
