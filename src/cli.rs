use crate::application::dto::{FleetMutation, NewRequirement, OutputFormat};
use crate::maintenance::domain::{
    ActionRequired, AircraftEdit, AircraftStatus, ComponentEdit, Criticality, RequirementKind,
};
use chrono::NaiveDate;
use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Predict maintenance due dates for aircraft and their components
#[derive(Parser, Debug)]
#[command(name = "skyguard")]
#[command(version)]
#[command(
    about = "Predict maintenance due dates for aircraft and their components",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Forecast every requirement in the fleet and print a report
    Forecast(ForecastArgs),
    /// Record completion of a requirement and advance its next-due threshold
    SignOff(SignOffArgs),
    /// Set absolute counters of an aircraft or usage of a ground component
    UpdateCounters(UpdateCountersArgs),
    /// Remove an aircraft (its components go to storage) or a component
    Remove(RemoveArgs),
    /// Register a new aircraft
    AddAircraft(AddAircraftArgs),
    /// Register a new component with its first maintenance requirement
    AddComponent(AddComponentArgs),
    /// Install a component on an aircraft or move it to ground storage
    Relocate(RelocateArgs),
    /// Change registration, model, status or utilization rates of an aircraft
    EditAircraft(EditAircraftArgs),
    /// Change name, serial number, criticality or lead time of a component
    EditComponent(EditComponentArgs),
}

/// Snapshot location shared by every subcommand
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FleetArgs {
    /// Path to the fleet snapshot (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub fleet: Option<PathBuf>,

    /// Path to a config file (defaults to ./skyguard.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Output format: json or markdown
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Forecast as of this date (YYYY-MM-DD) instead of today
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Only report determinate predictions due within this many days
    #[arg(long, value_name = "DAYS")]
    pub within: Option<u32>,

    /// Only report these action tiers; repeatable: --action immediate --action procure
    #[arg(long = "action", value_name = "ACTION")]
    pub actions: Vec<ActionRequired>,

    /// Exit with code 1 when any reported requirement needs immediate action
    #[arg(long)]
    pub fail_on_immediate: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SignOffArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Component carrying the requirement
    #[arg(long, value_name = "ID")]
    pub component: String,

    /// Requirement to sign off
    #[arg(long, value_name = "ID")]
    pub requirement: String,

    /// Counter reading at completion, or the completion date (YYYY-MM-DD) for calendar items
    #[arg(long, value_name = "VALUE")]
    pub value: String,
}

#[derive(ClapArgs, Debug, Clone)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["aircraft", "component"])
))]
pub struct UpdateCountersArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Aircraft whose absolute counters are set
    #[arg(long, value_name = "ID")]
    pub aircraft: Option<String>,

    /// Ground component whose usage counters are set
    #[arg(long, value_name = "ID")]
    pub component: Option<String>,

    /// Flight hours
    #[arg(long)]
    pub fh: f64,

    /// Operating hours
    #[arg(long)]
    pub oh: f64,

    /// Cycles
    #[arg(long)]
    pub cycles: f64,
}

#[derive(ClapArgs, Debug, Clone)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["aircraft", "component"])
))]
pub struct RemoveArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Aircraft to remove
    #[arg(long, value_name = "ID")]
    pub aircraft: Option<String>,

    /// Component to remove
    #[arg(long, value_name = "ID")]
    pub component: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AddAircraftArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Aircraft id (generated when omitted)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Registration mark, e.g. I-MAUR
    #[arg(long)]
    pub registration: String,

    /// Aircraft model
    #[arg(long)]
    pub model: String,

    /// Status code: A, R, M, I (other codes are stored as given)
    #[arg(long, default_value = "A")]
    pub status: String,

    /// Total flight hours
    #[arg(long, default_value_t = 0.0)]
    pub fh: f64,

    /// Total operating hours
    #[arg(long, default_value_t = 0.0)]
    pub oh: f64,

    /// Total cycles
    #[arg(long, default_value_t = 0.0)]
    pub cycles: f64,

    /// Average flight hours per month
    #[arg(long = "avg-fh", value_name = "HOURS")]
    pub avg_fh: f64,

    /// Average cycles per month
    #[arg(long = "avg-cycles", value_name = "CYCLES")]
    pub avg_cycles: f64,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AddComponentArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Component id (generated when omitted)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Component name
    #[arg(long)]
    pub name: String,

    /// Serial number
    #[arg(long)]
    pub serial: String,

    /// Aircraft to install it on (stored on the ground when omitted)
    #[arg(long, value_name = "ID")]
    pub aircraft: Option<String>,

    /// Criticality: low, medium or high
    #[arg(long, default_value = "medium")]
    pub criticality: Criticality,

    /// Procurement lead time in days
    #[arg(long = "lead-time", value_name = "DAYS", default_value_t = 7.0)]
    pub lead_time: f64,

    /// Id of the first requirement (generated when omitted)
    #[arg(long = "requirement-id", value_name = "ID")]
    pub requirement_id: Option<String>,

    /// Requirement type: FH, OH, C or CAL
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: RequirementKind,

    /// Interval in hours, cycles or days
    #[arg(long)]
    pub interval: f64,

    /// Last performed value, or date (YYYY-MM-DD) for CAL
    #[arg(long, value_name = "VALUE")]
    pub last: String,

    /// Next due value, or date (YYYY-MM-DD) for CAL
    #[arg(long, value_name = "VALUE")]
    pub next: String,

    /// Requirement description
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(ClapArgs, Debug, Clone)]
#[command(group(
    ArgGroup::new("destination")
        .required(true)
        .args(["aircraft", "ground"])
))]
pub struct RelocateArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Component to move
    #[arg(long, value_name = "ID")]
    pub component: String,

    /// Install on this aircraft
    #[arg(long, value_name = "ID")]
    pub aircraft: Option<String>,

    /// Move to ground storage
    #[arg(long)]
    pub ground: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct EditAircraftArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Aircraft to edit
    #[arg(long, value_name = "ID")]
    pub aircraft: String,

    #[arg(long)]
    pub registration: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Status code: A, R, M, I (other codes are stored as given)
    #[arg(long)]
    pub status: Option<String>,

    /// Average flight hours per month
    #[arg(long = "avg-fh", value_name = "HOURS")]
    pub avg_fh: Option<f64>,

    /// Average cycles per month
    #[arg(long = "avg-cycles", value_name = "CYCLES")]
    pub avg_cycles: Option<f64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct EditComponentArgs {
    #[command(flatten)]
    pub fleet: FleetArgs,

    /// Component to edit
    #[arg(long, value_name = "ID")]
    pub component: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub serial: Option<String>,

    #[arg(long)]
    pub criticality: Option<Criticality>,

    /// Procurement lead time in days
    #[arg(long = "lead-time", value_name = "DAYS")]
    pub lead_time: Option<f64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    pub fn fleet_args(&self) -> &FleetArgs {
        match self {
            Command::Forecast(args) => &args.fleet,
            Command::SignOff(args) => &args.fleet,
            Command::UpdateCounters(args) => &args.fleet,
            Command::Remove(args) => &args.fleet,
            Command::AddAircraft(args) => &args.fleet,
            Command::AddComponent(args) => &args.fleet,
            Command::Relocate(args) => &args.fleet,
            Command::EditAircraft(args) => &args.fleet,
            Command::EditComponent(args) => &args.fleet,
        }
    }

    /// The snapshot edit requested by a maintenance subcommand; `None` for `forecast`
    pub fn mutation(&self) -> Option<FleetMutation> {
        match self {
            Command::Forecast(_) => None,
            Command::SignOff(args) => Some(FleetMutation::SignOff {
                component_id: args.component.clone(),
                requirement_id: args.requirement.clone(),
                value: args.value.clone(),
            }),
            Command::UpdateCounters(args) => Some(match (&args.aircraft, &args.component) {
                (Some(aircraft_id), _) => FleetMutation::UpdateAircraftCounters {
                    aircraft_id: aircraft_id.clone(),
                    flight_hours: args.fh,
                    operating_hours: args.oh,
                    cycles: args.cycles,
                },
                (None, component_id) => FleetMutation::UpdateGroundUsage {
                    component_id: component_id.clone().unwrap_or_default(),
                    flight_hours: args.fh,
                    operating_hours: args.oh,
                    cycles: args.cycles,
                },
            }),
            Command::Remove(args) => Some(match (&args.aircraft, &args.component) {
                (Some(aircraft_id), _) => FleetMutation::RemoveAircraft {
                    aircraft_id: aircraft_id.clone(),
                },
                (None, component_id) => FleetMutation::RemoveComponent {
                    component_id: component_id.clone().unwrap_or_default(),
                },
            }),
            Command::AddAircraft(args) => Some(FleetMutation::AddAircraft {
                aircraft_id: args.id.clone(),
                registration: args.registration.clone(),
                model: args.model.clone(),
                status: args.status.clone(),
                flight_hours: args.fh,
                operating_hours: args.oh,
                cycles: args.cycles,
                avg_monthly_fh: args.avg_fh,
                avg_monthly_cycles: args.avg_cycles,
            }),
            Command::AddComponent(args) => Some(FleetMutation::AddComponent {
                component_id: args.id.clone(),
                name: args.name.clone(),
                serial_number: args.serial.clone(),
                aircraft_id: args.aircraft.clone(),
                criticality: args.criticality,
                lead_time_days: args.lead_time,
                requirement: NewRequirement {
                    requirement_id: args.requirement_id.clone(),
                    kind: args.kind,
                    interval: args.interval,
                    last_performed: args.last.clone(),
                    next_due: args.next.clone(),
                    description: args.description.clone(),
                },
            }),
            Command::Relocate(args) => Some(FleetMutation::RelocateComponent {
                component_id: args.component.clone(),
                aircraft_id: args.aircraft.clone(),
            }),
            Command::EditAircraft(args) => Some(FleetMutation::EditAircraft {
                aircraft_id: args.aircraft.clone(),
                edit: AircraftEdit {
                    registration: args.registration.clone(),
                    model: args.model.clone(),
                    status: args.status.as_deref().map(AircraftStatus::from),
                    avg_monthly_fh: args.avg_fh,
                    avg_monthly_cycles: args.avg_cycles,
                },
            }),
            Command::EditComponent(args) => Some(FleetMutation::EditComponent {
                component_id: args.component.clone(),
                edit: ComponentEdit {
                    name: args.name.clone(),
                    serial_number: args.serial.clone(),
                    criticality: args.criticality,
                    lead_time_days: args.lead_time,
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("skyguard").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_forecast_defaults() {
        let args = parse(&["forecast"]).unwrap();
        let Command::Forecast(forecast) = args.command else {
            panic!("expected forecast");
        };

        assert!(forecast.fleet.fleet.is_none());
        assert!(forecast.format.is_none());
        assert!(forecast.as_of.is_none());
        assert!(forecast.actions.is_empty());
        assert!(!forecast.fail_on_immediate);
    }

    #[test]
    fn test_forecast_all_options() {
        let args = parse(&[
            "forecast",
            "-f",
            "fleet.json",
            "--format",
            "md",
            "-o",
            "report.md",
            "--as-of",
            "2024-06-01",
            "--within",
            "30",
            "--action",
            "immediate",
            "--action",
            "Procure",
            "--fail-on-immediate",
        ])
        .unwrap();
        let Command::Forecast(forecast) = args.command else {
            panic!("expected forecast");
        };

        assert_eq!(forecast.fleet.fleet, Some(PathBuf::from("fleet.json")));
        assert_eq!(forecast.format, Some(OutputFormat::Markdown));
        assert_eq!(forecast.output, Some(PathBuf::from("report.md")));
        assert_eq!(forecast.as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(forecast.within, Some(30));
        assert_eq!(
            forecast.actions,
            vec![ActionRequired::Immediate, ActionRequired::Procure]
        );
        assert!(forecast.fail_on_immediate);
    }

    #[test]
    fn test_forecast_rejects_invalid_values() {
        let err = parse(&["forecast", "--format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["forecast", "--as-of", "2024-13-01"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["forecast", "--action", "panic"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_sign_off_mutation() {
        let args = parse(&[
            "sign-off",
            "--component",
            "cmp1",
            "--requirement",
            "req1",
            "--value",
            "2450.5",
        ])
        .unwrap();

        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::SignOff {
                component_id: "cmp1".to_string(),
                requirement_id: "req1".to_string(),
                value: "2450.5".to_string(),
            })
        );
    }

    #[test]
    fn test_update_counters_targets() {
        let args = parse(&[
            "update-counters",
            "--aircraft",
            "ac1",
            "--fh",
            "10",
            "--oh",
            "11",
            "--cycles",
            "12",
        ])
        .unwrap();
        assert!(matches!(
            args.command.mutation(),
            Some(FleetMutation::UpdateAircraftCounters { ref aircraft_id, .. }) if aircraft_id == "ac1"
        ));

        let args = parse(&[
            "update-counters",
            "--component",
            "cmp9",
            "--fh",
            "1",
            "--oh",
            "1",
            "--cycles",
            "1",
        ])
        .unwrap();
        assert!(matches!(
            args.command.mutation(),
            Some(FleetMutation::UpdateGroundUsage { ref component_id, .. }) if component_id == "cmp9"
        ));
    }

    #[test]
    fn test_update_counters_requires_exactly_one_target() {
        let err = parse(&["update-counters", "--fh", "1", "--oh", "1", "--cycles", "1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&[
            "update-counters",
            "--aircraft",
            "ac1",
            "--component",
            "cmp1",
            "--fh",
            "1",
            "--oh",
            "1",
            "--cycles",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_remove_mutation() {
        let args = parse(&["remove", "-f", "fleet.json", "--component", "cmp2"]).unwrap();

        assert_eq!(
            args.command.fleet_args().fleet,
            Some(PathBuf::from("fleet.json"))
        );
        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::RemoveComponent {
                component_id: "cmp2".to_string()
            })
        );
    }

    #[test]
    fn test_add_aircraft_defaults() {
        let args = parse(&[
            "add-aircraft",
            "--registration",
            "I-BETA",
            "--model",
            "Piper PA-28",
            "--avg-fh",
            "25",
            "--avg-cycles",
            "40.5",
        ])
        .unwrap();

        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::AddAircraft {
                aircraft_id: None,
                registration: "I-BETA".to_string(),
                model: "Piper PA-28".to_string(),
                status: "A".to_string(),
                flight_hours: 0.0,
                operating_hours: 0.0,
                cycles: 0.0,
                avg_monthly_fh: 25.0,
                avg_monthly_cycles: 40.5,
            })
        );
    }

    #[test]
    fn test_add_component_on_ground() {
        let args = parse(&[
            "add-component",
            "--name",
            "ELT Battery",
            "--serial",
            "ELT-1",
            "--type",
            "cal",
            "--interval",
            "730",
            "--last",
            "2024-01-01",
            "--next",
            "2026-01-01",
        ])
        .unwrap();

        let Some(FleetMutation::AddComponent {
            aircraft_id,
            criticality,
            lead_time_days,
            requirement,
            ..
        }) = args.command.mutation()
        else {
            panic!("expected add-component mutation");
        };
        assert!(aircraft_id.is_none());
        assert_eq!(criticality, Criticality::Medium);
        assert_eq!(lead_time_days, 7.0);
        assert_eq!(requirement.kind, RequirementKind::Calendar);
        assert_eq!(requirement.next_due, "2026-01-01");
    }

    #[test]
    fn test_add_component_rejects_unknown_type() {
        let err = parse(&[
            "add-component",
            "--name",
            "Pump",
            "--serial",
            "P-1",
            "--type",
            "MONTHS",
            "--interval",
            "1",
            "--last",
            "0",
            "--next",
            "1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_relocate_destinations() {
        let args = parse(&["relocate", "--component", "cmp4", "--aircraft", "ac1"]).unwrap();
        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::RelocateComponent {
                component_id: "cmp4".to_string(),
                aircraft_id: Some("ac1".to_string()),
            })
        );

        let args = parse(&["relocate", "--component", "cmp1", "--ground"]).unwrap();
        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::RelocateComponent {
                component_id: "cmp1".to_string(),
                aircraft_id: None,
            })
        );
    }

    #[test]
    fn test_relocate_requires_exactly_one_destination() {
        let err = parse(&["relocate", "--component", "cmp1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["relocate", "--component", "cmp1", "--aircraft", "ac1", "--ground"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_edit_commands_carry_only_given_fields() {
        let args = parse(&["edit-component", "--component", "cmp1", "--lead-time", "12.5"]).unwrap();
        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::EditComponent {
                component_id: "cmp1".to_string(),
                edit: ComponentEdit {
                    lead_time_days: Some(12.5),
                    ..ComponentEdit::default()
                },
            })
        );

        let args = parse(&["edit-aircraft", "--aircraft", "ac1", "--status", "EFF"]).unwrap();
        assert_eq!(
            args.command.mutation(),
            Some(FleetMutation::EditAircraft {
                aircraft_id: "ac1".to_string(),
                edit: AircraftEdit {
                    status: Some(AircraftStatus::Other("EFF".to_string())),
                    ..AircraftEdit::default()
                },
            })
        );
    }

    #[test]
    fn test_forecast_has_no_mutation() {
        let args = parse(&["forecast"]).unwrap();
        assert!(args.command.mutation().is_none());
    }
}
