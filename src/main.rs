use skyguard::adapters::outbound::console::{StderrProgressReporter, UrgencyBanner};
use skyguard::adapters::outbound::filesystem::{FileSystemReader, SnapshotFileWriter};
use skyguard::application::dto::{ForecastRequest, MaintenanceRequest};
use skyguard::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use skyguard::application::read_models::ForecastReadModelBuilder;
use skyguard::application::use_cases::{GenerateForecastUseCase, MaintainFleetUseCase};
use skyguard::cli::{Args, Command, FleetArgs, ForecastArgs};
use skyguard::config::{self, ConfigFile};
use skyguard::ports::outbound::ProgressReporter;
use skyguard::shared::error::ExitCode;
use skyguard::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_FLEET_FILE: &str = "fleet.json";

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let quiet = matches!(&args.command, Command::Forecast(forecast) if forecast.quiet);
    let console = create_reporter(quiet);

    let fleet_args = args.command.fleet_args();
    let config = load_config(fleet_args)?.unwrap_or_default();
    for warning in config.unknown_field_warnings() {
        console.report_error(&warning);
    }

    let fleet_path = resolve_fleet_path(fleet_args.fleet.as_deref(), &config);

    match &args.command {
        Command::Forecast(forecast) => run_forecast(forecast, &config, fleet_path, &console),
        command => {
            // Every non-forecast subcommand carries a mutation
            let Some(mutation) = command.mutation() else {
                return Ok(ExitCode::Success);
            };
            let use_case = MaintainFleetUseCase::new(
                FileSystemReader::new(),
                SnapshotFileWriter::new(),
                create_reporter(false),
            );
            use_case.execute(MaintenanceRequest::new(fleet_path, mutation))?;
            Ok(ExitCode::Success)
        }
    }
}

fn run_forecast(
    args: &ForecastArgs,
    config: &ConfigFile,
    fleet_path: PathBuf,
    console: &StderrProgressReporter,
) -> Result<ExitCode> {
    // CLI flags win over config values
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let actions = if args.actions.is_empty() {
        config.action_filter()?
    } else {
        args.actions.clone()
    };
    let within_days = args.within.or(config.within_days);
    let fail_on_immediate = args.fail_on_immediate || config.fail_on_immediate.unwrap_or(false);

    let use_case = GenerateForecastUseCase::new(FileSystemReader::new(), create_reporter(args.quiet));
    let request = ForecastRequest::new(fleet_path)
        .with_reference_date(args.as_of)
        .with_within_days(within_days)
        .with_actions(actions);
    let response = use_case.execute(request)?;

    console.report(FormatterFactory::progress_message(format));
    let read_model = ForecastReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    console.report_completion(&UrgencyBanner::render(
        &response.summary,
        std::io::stderr().is_terminal(),
    ));

    if fail_on_immediate && response.has_immediate() {
        return Ok(ExitCode::ImmediateActionRequired);
    }
    Ok(ExitCode::Success)
}

fn create_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

/// Loads `--config` when given, otherwise looks for a config in the working directory
fn load_config(args: &FleetArgs) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// CLI flag, then config file, then `fleet.json` in the working directory
fn resolve_fleet_path(cli_fleet: Option<&Path>, config: &ConfigFile) -> PathBuf {
    cli_fleet
        .map(Path::to_path_buf)
        .or_else(|| config.fleet.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FLEET_FILE))
}
