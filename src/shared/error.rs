use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs and cron wrappers use these to tell a clean run apart from a
/// fleet that needs attention or a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - nothing requires immediate action (or the check was not requested)
    Success = 0,
    /// At least one requirement was classified Immediate with `--fail-on-immediate`
    ImmediateActionRequired = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable snapshot, invalid record, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ImmediateActionRequired => write!(f, "Immediate Action Required (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for fleet loading, validation and updates.
///
/// The prediction engine itself never fails; every variant here belongs to
/// the data-entry boundary or to a fleet mutation.
#[derive(Debug, Error)]
pub enum SkyguardError {
    #[error("Fleet snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    FleetFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse fleet snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be a JSON document with \"aircraft\" and \"components\" arrays")]
    FleetParseError { path: PathBuf, details: String },

    #[error("Invalid {entity} record '{id}': {reason}\n\n💡 Hint: Fix the record in the fleet snapshot before running a forecast")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("Aircraft not found: {id}\n\n💡 Hint: Check the aircraft id in the fleet snapshot")]
    UnknownAircraft { id: String },

    #[error("Component not found: {id}\n\n💡 Hint: Check the component id in the fleet snapshot")]
    UnknownComponent { id: String },

    #[error("Requirement '{requirement_id}' not found on component '{component_id}'\n\n💡 Hint: Check the requirement id in the fleet snapshot")]
    UnknownRequirement {
        component_id: String,
        requirement_id: String,
    },

    #[error("Cannot sign off requirement '{requirement_id}': {reason}\n\n💡 Hint: Calendar requirements take a completion date (YYYY-MM-DD), counter requirements take a number")]
    CompletionMismatch {
        requirement_id: String,
        reason: String,
    },

    #[error("Duplicate {entity} id '{id}': the fleet already contains it\n\n💡 Hint: Pick an unused id or omit --id to generate one")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Component '{id}' is installed on aircraft '{aircraft_id}'\n\n💡 Hint: Installed components read their counters from the aircraft; update the aircraft counters instead")]
    ComponentInstalled { id: String, aircraft_id: String },

    #[error("Invalid counter value for {field}: {value}\n\n💡 Hint: Counters must be finite, non-negative numbers")]
    InvalidCounter { field: &'static str, value: f64 },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for request and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
