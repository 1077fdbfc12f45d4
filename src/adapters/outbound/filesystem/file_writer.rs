use super::snapshot_records::SnapshotDocument;
use crate::maintenance::domain::Fleet;
use crate::ports::outbound::{FleetWriter, OutputPresenter};
use crate::shared::error::SkyguardError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Fails unless the parent directory of `path` exists
fn validate_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            return Err(SkyguardError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        SkyguardError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_parent_directory(&self.output_path)?;
        validate_not_symlink(&self.output_path, "write")?;

        write_file(&self.output_path, content)
    }
}

/// StdoutPresenter adapter for writing reports to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// SnapshotFileWriter adapter for persisting the fleet snapshot
///
/// The document is written to a sibling temporary file first and then
/// renamed over the snapshot, so a failed write never leaves a truncated
/// snapshot behind.
pub struct SnapshotFileWriter;

impl SnapshotFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SnapshotFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetWriter for SnapshotFileWriter {
    fn write_fleet(&self, path: &Path, fleet: &Fleet) -> Result<()> {
        validate_parent_directory(path)?;
        validate_not_symlink(path, "write")?;

        let mut content = serde_json::to_string_pretty(&SnapshotDocument::from_fleet(fleet))?;
        content.push('\n');

        let mut staging = path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        validate_not_symlink(&staging, "write")?;
        write_file(&staging, &content)?;
        fs::rename(&staging, path).map_err(|e| SkyguardError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Failed to replace snapshot: {}", e),
        })?;

        Ok(())
    }
}
