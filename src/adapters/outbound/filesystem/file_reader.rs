use super::snapshot_records::SnapshotDocument;
use crate::maintenance::domain::Fleet;
use crate::ports::outbound::FleetReader;
use crate::shared::error::SkyguardError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading fleet snapshots from disk
///
/// Implements the FleetReader port. The file is vetted (no symlinks,
/// regular file, size cap) before it is read, then parsed and validated
/// into the domain model.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "fleet snapshot", MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SkyguardError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl FleetReader for FileSystemReader {
    fn read_fleet(&self, path: &Path) -> Result<Fleet> {
        if !path.exists() {
            return Err(SkyguardError::FleetFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Create the snapshot file, or point to it with --fleet or the `fleet` key in skyguard.config.yml".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        let document: SnapshotDocument =
            serde_json::from_str(&content).map_err(|e| SkyguardError::FleetParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        document.into_fleet()
    }
}
