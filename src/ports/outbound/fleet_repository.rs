use crate::maintenance::domain::Fleet;
use crate::shared::Result;
use std::path::Path;

/// FleetReader port for loading a fleet snapshot
///
/// This port abstracts where aircraft and component records come from.
/// Implementations must hand back a fully validated [`Fleet`]; malformed
/// records are rejected here rather than surfacing later as bad predictions.
pub trait FleetReader {
    /// Reads and validates the fleet snapshot at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot file does not exist or cannot be read
    /// - The content is not a valid snapshot document
    /// - A record violates a domain invariant (negative counters, bad dates, ...)
    fn read_fleet(&self, path: &Path) -> Result<Fleet>;
}

/// FleetWriter port for persisting a fleet snapshot after maintenance operations
pub trait FleetWriter {
    /// Writes the fleet snapshot to `path`, replacing any existing content
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn write_fleet(&self, path: &Path, fleet: &Fleet) -> Result<()>;
}
