/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod snapshot_records;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, SnapshotFileWriter, StdoutPresenter};
pub use snapshot_records::{
    AircraftRecord, ComponentRecord, RequirementRecord, SnapshotDocument, ThresholdValue,
};
