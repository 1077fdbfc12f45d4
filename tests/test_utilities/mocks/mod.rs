/// Mock implementations for testing
mod mock_fleet_reader;
mod mock_fleet_writer;
mod mock_progress_reporter;

pub use mock_fleet_reader::MockFleetReader;
pub use mock_fleet_writer::MockFleetWriter;
pub use mock_progress_reporter::MockProgressReporter;
