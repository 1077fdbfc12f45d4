use skyguard::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock FleetWriter for testing that captures every written snapshot
#[derive(Default, Clone)]
pub struct MockFleetWriter {
    pub writes: Arc<Mutex<Vec<(PathBuf, Fleet)>>>,
}

impl MockFleetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_written(&self) -> Option<Fleet> {
        self.writes
            .lock()
            .unwrap()
            .last()
            .map(|(_, fleet)| fleet.clone())
    }
}

impl FleetWriter for MockFleetWriter {
    fn write_fleet(&self, path: &Path, fleet: &Fleet) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), fleet.clone()));
        Ok(())
    }
}
