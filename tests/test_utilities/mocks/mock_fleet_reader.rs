use std::path::Path;
use skyguard::prelude::*;

/// Mock FleetReader for testing
pub struct MockFleetReader {
    pub fleet: Fleet,
    pub should_fail: bool,
}

impl MockFleetReader {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            fleet: Fleet::default(),
            should_fail: true,
        }
    }
}

impl FleetReader for MockFleetReader {
    fn read_fleet(&self, _path: &Path) -> Result<Fleet> {
        if self.should_fail {
            anyhow::bail!("Mock fleet read failure");
        }
        Ok(self.fleet.clone())
    }
}
