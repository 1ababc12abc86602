use std::sync::Mutex;

use challenge_core::errors::TrackerError;
use challenge_core::models::TrackerRecord;
use challenge_core::traits::ITrackerStore;

/// In-memory store for tests and for hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TrackerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TrackerRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Copy of what was last saved.
    pub fn snapshot(&self) -> Vec<TrackerRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl ITrackerStore for MemoryStore {
    fn load(&self) -> Result<Vec<TrackerRecord>, TrackerError> {
        let records = self.records.lock().map_err(|e| TrackerError::Serialization {
            message: format!("memory store poisoned: {e}"),
        })?;
        Ok(records.clone())
    }

    fn save(&self, records: &[TrackerRecord]) -> Result<(), TrackerError> {
        let mut stored = self.records.lock().map_err(|e| TrackerError::Serialization {
            message: format!("memory store poisoned: {e}"),
        })?;
        *stored = records.to_vec();
        Ok(())
    }
}
