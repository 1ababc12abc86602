use crate::errors::TrackerError;
use crate::models::TrackerRecord;

/// Persistence for the failure tracker: a flat list of per-customer records.
pub trait ITrackerStore: Send + Sync {
    /// Load every record. A missing backing file is an empty list, not an error.
    fn load(&self) -> Result<Vec<TrackerRecord>, TrackerError>;

    /// Replace the stored records with `records`.
    fn save(&self, records: &[TrackerRecord]) -> Result<(), TrackerError>;
}
