//! JSON file persistence.
//!
//! ```json
//! { "tracking_data": [
//!     { "customer_id": "austin_steiner",
//!       "last_notified_at": "2026-03-01T18:00:00Z",
//!       "consecutive_failures": 1 } ] }
//! ```
//!
//! `last_notified_at` is RFC 3339 or `""` for never. Loading is lenient per
//! entry: an unparsable timestamp drops the timestamp and keeps the count, a
//! negative count reads as 0, and an entry that cannot be decoded at all is
//! skipped without affecting the others.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use challenge_core::errors::TrackerError;
use challenge_core::models::TrackerRecord;
use challenge_core::traits::ITrackerStore;

#[derive(Debug, Serialize)]
struct TrackingFile {
    tracking_data: Vec<TrackingEntry>,
}

/// The document as read: entries stay raw so each one decodes on its own.
#[derive(Debug, Deserialize)]
struct RawTrackingFile {
    #[serde(default)]
    tracking_data: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TrackingEntry {
    customer_id: String,
    #[serde(default)]
    last_notified_at: String,
    /// Signed so older files with negative counts still load.
    #[serde(default)]
    consecutive_failures: i64,
}

impl From<&TrackerRecord> for TrackingEntry {
    fn from(record: &TrackerRecord) -> Self {
        Self {
            customer_id: record.customer_id.clone(),
            last_notified_at: record
                .last_notified_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            consecutive_failures: i64::from(record.consecutive_failures),
        }
    }
}

impl TrackingEntry {
    fn into_record(self) -> TrackerRecord {
        let last_notified_at = if self.last_notified_at.is_empty() {
            None
        } else {
            match DateTime::parse_from_rfc3339(&self.last_notified_at) {
                Ok(t) => Some(t.with_timezone(&Utc)),
                Err(e) => {
                    warn!(
                        customer = %self.customer_id,
                        value = %self.last_notified_at,
                        error = %e,
                        "dropping unparsable notification timestamp"
                    );
                    None
                }
            }
        };
        if self.consecutive_failures < 0 {
            warn!(
                customer = %self.customer_id,
                value = self.consecutive_failures,
                "negative failure count read as 0"
            );
        }
        let consecutive_failures =
            u32::try_from(self.consecutive_failures.max(0)).unwrap_or(u32::MAX);
        TrackerRecord {
            customer_id: self.customer_id,
            last_notified_at,
            consecutive_failures,
        }
    }
}

/// Tracker state in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TrackerError {
        TrackerError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ITrackerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<TrackerRecord>, TrackerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no tracker state yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let file: RawTrackingFile =
            serde_json::from_str(&content).map_err(|e| TrackerError::Serialization {
                message: format!("{}: {e}", self.path.display()),
            })?;

        let records: Vec<TrackerRecord> = file
            .tracking_data
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                match serde_json::from_value::<TrackingEntry>(value) {
                    Ok(entry) => Some(entry.into_record()),
                    Err(e) => {
                        warn!(index, error = %e, "skipping malformed tracking entry");
                        None
                    }
                }
            })
            .filter(|r| !r.is_empty())
            .collect();
        debug!(path = %self.path.display(), records = records.len(), "tracker state loaded");
        Ok(records)
    }

    fn save(&self, records: &[TrackerRecord]) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let file = TrackingFile {
            tracking_data: records.iter().map(TrackingEntry::from).collect(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| TrackerError::Serialization {
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), records = records.len(), "tracker state saved");
        Ok(())
    }
}
