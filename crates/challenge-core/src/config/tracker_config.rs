//! Failure tracker configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{STATE_DIR_NAME, TRACKER_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// When false, the tracker records nothing and never notifies.
    pub enabled: bool,
    /// Consecutive failures needed before a notification.
    pub min_failures_before_message: u32,
    /// Minimum days between two notifications to the same customer.
    pub message_cooldown_days: u32,
    /// Explicit state file. Defaults to `ChallengeMod/product_request_tracking.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_path: Option<String>,
}

impl TrackerConfig {
    /// Resolve the state file, relative to `data_dir` unless configured explicitly.
    pub fn state_file(&self, data_dir: &std::path::Path) -> PathBuf {
        match &self.state_path {
            Some(path) => PathBuf::from(path),
            None => data_dir.join(STATE_DIR_NAME).join(TRACKER_FILE_NAME),
        }
    }
}
