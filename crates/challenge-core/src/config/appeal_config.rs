//! Request-appeal gate configuration.

use serde::{Deserialize, Serialize};

/// Appeal is the host's composite of enjoyment and price factor, roughly [-1, 2].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppealConfig {
    /// Candidates below this are not offered as requests at all.
    pub min_appeal_for_request: f64,
    /// Searches below this count as a failed request for the tracker.
    pub min_appeal_for_success: f64,
}
