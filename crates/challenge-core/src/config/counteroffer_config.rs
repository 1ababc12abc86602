//! Counteroffer acceptance configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterofferConfig {
    /// Reject when price >= average order spend × this. `None` disables the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_limit_multiplier: Option<f64>,
    /// Below this enjoyment a counteroffer is always rejected.
    pub min_enjoyment: f64,
    /// At or above this enjoyment a counteroffer is always accepted.
    pub mediocre_threshold: f64,
    /// Reject chance at `min_enjoyment`, falling linearly to 0 at `mediocre_threshold`.
    pub max_reject_chance: f64,
}
