//! Standards penalty configuration.

use serde::{Deserialize, Serialize};

use crate::constants::STANDARDS_TIER_COUNT;
use crate::models::StandardsTier;

/// Multiplier per standards tier, VeryLow through VeryHigh.
/// Non-increasing: stricter customers never get a larger multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsConfig {
    pub penalties: [f64; STANDARDS_TIER_COUNT],
}

impl StandardsConfig {
    /// No penalty at any tier.
    pub fn flat() -> Self {
        Self {
            penalties: [1.0; STANDARDS_TIER_COUNT],
        }
    }

    /// Configured penalty for `tier`, before clamping.
    pub fn penalty(&self, tier: StandardsTier) -> f64 {
        self.penalties[tier.ordinal()]
    }
}
