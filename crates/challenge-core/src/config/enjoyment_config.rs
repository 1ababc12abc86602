//! Enjoyment scoring configuration.

use serde::{Deserialize, Serialize};

/// Trait-match bonus per match count. Must be non-decreasing.
///
/// A negative `none` punishes products that match nothing the customer wants;
/// `none = 0.0` gives the flat, no-penalty variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitTiers {
    pub none: f64,
    pub one: f64,
    pub two: f64,
    pub three_or_more: f64,
}

impl TraitTiers {
    /// Tier values in match-count order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.none, self.one, self.two, self.three_or_more]
    }
}

/// Configuration for the enjoyment adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnjoymentConfig {
    /// Bonus at affinity ±1. Kept in [0.2, 0.35] so affinity stays a secondary factor.
    pub affinity_max_impact: f64,
    pub trait_tiers: TraitTiers,
}
