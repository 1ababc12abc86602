use serde::{Deserialize, Serialize};

/// Each contribution to an enjoyment score, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnjoymentBreakdown {
    /// Enjoyment the host computed before adjustment.
    pub base: f64,
    pub affinity_bonus: f64,
    pub trait_bonus: f64,
    /// Preferred traits found on the product.
    pub trait_matches: usize,
    /// `clamp(base + affinity_bonus + trait_bonus, 0, 1)`.
    pub enjoyment: f64,
}

/// Multiplier applied to the host's offer success chance.
///
/// Both factors are clamped individually; `combined` is their product and is
/// not clamped again, so it can sit below either factor's floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferMultiplier {
    pub enjoyment_multiplier: f64,
    pub standards_penalty: f64,
    pub combined: f64,
}

impl OfferMultiplier {
    pub fn new(enjoyment_multiplier: f64, standards_penalty: f64) -> Self {
        Self {
            enjoyment_multiplier,
            standards_penalty,
            combined: enjoyment_multiplier * standards_penalty,
        }
    }

    /// Scale a success chance by the combined multiplier.
    pub fn apply(&self, chance: f64) -> f64 {
        chance * self.combined
    }
}
