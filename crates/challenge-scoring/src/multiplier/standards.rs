use challenge_core::config::StandardsConfig;
use challenge_core::models::StandardsTier;

use crate::factors::clamp_unit;

/// Standards penalty for a tier, clamped to [0, 1].
pub fn penalty(config: &StandardsConfig, tier: StandardsTier) -> f64 {
    clamp_unit(config.penalty(tier))
}

/// Penalty for a raw tier ordinal from the host. Unknown ordinals are unpenalized.
pub fn penalty_for_ordinal(config: &StandardsConfig, ordinal: i64) -> f64 {
    usize::try_from(ordinal)
        .ok()
        .and_then(StandardsTier::from_ordinal)
        .map(|tier| penalty(config, tier))
        .unwrap_or(1.0)
}
