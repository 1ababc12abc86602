use challenge_core::config::EnjoymentConfig;
use challenge_core::models::EnjoymentBreakdown;

use crate::factors::{self, clamp_unit};

/// Enjoyment adjustment.
///
/// ```text
/// enjoyment = clamp(base + affinity × affinityMaxImpact + tier(traitMatches), 0, 1)
/// ```
///
/// Referentially transparent: same inputs, same output.
pub fn score(base: f64, affinity: f64, trait_matches: usize, config: &EnjoymentConfig) -> f64 {
    compute_breakdown(base, affinity, Some(trait_matches), config).enjoyment
}

/// Compute the enjoyment with each contribution kept apart.
///
/// `trait_matches = None` means the customer has no trait preferences, which
/// contributes nothing rather than falling into the zero-match tier.
pub fn compute_breakdown(
    base: f64,
    affinity: f64,
    trait_matches: Option<usize>,
    config: &EnjoymentConfig,
) -> EnjoymentBreakdown {
    let base = if base.is_nan() { 0.0 } else { base };
    let affinity_bonus = factors::affinity::bonus(affinity, config.affinity_max_impact);
    let trait_bonus = trait_matches
        .map(|m| factors::trait_match::bonus(m, &config.trait_tiers))
        .unwrap_or(0.0);

    EnjoymentBreakdown {
        base,
        affinity_bonus,
        trait_bonus,
        trait_matches: trait_matches.unwrap_or(0),
        enjoyment: clamp_unit(base + affinity_bonus + trait_bonus),
    }
}

/// Mean enjoyment across offered items. An empty offer scores 0.
pub fn average(enjoyments: &[f64]) -> f64 {
    if enjoyments.is_empty() {
        return 0.0;
    }
    enjoyments.iter().sum::<f64>() / enjoyments.len() as f64
}
