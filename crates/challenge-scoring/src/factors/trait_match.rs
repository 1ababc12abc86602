use challenge_core::config::TraitTiers;

/// Tiered trait-match bonus over {0, 1, 2, 3+} matches.
pub fn bonus(matches: usize, tiers: &TraitTiers) -> f64 {
    match matches {
        0 => tiers.none,
        1 => tiers.one,
        2 => tiers.two,
        _ => tiers.three_or_more,
    }
}
