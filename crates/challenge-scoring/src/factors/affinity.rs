/// Category affinity bonus: `affinity × max_impact`.
///
/// Affinity is clamped to [-1, 1] first; NaN is neutral.
/// Range: `-max_impact` – `+max_impact`.
pub fn bonus(affinity: f64, max_impact: f64) -> f64 {
    if affinity.is_nan() {
        return 0.0;
    }
    affinity.clamp(-1.0, 1.0) * max_impact
}
