use challenge_core::config::ContinuousPolicy;

use super::MultiplierCurve;
use crate::factors::clamp_unit;

/// `clamp(enjoyment × scale, floor, 1.0)`.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousCurve {
    policy: ContinuousPolicy,
}

impl ContinuousCurve {
    pub fn new(policy: ContinuousPolicy) -> Self {
        Self { policy }
    }
}

impl MultiplierCurve for ContinuousCurve {
    fn multiplier(&self, enjoyment: f64) -> f64 {
        let floor = clamp_unit(self.policy.floor);
        let raw = clamp_unit(enjoyment) * self.policy.scale;
        if raw.is_nan() {
            return floor;
        }
        raw.clamp(floor, 1.0)
    }

    fn name(&self) -> &'static str {
        "continuous"
    }
}
