use challenge_core::config::BucketedPolicy;

use super::MultiplierCurve;
use crate::factors::clamp_unit;

/// Step function over four enjoyment buckets.
///
/// A threshold belongs to the bucket above it: enjoyment exactly at
/// `thresholds.low` gets the low multiplier, not the critical one.
#[derive(Debug, Clone, Copy)]
pub struct BucketedCurve {
    policy: BucketedPolicy,
}

impl BucketedCurve {
    pub fn new(policy: BucketedPolicy) -> Self {
        Self { policy }
    }

    /// Bucket index, 0 = critical through 3 = high.
    pub fn bucket(&self, enjoyment: f64) -> usize {
        let e = clamp_unit(enjoyment);
        let t = &self.policy.thresholds;
        if e < t.critical_low {
            0
        } else if e < t.low {
            1
        } else if e < t.medium {
            2
        } else {
            3
        }
    }
}

impl MultiplierCurve for BucketedCurve {
    fn multiplier(&self, enjoyment: f64) -> f64 {
        clamp_unit(self.policy.multipliers.as_array()[self.bucket(enjoyment)])
    }

    fn name(&self) -> &'static str {
        "bucketed"
    }
}
