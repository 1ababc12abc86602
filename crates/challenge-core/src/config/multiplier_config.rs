//! Success-multiplier policy configuration.

use serde::{Deserialize, Serialize};

/// Lower bounds of the low, medium and high enjoyment buckets.
/// Enjoyment below `critical_low` falls into the critical bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnjoymentThresholds {
    pub critical_low: f64,
    pub low: f64,
    pub medium: f64,
}

/// Multiplier per enjoyment bucket, critical through high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketMultipliers {
    pub critical_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl BucketMultipliers {
    pub fn as_array(&self) -> [f64; 4] {
        [self.critical_low, self.low, self.medium, self.high]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketedPolicy {
    pub thresholds: EnjoymentThresholds,
    pub multipliers: BucketMultipliers,
}

/// `clamp(enjoyment * scale, floor, 1.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousPolicy {
    /// Above 1.0, high enjoyment reaches the 1.0 ceiling early (1.25 → from 0.8).
    pub scale: f64,
    /// Keeps the outcome possible: the multiplier never reaches zero.
    pub floor: f64,
}

impl Default for ContinuousPolicy {
    fn default() -> Self {
        Self {
            scale: 1.25,
            floor: 0.1,
        }
    }
}

/// Shape of the enjoyment → success multiplier curve, chosen at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum MultiplierPolicy {
    Bucketed(BucketedPolicy),
    Continuous(ContinuousPolicy),
}

impl MultiplierPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bucketed(_) => "bucketed",
            Self::Continuous(_) => "continuous",
        }
    }
}
