//! Named constant sets.
//!
//! `harsh` and `lenient` use the bucketed success curve, `continuous` the
//! continuous one. Any preset can be partially overridden from TOML.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    AppealConfig, BucketMultipliers, BucketedPolicy, ChallengeConfig, ContinuousPolicy,
    CounterofferConfig, EnjoymentConfig, EnjoymentThresholds, MultiplierPolicy,
    StandardsConfig, TrackerConfig, TraitTiers,
};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Punishes zero trait matches, steep bucketed curve, no standards penalty.
    Harsh,
    /// Flat trait tiers, forgiving bucketed curve, standards penalty.
    Lenient,
    /// Flat trait tiers, continuous curve, standards penalty, no price limit.
    #[default]
    Continuous,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Harsh, Self::Lenient, Self::Continuous];

    pub fn name(self) -> &'static str {
        match self {
            Self::Harsh => "harsh",
            Self::Lenient => "lenient",
            Self::Continuous => "continuous",
        }
    }

    /// The full constant set for this preset.
    pub fn config(self) -> ChallengeConfig {
        match self {
            Self::Harsh => ChallengeConfig {
                preset: self,
                enjoyment: EnjoymentConfig {
                    affinity_max_impact: 0.3,
                    trait_tiers: TraitTiers {
                        none: -0.35,
                        one: 0.0,
                        two: 0.15,
                        three_or_more: 0.25,
                    },
                },
                multiplier: MultiplierPolicy::Bucketed(BucketedPolicy {
                    thresholds: EnjoymentThresholds {
                        critical_low: 0.25,
                        low: 0.45,
                        medium: 0.65,
                    },
                    multipliers: BucketMultipliers {
                        critical_low: 0.1,
                        low: 0.3,
                        medium: 0.6,
                        high: 1.0,
                    },
                }),
                standards: StandardsConfig::flat(),
                counteroffer: counteroffer(Some(2.0)),
                appeal: AppealConfig {
                    min_appeal_for_request: 0.6,
                    min_appeal_for_success: 0.4,
                },
                tracker: tracker(),
            },
            Self::Lenient => ChallengeConfig {
                preset: self,
                enjoyment: flat_tier_enjoyment(),
                multiplier: MultiplierPolicy::Bucketed(BucketedPolicy {
                    thresholds: EnjoymentThresholds {
                        critical_low: 0.20,
                        low: 0.35,
                        medium: 0.55,
                    },
                    multipliers: BucketMultipliers {
                        critical_low: 0.3,
                        low: 0.5,
                        medium: 0.75,
                        high: 1.0,
                    },
                }),
                standards: graded_standards(),
                counteroffer: counteroffer(Some(2.0)),
                appeal: AppealConfig {
                    min_appeal_for_request: 0.6,
                    min_appeal_for_success: 0.3,
                },
                tracker: tracker(),
            },
            Self::Continuous => ChallengeConfig {
                preset: self,
                enjoyment: flat_tier_enjoyment(),
                multiplier: MultiplierPolicy::Continuous(ContinuousPolicy {
                    scale: 1.25,
                    floor: 0.1,
                }),
                standards: graded_standards(),
                counteroffer: counteroffer(None),
                appeal: AppealConfig {
                    min_appeal_for_request: 0.6,
                    min_appeal_for_success: 0.3,
                },
                tracker: tracker(),
            },
        }
    }
}

fn flat_tier_enjoyment() -> EnjoymentConfig {
    EnjoymentConfig {
        affinity_max_impact: 0.3,
        trait_tiers: TraitTiers {
            none: 0.0,
            one: 0.10,
            two: 0.25,
            three_or_more: 0.45,
        },
    }
}

fn graded_standards() -> StandardsConfig {
    StandardsConfig {
        penalties: [1.0, 0.95, 0.9, 0.8, 0.7],
    }
}

fn counteroffer(price_limit_multiplier: Option<f64>) -> CounterofferConfig {
    CounterofferConfig {
        price_limit_multiplier,
        min_enjoyment: 0.4,
        mediocre_threshold: 0.6,
        max_reject_chance: 0.5,
    }
}

fn tracker() -> TrackerConfig {
    TrackerConfig {
        enabled: true,
        min_failures_before_message: 2,
        message_cooldown_days: 3,
        state_path: None,
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: s.to_string(),
                expected: Self::ALL.map(Preset::name).join(", "),
            })
    }
}
