//! Configuration system for the challenge engine.
//! TOML-based, resolved as: explicit preset > env > file > preset defaults.
//!
//! Loaded once at process start and immutable afterwards. Swapping the
//! constant set (usually by picking another [`Preset`]) changes behavior
//! without changing code.

pub mod appeal_config;
pub mod challenge_config;
pub mod counteroffer_config;
pub mod enjoyment_config;
pub mod multiplier_config;
pub mod preset;
pub mod standards_config;
pub mod tracker_config;

pub use appeal_config::AppealConfig;
pub use challenge_config::ChallengeConfig;
pub use counteroffer_config::CounterofferConfig;
pub use enjoyment_config::{EnjoymentConfig, TraitTiers};
pub use multiplier_config::{
    BucketMultipliers, BucketedPolicy, ContinuousPolicy, EnjoymentThresholds, MultiplierPolicy,
};
pub use preset::Preset;
pub use standards_config::StandardsConfig;
pub use tracker_config::TrackerConfig;
