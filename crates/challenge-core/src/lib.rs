//! # challenge-core
//!
//! Foundation crate for the challenge difficulty engine.
//! Defines the data model, configuration presets, errors, traits, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{ChallengeConfig, Preset};
pub use errors::{ChallengeError, ChallengeResult, ConfigError, TrackerError};
pub use models::{PreferenceProfile, ProductAttributes, StandardsTier};
