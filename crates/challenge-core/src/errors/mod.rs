//! Error handling for the challenge engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! Scoring itself is infallible: out-of-range inputs are clamped, never rejected.
//! Only configuration loading and tracker persistence can fail.

pub mod config_error;
pub mod tracker_error;

pub use config_error::ConfigError;
pub use tracker_error::TrackerError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),
}

pub type ChallengeResult<T> = Result<T, ChallengeError>;
