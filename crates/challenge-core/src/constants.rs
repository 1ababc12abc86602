/// Challenge engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of standards tiers (VeryLow through VeryHigh).
pub const STANDARDS_TIER_COUNT: usize = 5;

/// Success chance the host assigns to an average offer before any adjustment.
/// Used by the difficulty simulation.
pub const VANILLA_SUCCESS_CHANCE: f64 = 0.70;

/// Base enjoyment assumed by the difficulty simulation.
pub const SIMULATION_BASE_ENJOYMENT: f64 = 0.5;

/// Directory holding challenge state, relative to the host's data directory.
pub const STATE_DIR_NAME: &str = "ChallengeMod";

/// File name of the persisted request tracker.
pub const TRACKER_FILE_NAME: &str = "product_request_tracking.json";

/// Environment variable selecting the active preset.
pub const ENV_PRESET: &str = "CHALLENGE_PRESET";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "CHALLENGE_LOG";
