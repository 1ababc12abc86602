//! Top-level challenge configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AppealConfig, CounterofferConfig, EnjoymentConfig, MultiplierPolicy, Preset,
    StandardsConfig, TrackerConfig,
};
use crate::constants::ENV_PRESET;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. Explicit preset passed by the caller
/// 2. `CHALLENGE_PRESET` and the other `CHALLENGE_*` environment variables
/// 3. The TOML file (`preset = "..."` plus any partial section overrides)
/// 4. The default preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    pub preset: Preset,
    pub enjoyment: EnjoymentConfig,
    pub multiplier: MultiplierPolicy,
    pub standards: StandardsConfig,
    pub counteroffer: CounterofferConfig,
    pub appeal: AppealConfig,
    pub tracker: TrackerConfig,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl ChallengeConfig {
    pub fn from_preset(preset: Preset) -> Self {
        preset.config()
    }

    /// Load configuration with layered resolution, reading the process environment.
    pub fn load(path: Option<&Path>, preset: Option<Preset>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, preset, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(
        path: Option<&Path>,
        preset: Option<Preset>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (file_table, origin) = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|_| {
                    ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    }
                })?;
                (
                    Some(parse_table(&content, &path.display().to_string())?),
                    path.display().to_string(),
                )
            }
            None => (None, "<defaults>".to_string()),
        };

        let env_preset = env(ENV_PRESET).map(|name| name.parse::<Preset>()).transpose()?;
        let mut config = Self::resolve(file_table, preset.or(env_preset), &origin)?;
        config.apply_env_overrides(env);
        config.validate()?;

        tracing::info!(
            preset = %config.preset,
            policy = config.multiplier.name(),
            source = %origin,
            "challenge config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let table = parse_table(toml_str, "<string>")?;
        let config = Self::resolve(Some(table), None, "<string>")?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the preset, then deep-merge the file's sections over it.
    fn resolve(
        file_table: Option<toml::Table>,
        preset: Option<Preset>,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        let mut file_table = file_table.unwrap_or_default();

        let file_preset = match file_table.remove("preset") {
            Some(toml::Value::String(name)) => Some(name.parse::<Preset>()?),
            Some(other) => {
                return Err(ConfigError::ParseError {
                    path: origin.to_string(),
                    message: format!("`preset` must be a string, found {}", other.type_str()),
                })
            }
            None => None,
        };

        let base = preset.or(file_preset).unwrap_or_default().config();
        if file_table.is_empty() {
            return Ok(base);
        }

        let mut merged = toml::Value::try_from(&base).map_err(|e| ConfigError::ParseError {
            path: "<preset>".to_string(),
            message: e.to_string(),
        })?;
        merge_value(&mut merged, toml::Value::Table(file_table));

        merged.try_into().map_err(|e: toml::de::Error| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `CHALLENGE_AFFINITY_MAX_IMPACT`, `CHALLENGE_TRACKER_ENABLED`, etc.
    /// Unparsable values are ignored.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env("CHALLENGE_AFFINITY_MAX_IMPACT").and_then(|v| v.parse::<f64>().ok()) {
            self.enjoyment.affinity_max_impact = v;
        }
        if let Some(v) =
            env("CHALLENGE_COUNTEROFFER_MIN_ENJOYMENT").and_then(|v| v.parse::<f64>().ok())
        {
            self.counteroffer.min_enjoyment = v;
        }
        if let Some(v) =
            env("CHALLENGE_COUNTEROFFER_MEDIOCRE_THRESHOLD").and_then(|v| v.parse::<f64>().ok())
        {
            self.counteroffer.mediocre_threshold = v;
        }
        if let Some(v) = env("CHALLENGE_TRACKER_ENABLED").and_then(|v| v.parse::<bool>().ok()) {
            self.tracker.enabled = v;
        }
        if let Some(v) = env("CHALLENGE_TRACKER_STATE_PATH") {
            self.tracker.state_path = Some(v);
        }
    }

    /// Validate the balance invariants of the constant set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let impact = self.enjoyment.affinity_max_impact;
        if !(0.2..=0.35).contains(&impact) {
            return Err(ConfigError::validation(
                "enjoyment.affinity_max_impact",
                "must be between 0.2 and 0.35",
            ));
        }

        let tiers = self.enjoyment.trait_tiers.as_array();
        check_finite("enjoyment.trait_tiers", &tiers)?;
        if !is_non_decreasing(&tiers) {
            return Err(ConfigError::validation(
                "enjoyment.trait_tiers",
                "bonus must not decrease as matches increase",
            ));
        }

        match &self.multiplier {
            MultiplierPolicy::Bucketed(policy) => {
                let t = policy.thresholds;
                let ordered = 0.0 <= t.critical_low
                    && t.critical_low < t.low
                    && t.low < t.medium
                    && t.medium <= 1.0;
                if !ordered {
                    return Err(ConfigError::validation(
                        "multiplier.thresholds",
                        "must satisfy 0 <= critical_low < low < medium <= 1",
                    ));
                }
                let multipliers = policy.multipliers.as_array();
                check_unit_range("multiplier.multipliers", &multipliers)?;
                if !is_non_decreasing(&multipliers) {
                    return Err(ConfigError::validation(
                        "multiplier.multipliers",
                        "must not decrease as enjoyment buckets increase",
                    ));
                }
            }
            MultiplierPolicy::Continuous(policy) => {
                if !(policy.scale.is_finite() && policy.scale > 0.0) {
                    return Err(ConfigError::validation(
                        "multiplier.scale",
                        "must be greater than 0",
                    ));
                }
                if !(policy.floor > 0.0 && policy.floor <= 1.0) {
                    return Err(ConfigError::validation(
                        "multiplier.floor",
                        "must be in (0, 1]",
                    ));
                }
            }
        }

        let penalties = &self.standards.penalties;
        if penalties.iter().any(|p| !(*p > 0.0 && *p <= 1.0)) {
            return Err(ConfigError::validation(
                "standards.penalties",
                "each penalty must be in (0, 1]",
            ));
        }
        if penalties.windows(2).any(|w| w[1] > w[0]) {
            return Err(ConfigError::validation(
                "standards.penalties",
                "must not increase with stricter tiers",
            ));
        }

        let co = &self.counteroffer;
        let ordered = 0.0 <= co.min_enjoyment
            && co.min_enjoyment < co.mediocre_threshold
            && co.mediocre_threshold <= 1.0;
        if !ordered {
            return Err(ConfigError::validation(
                "counteroffer",
                "must satisfy 0 <= min_enjoyment < mediocre_threshold <= 1",
            ));
        }
        if !(0.0..=1.0).contains(&co.max_reject_chance) {
            return Err(ConfigError::validation(
                "counteroffer.max_reject_chance",
                "must be between 0.0 and 1.0",
            ));
        }
        if let Some(limit) = co.price_limit_multiplier {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(ConfigError::validation(
                    "counteroffer.price_limit_multiplier",
                    "must be greater than 0",
                ));
            }
        }

        check_finite(
            "appeal",
            &[
                self.appeal.min_appeal_for_request,
                self.appeal.min_appeal_for_success,
            ],
        )?;

        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_table(content: &str, origin: &str) -> Result<toml::Table, ConfigError> {
    toml::from_str::<toml::Table>(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Recursively overlay `overlay` onto `base`. Tables merge key by key,
/// everything else is replaced.
fn merge_value(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn check_finite(field: &str, values: &[f64]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::validation(field, "values must be finite"))
    }
}

fn check_unit_range(field: &str, values: &[f64]) -> Result<(), ConfigError> {
    if values.iter().all(|v| (0.0..=1.0).contains(v)) {
        Ok(())
    } else {
        Err(ConfigError::validation(field, "values must be between 0.0 and 1.0"))
    }
}
