//! Difficulty simulation.
//!
//! Runs named scenarios through an engine and rates how hard each offer would
//! be against the unmodded success chance.

use std::fmt::{self, Write as _};

use challenge_core::constants::{SIMULATION_BASE_ENJOYMENT, VANILLA_SUCCESS_CHANCE};
use challenge_core::models::{OfferMultiplier, StandardsTier};
use challenge_core::traits::IDifficultyEngine;
use serde::{Deserialize, Serialize};

use crate::DifficultyEngine;

/// Difficulty bands over the final success chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRating {
    NearlyImpossible,
    ExtremelyHard,
    Hard,
    Medium,
    Easy,
    VeryEasy,
}

impl DifficultyRating {
    pub fn from_success_chance(chance: f64) -> Self {
        match chance {
            c if c < 0.10 => Self::NearlyImpossible,
            c if c < 0.30 => Self::ExtremelyHard,
            c if c < 0.50 => Self::Hard,
            c if c < 0.70 => Self::Medium,
            c if c < 0.85 => Self::Easy,
            _ => Self::VeryEasy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NearlyImpossible => "NEARLY IMPOSSIBLE",
            Self::ExtremelyHard => "EXTREMELY HARD",
            Self::Hard => "HARD",
            Self::Medium => "MEDIUM",
            Self::Easy => "EASY",
            Self::VeryEasy => "VERY EASY",
        }
    }
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One customer/product pairing to simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub affinity: f64,
    pub trait_matches: usize,
    #[serde(default)]
    pub standards: StandardsTier,
    #[serde(default = "default_base_enjoyment")]
    pub base_enjoyment: f64,
}

fn default_base_enjoyment() -> f64 {
    SIMULATION_BASE_ENJOYMENT
}

impl Scenario {
    pub fn new(name: impl Into<String>, affinity: f64, trait_matches: usize) -> Self {
        Self {
            name: name.into(),
            affinity,
            trait_matches,
            standards: StandardsTier::default(),
            base_enjoyment: SIMULATION_BASE_ENJOYMENT,
        }
    }

    pub fn with_standards(mut self, standards: StandardsTier) -> Self {
        self.standards = standards;
        self
    }

    /// Every trait-match count 0..=3 for one affinity.
    pub fn match_sweep(name: &str, affinity: f64, standards: StandardsTier) -> Vec<Self> {
        (0..=3)
            .rev()
            .map(|m| {
                Self::new(format!("{name}, {m} trait matches"), affinity, m).with_standards(standards)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub enjoyment: f64,
    pub multiplier: OfferMultiplier,
    /// `VANILLA_SUCCESS_CHANCE × multiplier.combined`.
    pub success_chance: f64,
    pub rating: DifficultyRating,
}

/// Run one scenario through the engine.
pub fn simulate(engine: &DifficultyEngine, scenario: &Scenario) -> ScenarioOutcome {
    let enjoyment = engine.score(
        scenario.base_enjoyment,
        scenario.affinity,
        scenario.trait_matches,
    );
    let multiplier = engine.offer_multiplier(enjoyment, scenario.standards);
    let success_chance = multiplier.apply(VANILLA_SUCCESS_CHANCE);
    ScenarioOutcome {
        scenario: scenario.clone(),
        enjoyment,
        multiplier,
        success_chance,
        rating: DifficultyRating::from_success_chance(success_chance),
    }
}

pub fn simulate_all(engine: &DifficultyEngine, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios.iter().map(|s| simulate(engine, s)).collect()
}

/// Plain-text report, one line per outcome.
pub fn render_report(engine: &DifficultyEngine, outcomes: &[ScenarioOutcome]) -> String {
    let mut out = String::new();
    let config = engine.config();
    let _ = writeln!(
        out,
        "preset: {} ({} multiplier), vanilla success {:.0}%",
        config.preset,
        engine.curve().name(),
        VANILLA_SUCCESS_CHANCE * 100.0
    );
    for o in outcomes {
        let _ = writeln!(
            out,
            "{:<40} enjoyment {:.3}  multiplier {:.3} x {:.2}  success {:>5.1}%  {}",
            o.scenario.name,
            o.enjoyment,
            o.multiplier.enjoyment_multiplier,
            o.multiplier.standards_penalty,
            o.success_chance * 100.0,
            o.rating
        );
    }
    out
}
