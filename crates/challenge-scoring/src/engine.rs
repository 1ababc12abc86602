use challenge_core::config::ChallengeConfig;
use challenge_core::constants::VERSION;
use challenge_core::errors::ConfigError;
use challenge_core::models::{
    CounterofferDecision, CounterofferRequest, EnjoymentBreakdown, OfferMultiplier,
    PreferenceProfile, ProductAttributes, StandardsTier,
};
use challenge_core::traits::{IDifficultyEngine, IRollSource};
use challenge_core::Preset;
use tracing::{debug, info};

use crate::multiplier::{self, MultiplierCurve};
use crate::{appeal, counteroffer, formula};

/// Difficulty engine over one resolved configuration.
///
/// The multiplier curve is built once from the configured policy; nothing else
/// is cached and no state changes between calls.
#[derive(Debug)]
pub struct DifficultyEngine {
    config: ChallengeConfig,
    curve: Box<dyn MultiplierCurve>,
}

impl DifficultyEngine {
    /// Build from a configuration that has already been validated.
    pub fn new(config: ChallengeConfig) -> Self {
        let curve = multiplier::build(&config.multiplier);
        info!(
            version = VERSION,
            preset = %config.preset,
            policy = curve.name(),
            "difficulty engine ready"
        );
        Self { config, curve }
    }

    /// Validate, then build.
    pub fn try_new(config: ChallengeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(ChallengeConfig::from_preset(preset))
    }

    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    pub fn curve(&self) -> &dyn MultiplierCurve {
        self.curve.as_ref()
    }

    /// Raw enjoyment contract: base, affinity and trait-match count.
    pub fn score(&self, base: f64, affinity: f64, trait_matches: usize) -> f64 {
        formula::score(base, affinity, trait_matches, &self.config.enjoyment)
    }

    /// Enjoyment multiplier from the configured curve, in [0, 1].
    pub fn enjoyment_multiplier(&self, enjoyment: f64) -> f64 {
        self.curve.multiplier(enjoyment)
    }

    pub fn standards_penalty(&self, tier: StandardsTier) -> f64 {
        multiplier::standards::penalty(&self.config.standards, tier)
    }

    /// Scale the host's offer success chance by the average enjoyment of the
    /// offered items. An empty offer leaves the chance unchanged.
    pub fn adjust_offer_success(
        &self,
        base_chance: f64,
        item_enjoyments: &[f64],
        standards: StandardsTier,
    ) -> f64 {
        if item_enjoyments.is_empty() {
            return base_chance;
        }
        let avg = formula::average(item_enjoyments);
        let multiplier = self.offer_multiplier(avg, standards);
        let adjusted = multiplier.apply(base_chance);
        debug!(
            items = item_enjoyments.len(),
            avg_enjoyment = avg,
            base_chance,
            adjusted,
            "offer success adjusted"
        );
        adjusted
    }

    /// Counteroffer acceptance without the reason.
    pub fn accept_counteroffer(
        &self,
        request: &CounterofferRequest,
        roll: &mut dyn IRollSource,
    ) -> bool {
        self.evaluate_counteroffer(request, roll).accepted
    }

    /// Request gate: drop a candidate below the request threshold.
    pub fn gate_request<T>(&self, candidate: Option<T>, appeal: f64) -> (Option<T>, f64) {
        let (kept, appeal_out) =
            appeal::gate_candidate(candidate, appeal, self.config.appeal.min_appeal_for_request);
        debug!(appeal, kept = kept.is_some(), "request candidate gated");
        (kept, appeal_out)
    }

    /// Success gate: whether a request search counts as a success for tracking.
    pub fn request_succeeded(&self, found_candidate: bool, appeal: f64) -> bool {
        appeal::request_succeeded(
            found_candidate,
            appeal,
            self.config.appeal.min_appeal_for_success,
        )
    }

    /// Average order spend; see [`counteroffer::average_order_spend`].
    pub fn average_order_spend(&self, weekly_spend: f64, order_days: usize) -> Option<f64> {
        counteroffer::average_order_spend(weekly_spend, order_days)
    }
}

impl Default for DifficultyEngine {
    fn default() -> Self {
        Self::new(ChallengeConfig::default())
    }
}

impl IDifficultyEngine for DifficultyEngine {
    fn enjoyment(
        &self,
        profile: Option<&PreferenceProfile>,
        product: &ProductAttributes,
        base: f64,
    ) -> EnjoymentBreakdown {
        let (affinity, matches) = match profile {
            Some(p) => (
                p.affinity(&product.category),
                p.has_preferred_traits().then(|| p.trait_matches(product)),
            ),
            None => (0.0, None),
        };
        let breakdown = formula::compute_breakdown(base, affinity, matches, &self.config.enjoyment);
        debug!(
            category = %product.category,
            price_ratio = ?product.price_ratio(),
            base = breakdown.base,
            affinity_bonus = breakdown.affinity_bonus,
            trait_bonus = breakdown.trait_bonus,
            trait_matches = breakdown.trait_matches,
            enjoyment = breakdown.enjoyment,
            "enjoyment scored"
        );
        breakdown
    }

    fn offer_multiplier(&self, enjoyment: f64, standards: StandardsTier) -> OfferMultiplier {
        OfferMultiplier::new(
            self.enjoyment_multiplier(enjoyment),
            self.standards_penalty(standards),
        )
    }

    fn evaluate_counteroffer(
        &self,
        request: &CounterofferRequest,
        roll: &mut dyn IRollSource,
    ) -> CounterofferDecision {
        let decision = counteroffer::evaluate(&self.config.counteroffer, request, roll);
        if decision.accepted {
            debug!(enjoyment = request.enjoyment, reason = %decision.reason, "counteroffer accepted");
        } else {
            info!(
                enjoyment = request.enjoyment,
                price = request.price,
                reason = %decision.reason,
                "counteroffer rejected"
            );
        }
        decision
    }

    fn is_request_appealing(&self, appeal: f64) -> bool {
        appeal::is_appealing(appeal, self.config.appeal.min_appeal_for_request)
    }
}
