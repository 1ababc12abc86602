use crate::models::{
    CounterofferDecision, CounterofferRequest, EnjoymentBreakdown, OfferMultiplier,
    PreferenceProfile, ProductAttributes, StandardsTier,
};
use crate::traits::IRollSource;

/// Scoring surface consumed by the host's offer evaluation.
///
/// Every method except `evaluate_counteroffer` is pure; that one draws at most
/// one value from the supplied roll source.
pub trait IDifficultyEngine: Send + Sync {
    /// Adjust the host's base enjoyment by affinity and trait matches.
    /// A missing profile is neutral.
    fn enjoyment(
        &self,
        profile: Option<&PreferenceProfile>,
        product: &ProductAttributes,
        base: f64,
    ) -> EnjoymentBreakdown;

    /// Multiplier for the host's offer success chance.
    fn offer_multiplier(&self, enjoyment: f64, standards: StandardsTier) -> OfferMultiplier;

    /// Decide whether a counteroffer the host accepted should stand.
    fn evaluate_counteroffer(
        &self,
        request: &CounterofferRequest,
        roll: &mut dyn IRollSource,
    ) -> CounterofferDecision;

    /// Whether a generated request candidate is appealing enough to offer.
    fn is_request_appealing(&self, appeal: f64) -> bool;
}
