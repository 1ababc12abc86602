//! Counteroffer acceptance.
//!
//! Evaluated in order, first match wins:
//! 1. the host already rejected it
//! 2. price at or above `avg_order_spend × price_limit_multiplier`
//! 3. enjoyment below `min_enjoyment`
//! 4. enjoyment below `mediocre_threshold`: one roll against a reject chance
//!    that falls linearly from `max_reject_chance` to 0 across the band
//! 5. accept
//!
//! The roll source is only touched in step 4.

use challenge_core::config::CounterofferConfig;
use challenge_core::models::{CounterofferDecision, CounterofferReason, CounterofferRequest};
use challenge_core::traits::IRollSource;

/// Run the acceptance checks for one counteroffer.
pub fn evaluate(
    config: &CounterofferConfig,
    request: &CounterofferRequest,
    roll: &mut dyn IRollSource,
) -> CounterofferDecision {
    if !request.prior_accept {
        return CounterofferDecision::reject(CounterofferReason::PriorRejection);
    }

    if let Some(limit) = price_limit(config, request.avg_order_spend) {
        if request.price >= limit {
            return CounterofferDecision::reject(CounterofferReason::PriceLimit { limit });
        }
    }

    let enjoyment = if request.enjoyment.is_nan() {
        0.0
    } else {
        request.enjoyment
    };

    if enjoyment < config.min_enjoyment {
        return CounterofferDecision::reject(CounterofferReason::EnjoymentTooLow {
            minimum: config.min_enjoyment,
        });
    }

    if enjoyment < config.mediocre_threshold {
        let reject_chance = reject_chance(config, enjoyment);
        let roll = roll.roll();
        return if roll < reject_chance {
            CounterofferDecision::reject(CounterofferReason::FailedRoll {
                reject_chance,
                roll,
            })
        } else {
            CounterofferDecision::accept(CounterofferReason::PassedRoll {
                reject_chance,
                roll,
            })
        };
    }

    CounterofferDecision::accept(CounterofferReason::Accepted)
}

/// Reject chance inside the mediocre band.
///
/// `max_reject_chance` at `min_enjoyment`, 0 at `mediocre_threshold`, linear in
/// between. Clamped outside the band.
pub fn reject_chance(config: &CounterofferConfig, enjoyment: f64) -> f64 {
    let span = config.mediocre_threshold - config.min_enjoyment;
    if span <= 0.0 {
        return 0.0;
    }
    let t = ((enjoyment - config.min_enjoyment) / span).clamp(0.0, 1.0);
    config.max_reject_chance * (1.0 - t)
}

/// Spend limit for a counteroffer, if the price check applies.
///
/// Skipped when the check is disabled or the average spend is unknown or NaN.
/// A zero or negative average spend gives a limit every price reaches.
pub fn price_limit(config: &CounterofferConfig, avg_order_spend: Option<f64>) -> Option<f64> {
    let multiplier = config.price_limit_multiplier?;
    let avg = avg_order_spend?;
    if avg.is_nan() {
        return None;
    }
    Some(avg * multiplier)
}

/// Average spend per order: adjusted weekly spend over the number of order days.
/// `None` when the customer has no order days.
pub fn average_order_spend(weekly_spend: f64, order_days: usize) -> Option<f64> {
    if order_days == 0 {
        return None;
    }
    Some(weekly_spend / order_days as f64)
}
