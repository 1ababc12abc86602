use std::fmt;

use serde::{Deserialize, Serialize};

/// Inputs for a counteroffer evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterofferRequest {
    /// The host's own verdict. A rejection here is never overturned.
    pub prior_accept: bool,
    /// Enjoyment of the countered product at the customer's standards.
    pub enjoyment: f64,
    /// Total asking price of the counteroffer.
    pub price: f64,
    /// The customer's average spend per order. `None` skips the price check.
    pub avg_order_spend: Option<f64>,
}

/// Why a counteroffer was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CounterofferReason {
    /// The host had already rejected it.
    PriorRejection,
    /// Price reached the configured multiple of average order spend.
    PriceLimit { limit: f64 },
    /// Enjoyment below the hard minimum.
    EnjoymentTooLow { minimum: f64 },
    /// Mediocre enjoyment and the roll landed under the reject chance.
    FailedRoll { reject_chance: f64, roll: f64 },
    /// Mediocre enjoyment but the roll cleared the reject chance.
    PassedRoll { reject_chance: f64, roll: f64 },
    /// Enjoyment at or above the mediocre threshold.
    Accepted,
}

/// Outcome of a counteroffer evaluation. Carries no state across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterofferDecision {
    pub accepted: bool,
    pub reason: CounterofferReason,
}

impl CounterofferDecision {
    pub fn accept(reason: CounterofferReason) -> Self {
        Self {
            accepted: true,
            reason,
        }
    }

    pub fn reject(reason: CounterofferReason) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }
}

impl fmt::Display for CounterofferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorRejection => write!(f, "already rejected"),
            Self::PriceLimit { limit } => write!(f, "price at or above {limit:.2} (spend limit)"),
            Self::EnjoymentTooLow { minimum } => write!(f, "enjoyment below {minimum:.3}"),
            Self::FailedRoll {
                reject_chance,
                roll,
            } => write!(
                f,
                "failed probability check (reject chance {:.0}%, roll {roll:.3})",
                reject_chance * 100.0
            ),
            Self::PassedRoll {
                reject_chance,
                roll,
            } => write!(
                f,
                "passed probability check (reject chance {:.0}%, roll {roll:.3})",
                reject_chance * 100.0
            ),
            Self::Accepted => write!(f, "good enjoyment"),
        }
    }
}
