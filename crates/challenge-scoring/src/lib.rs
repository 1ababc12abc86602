//! # challenge-scoring
//!
//! The difficulty engine. Rescales values the host simulation already computed:
//! enjoyment (affinity + trait matches), the offer success multiplier
//! (bucketed or continuous curve × standards penalty), counteroffer acceptance,
//! and the request-appeal gates.
//!
//! Everything here is pure except the counteroffer roll, which draws from an
//! injected [`IRollSource`](challenge_core::traits::IRollSource).

pub mod appeal;
pub mod counteroffer;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod multiplier;
pub mod roll;
pub mod simulation;

pub use engine::DifficultyEngine;
pub use multiplier::MultiplierCurve;
pub use roll::{FixedRoll, RngRoll, SequenceRoll};
pub use simulation::{DifficultyRating, Scenario, ScenarioOutcome};
