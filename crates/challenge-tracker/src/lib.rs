//! # challenge-tracker
//!
//! Counts consecutive failed product requests per customer and decides when a
//! customer should send a "looking for something" notification: after enough
//! failures, and no sooner than the cooldown since the last one.
//!
//! State lives in an explicit [`FailureTracker`] with injected persistence
//! ([`ITrackerStore`](challenge_core::traits::ITrackerStore)). Persistence
//! failures are logged, never fatal.

pub mod persistence;
pub mod tracker;

pub use persistence::{JsonFileStore, MemoryStore};
pub use tracker::{FailureTracker, TrackerOutcome};
