//! Enjoyment → success multiplier curves and the standards penalty.

pub mod bucketed;
pub mod continuous;
pub mod standards;

use std::fmt;

use challenge_core::config::MultiplierPolicy;

pub use bucketed::BucketedCurve;
pub use continuous::ContinuousCurve;

/// A success multiplier curve. Output always lies in [0, 1].
pub trait MultiplierCurve: fmt::Debug + Send + Sync {
    fn multiplier(&self, enjoyment: f64) -> f64;

    /// Policy name for logs.
    fn name(&self) -> &'static str;
}

/// Build the curve a configuration selects.
pub fn build(policy: &MultiplierPolicy) -> Box<dyn MultiplierCurve> {
    match policy {
        MultiplierPolicy::Bucketed(p) => Box::new(BucketedCurve::new(*p)),
        MultiplierPolicy::Continuous(p) => Box::new(ContinuousCurve::new(*p)),
    }
}
