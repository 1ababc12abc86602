//! Roll sources for counteroffer evaluation.

use challenge_core::traits::IRollSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform rolls from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoll<R: Rng> {
    rng: R,
}

impl<R: Rng> RngRoll<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRoll<StdRng> {
    /// Reproducible rolls for simulations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngRoll<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> IRollSource for RngRoll<R> {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same value. Counts draws.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll {
    value: f64,
    draws: usize,
}

impl FixedRoll {
    pub fn new(value: f64) -> Self {
        Self { value, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl IRollSource for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.draws += 1;
        self.value
    }
}

/// Replays a fixed sequence, cycling when it runs out. An empty sequence rolls 0.
#[derive(Debug, Clone)]
pub struct SequenceRoll {
    values: Vec<f64>,
    draws: usize,
}

impl SequenceRoll {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            draws: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl IRollSource for SequenceRoll {
    fn roll(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value
    }
}
