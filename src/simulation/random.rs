//! Random variate generation
//!
//! The kernel draws every random quantity through [`RandomVariates`], so a run
//! is a deterministic function of the provider it was built with.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Normal};

use crate::simulation::{SimulationError, SimulationResult};

/// Source of the random quantities a run consumes
pub trait RandomVariates {
    /// Exponential sample with the given mean
    fn exponential(&mut self, mean: f64) -> SimulationResult<f64>;

    /// Normal sample, truncated at zero
    fn normal(&mut self, mean: f64, stdev: f64) -> SimulationResult<f64>;

    /// Bernoulli trial succeeding with `probability`
    fn accept(&mut self, probability: f64) -> SimulationResult<bool>;
}

/// Random variates drawn from a seedable generator
#[derive(Debug, Clone)]
pub struct StdRandomVariates<R: Rng = StdRng> {
    rng: R,
}

impl StdRandomVariates<StdRng> {
    /// Provider seeded deterministically
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Provider seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> StdRandomVariates<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomVariates for StdRandomVariates<R> {
    fn exponential(&mut self, mean: f64) -> SimulationResult<f64> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(SimulationError::invalid_distribution(format!(
                "exponential mean must be positive, got {}",
                mean
            )));
        }
        let exp = Exp::new(1.0 / mean)
            .map_err(|e| SimulationError::invalid_distribution(format!("{:?}", e)))?;
        Ok(exp.sample(&mut self.rng))
    }

    fn normal(&mut self, mean: f64, stdev: f64) -> SimulationResult<f64> {
        let normal = Normal::new(mean, stdev)
            .map_err(|e| SimulationError::invalid_distribution(format!("{:?}", e)))?;
        Ok(normal.sample(&mut self.rng).max(0.0))
    }

    fn accept(&mut self, probability: f64) -> SimulationResult<bool> {
        if !probability.is_finite() {
            return Err(SimulationError::invalid_distribution(format!(
                "acceptance probability must be finite, got {}",
                probability
            )));
        }
        Ok(self.rng.gen_bool(probability.clamp(0.0, 1.0)))
    }
}

/// Deterministic provider for tests and what-if traces
///
/// Every exponential draw returns `exponential`, every normal draw returns
/// `normal`. Accept/reject decisions are taken from the script in order and
/// fall back to `fallback` once it runs out. The probability of each
/// decision is recorded so callers can check which rate was consulted.
#[derive(Debug, Clone)]
pub struct ScriptedVariates {
    /// Value of every exponential sample
    pub exponential: f64,
    /// Value of every normal sample
    pub normal: f64,
    decisions: VecDeque<bool>,
    fallback: bool,
    probabilities: Vec<f64>,
}

impl ScriptedVariates {
    /// Constant samples, every decision accepted
    pub fn constant(exponential: f64, normal: f64) -> Self {
        Self {
            exponential,
            normal,
            decisions: VecDeque::new(),
            fallback: true,
            probabilities: Vec::new(),
        }
    }

    /// Queue accept/reject decisions ahead of the fallback
    pub fn with_decisions(mut self, decisions: impl IntoIterator<Item = bool>) -> Self {
        self.decisions.extend(decisions);
        self
    }

    /// Decision used once the script is exhausted
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Probabilities passed to `accept`, in call order
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Decisions still queued
    pub fn remaining_decisions(&self) -> usize {
        self.decisions.len()
    }
}

impl RandomVariates for ScriptedVariates {
    fn exponential(&mut self, _mean: f64) -> SimulationResult<f64> {
        Ok(self.exponential)
    }

    fn normal(&mut self, _mean: f64, _stdev: f64) -> SimulationResult<f64> {
        Ok(self.normal.max(0.0))
    }

    fn accept(&mut self, probability: f64) -> SimulationResult<bool> {
        self.probabilities.push(probability);
        Ok(self.decisions.pop_front().unwrap_or(self.fallback))
    }
}
