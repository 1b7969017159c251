// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Solver configuration.
//!
//! All tunables of a balancing run live here, defaulted to the production
//! values. Validation is fail-fast: a nonsensical tunable is a programmer
//! error, not a runtime condition, so [`BalanceConfig::validate`] panics
//! rather than returning a result.

use scrim_ls::eval::ImbalanceWeights;

/// The default initial temperature.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1000.0;

/// The default geometric cooling rate.
pub const DEFAULT_COOLING_RATE: f64 = 0.998;

/// The default temperature floor terminating the cooling loop.
pub const DEFAULT_TEMPERATURE_FLOOR: f64 = 0.01;

/// The default iteration cap. With the default schedule the floor is reached
/// after roughly 5,700 iterations; the cap is a safety bound.
pub const DEFAULT_MAX_ITERATIONS: u64 = 50_000;

/// The default probability of a bench rotation in unconstrained mode.
pub const DEFAULT_BENCH_SWAP_PROBABILITY: f64 = 0.2;

/// The move-proposal policy a balancing run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MovePolicy {
    /// Swap the holders of one lane between two teams; every team keeps
    /// exactly one entrant per lane.
    #[default]
    RoleStrict,

    /// Swap arbitrary slot holders across teams and occasionally rotate a
    /// benched entrant into play; lane purity is kept only by the energy
    /// function's diversity penalty.
    Unconstrained,
}

impl std::fmt::Display for MovePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovePolicy::RoleStrict => write!(f, "RoleStrict"),
            MovePolicy::Unconstrained => write!(f, "Unconstrained"),
        }
    }
}

/// Tunables of a balancing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceConfig {
    /// Initial annealing temperature.
    pub initial_temperature: f64,

    /// Geometric decay factor applied after every iteration.
    pub cooling_rate: f64,

    /// Temperature at which the run stops.
    pub temperature_floor: f64,

    /// Safety cap on cooling-loop iterations.
    pub max_iterations: u64,

    /// Weights of the imbalance energy components.
    pub weights: ImbalanceWeights,

    /// The move-proposal policy.
    pub move_policy: MovePolicy,

    /// Probability of a bench rotation per proposal (unconstrained mode
    /// only).
    pub bench_swap_probability: f64,
}

impl Default for BalanceConfig {
    #[inline]
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling_rate: DEFAULT_COOLING_RATE,
            temperature_floor: DEFAULT_TEMPERATURE_FLOOR,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            weights: ImbalanceWeights::default(),
            move_policy: MovePolicy::default(),
            bench_swap_probability: DEFAULT_BENCH_SWAP_PROBABILITY,
        }
    }
}

impl BalanceConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the move policy.
    #[inline]
    pub fn with_move_policy(mut self, move_policy: MovePolicy) -> Self {
        self.move_policy = move_policy;
        self
    }

    /// Sets the energy weights.
    #[inline]
    pub fn with_weights(mut self, weights: ImbalanceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the initial temperature.
    #[inline]
    pub fn with_initial_temperature(mut self, initial_temperature: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self
    }

    /// Sets the cooling rate.
    #[inline]
    pub fn with_cooling_rate(mut self, cooling_rate: f64) -> Self {
        self.cooling_rate = cooling_rate;
        self
    }

    /// Sets the temperature floor.
    #[inline]
    pub fn with_temperature_floor(mut self, temperature_floor: f64) -> Self {
        self.temperature_floor = temperature_floor;
        self
    }

    /// Sets the iteration cap.
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the bench rotation probability.
    #[inline]
    pub fn with_bench_swap_probability(mut self, bench_swap_probability: f64) -> Self {
        self.bench_swap_probability = bench_swap_probability;
        self
    }

    /// Validates the configuration.
    ///
    /// # Panics
    ///
    /// Panics if any tunable is outside its domain.
    pub fn validate(&self) {
        assert!(
            self.initial_temperature.is_finite() && self.initial_temperature > 0.0,
            "called `BalanceConfig::validate` with invalid initial_temperature: {}. Must be finite and positive",
            self.initial_temperature
        );
        assert!(
            self.cooling_rate > 0.0 && self.cooling_rate < 1.0,
            "called `BalanceConfig::validate` with invalid cooling_rate: {}. Must be in (0.0, 1.0)",
            self.cooling_rate
        );
        assert!(
            self.temperature_floor.is_finite() && self.temperature_floor >= 0.0,
            "called `BalanceConfig::validate` with invalid temperature_floor: {}. Must be finite and non-negative",
            self.temperature_floor
        );
        assert!(
            (0.0..=1.0).contains(&self.bench_swap_probability),
            "called `BalanceConfig::validate` with invalid bench_swap_probability: {}. Must be in [0.0, 1.0]",
            self.bench_swap_probability
        );
        for (name, weight) in [
            ("rating_spread", self.weights.rating_spread),
            ("lane_diversity", self.weights.lane_diversity),
            ("star_spread", self.weights.star_spread),
        ] {
            assert!(
                weight.is_finite() && weight >= 0.0,
                "called `BalanceConfig::validate` with invalid weight {}: {}. Must be finite and non-negative",
                name,
                weight
            );
        }
    }
}
