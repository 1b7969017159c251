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

//! Cooling schedules for the annealing engine.
//!
//! The temperature governs how willing the search is to accept worsening
//! moves. Separating temperature management from acceptance logic lets
//! different decay strategies be plugged in without touching the engine.
//! When a schedule reports a frozen state, the engine stops: the remaining
//! acceptance probability is negligible and further iterations would be a
//! greedy descent over a neighborhood the search has already settled in.

/// Defines the thermodynamics of the annealing process.
///
/// Implementors control the initial temperature, the decay function, and the
/// "frozen" condition that terminates the cooling loop.
pub trait CoolingSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature to its initial state.
    /// Called once at the start of the search.
    fn on_start(&mut self);

    /// Updates the temperature for the next iteration.
    /// Called after every iteration, whether or not a move was proposed.
    fn update(&mut self);

    /// Returns the current temperature.
    fn current(&self) -> f64;

    /// Returns `true` once the temperature has reached the floor.
    fn is_frozen(&self) -> bool;
}

/// Geometric decay: every update multiplies the temperature by a factor in
/// `(0, 1)`. Cools quickly at first, then settles slowly near the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    initial: f64,
    current: f64,
    rate: f64,
    floor: f64,
}

impl GeometricCooling {
    /// Creates a new geometric cooling schedule.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not strictly between `0.0` and `1.0`.
    #[inline]
    pub fn new(initial: f64, rate: f64, floor: f64) -> Self {
        assert!(
            rate > 0.0 && rate < 1.0,
            "called `GeometricCooling::new()` with invalid rate: {}. Must be in (0.0, 1.0)",
            rate
        );
        Self {
            initial,
            current: initial,
            rate,
            floor,
        }
    }
}

impl CoolingSchedule for GeometricCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current *= self.rate;
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.floor
    }
}

/// Linear decay: every update subtracts a fixed decrement, clamped at zero.
///
/// Useful with a fixed iteration budget where the temperature should hit the
/// floor exactly at the deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCooling {
    initial: f64,
    current: f64,
    decrement: f64,
    floor: f64,
}

impl LinearCooling {
    /// Creates a new linear cooling schedule.
    #[inline]
    pub fn new(initial: f64, decrement: f64, floor: f64) -> Self {
        Self {
            initial,
            current: initial,
            decrement,
            floor,
        }
    }
}

impl CoolingSchedule for LinearCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.current = (self.current - self.decrement).max(0.0);
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_decay_and_freeze() {
        let mut cooling = GeometricCooling::new(100.0, 0.5, 10.0);
        assert_eq!(cooling.current(), 100.0);
        assert!(!cooling.is_frozen());

        cooling.update();
        assert_eq!(cooling.current(), 50.0);
        cooling.update();
        cooling.update();
        cooling.update();
        // 100 * 0.5^4 = 6.25 <= floor
        assert!(cooling.is_frozen());
    }

    #[test]
    fn test_geometric_reset_on_start() {
        let mut cooling = GeometricCooling::new(100.0, 0.5, 0.0);
        cooling.update();
        cooling.update();
        cooling.on_start();
        assert_eq!(cooling.current(), 100.0);
    }

    #[test]
    fn test_geometric_reaches_floor_in_expected_iterations() {
        // With the production defaults the floor is reached after roughly
        // 5_700 iterations: 1000 * 0.998^n <= 0.01 when n >= ln(1e-5)/ln(0.998).
        let mut cooling = GeometricCooling::new(1000.0, 0.998, 0.01);
        let mut iterations = 0u64;
        while !cooling.is_frozen() {
            cooling.update();
            iterations += 1;
            assert!(iterations < 50_000, "schedule must freeze well before the cap");
        }
        assert!((5_000..6_500).contains(&iterations));
    }

    #[test]
    #[should_panic(expected = "called `GeometricCooling::new()` with invalid rate")]
    fn test_geometric_rejects_rate_of_one() {
        let _ = GeometricCooling::new(100.0, 1.0, 0.0);
    }

    #[test]
    fn test_linear_decay_clamps_at_zero() {
        let mut cooling = LinearCooling::new(1.0, 0.6, 0.0);
        cooling.update();
        assert!((cooling.current() - 0.4).abs() < 1e-12);
        cooling.update();
        assert_eq!(cooling.current(), 0.0);
        assert!(cooling.is_frozen());
    }
}
