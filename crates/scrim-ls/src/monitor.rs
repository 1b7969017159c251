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

//! Observation hooks for annealing runs.
//!
//! Monitors let callers watch a search without the engine knowing who is
//! listening. All hooks default to no-ops, so implementors override only
//! what they care about.

use crate::stats::AnnealStatistics;
use std::time::Instant;

/// An observer of annealing progress.
pub trait AnnealMonitor {
    /// Called once before the first iteration with the seed lineup's score.
    fn on_start(&mut self, initial_score: f64) {
        let _ = initial_score;
    }

    /// Called whenever the tracked best improves.
    fn on_new_best(&mut self, best_score: f64, stats: &AnnealStatistics) {
        let _ = (best_score, stats);
    }

    /// Called once after the run with the final best score.
    fn on_end(&mut self, best_score: f64, stats: &AnnealStatistics) {
        let _ = (best_score, stats);
    }
}

/// A monitor that observes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl AnnealMonitor for NoOpMonitor {}

/// A monitor printing a fixed-width incumbent table to stdout.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
}

impl LogMonitor {
    /// Creates a new log monitor.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for LogMonitor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl AnnealMonitor for LogMonitor {
    fn on_start(&mut self, initial_score: f64) {
        self.start_time = Instant::now();
        println!(
            "{:<9} | {:<11} | {:<10} | {:<12}",
            "Elapsed", "Iterations", "Accepted", "Best Score"
        );
        println!("{}", "-".repeat(50));
        println!(
            "{:<9} | {:<11} | {:<10} | {:<12.2}",
            "0.0s", 0, 0, initial_score
        );
    }

    fn on_new_best(&mut self, best_score: f64, stats: &AnnealStatistics) {
        let elapsed = format!("{:.1}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<11} | {:<10} | {:<12.2}",
            elapsed, stats.iterations, stats.accepted_moves, best_score
        );
    }

    fn on_end(&mut self, best_score: f64, stats: &AnnealStatistics) {
        println!(
            "Finished after {} iterations with best score {:.2}",
            stats.iterations, best_score
        );
    }
}
