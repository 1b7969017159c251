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

//! Annealing outcome and termination reporting.
//!
//! The outcome bundles the best lineup discovered (not necessarily the last
//! accepted one), its score, aggregate statistics, and why the run stopped.

use crate::stats::AnnealStatistics;
use scrim_model::lineup::Lineup;

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnealTerminationReason {
    /// The temperature reached the configured floor. This is the normal stop.
    TemperatureFloor,

    /// The iteration cap was exhausted before the schedule froze.
    IterationLimit,
}

impl std::fmt::Display for AnnealTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnealTerminationReason::TemperatureFloor => write!(f, "Temperature Floor Reached"),
            AnnealTerminationReason::IterationLimit => write!(f, "Iteration Limit Reached"),
        }
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealOutcome {
    lineup: Lineup,
    score: f64,
    termination_reason: AnnealTerminationReason,
    statistics: AnnealStatistics,
}

impl AnnealOutcome {
    /// Creates a new outcome.
    #[inline]
    pub fn new(
        lineup: Lineup,
        score: f64,
        termination_reason: AnnealTerminationReason,
        statistics: AnnealStatistics,
    ) -> Self {
        Self {
            lineup,
            score,
            termination_reason,
            statistics,
        }
    }

    /// Returns the best lineup discovered.
    #[inline]
    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    /// Returns the best score discovered.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns why the run stopped.
    #[inline]
    pub fn termination_reason(&self) -> AnnealTerminationReason {
        self.termination_reason
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &AnnealStatistics {
        &self.statistics
    }
}
