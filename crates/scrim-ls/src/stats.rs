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

//! Statistics reporting for annealing runs.
//!
//! A lightweight counter container updated from the hot loop. Counters use
//! saturating arithmetic so an absurd iteration budget can never trap on
//! overflow.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AnnealStatistics {
    /// Number of iterations performed, no-op proposals included.
    pub iterations: u64,

    /// Number of iterations that produced a candidate move.
    pub proposed_moves: u64,

    /// Number of accepted moves.
    pub accepted_moves: u64,

    /// Number of times the tracked best improved.
    pub best_updates: u64,

    /// Total wall-clock time of the run.
    pub time_total: Duration,
}

impl AnnealStatistics {
    /// Called at each iteration of the cooling loop.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when the operator produced a candidate move.
    #[inline]
    pub fn on_proposed_move(&mut self) {
        self.proposed_moves = self.proposed_moves.saturating_add(1);
    }

    /// Called when a candidate move is accepted.
    #[inline]
    pub fn on_accepted_move(&mut self) {
        self.accepted_moves = self.accepted_moves.saturating_add(1);
    }

    /// Called when the tracked best improves.
    #[inline]
    pub fn on_new_best(&mut self) {
        self.best_updates = self.best_updates.saturating_add(1);
    }

    /// Sets the total wall-clock time of the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the number of rejected moves.
    #[inline]
    pub fn rejected_moves(&self) -> u64 {
        self.proposed_moves.saturating_sub(self.accepted_moves)
    }
}

impl std::fmt::Display for AnnealStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Annealing Statistics:")?;
        writeln!(f, "   Iterations:      {}", self.iterations)?;
        writeln!(f, "   Proposed Moves:  {}", self.proposed_moves)?;
        writeln!(f, "   Accepted Moves:  {}", self.accepted_moves)?;
        writeln!(f, "   Rejected Moves:  {}", self.rejected_moves())?;
        writeln!(f, "   Best Updates:    {}", self.best_updates)?;
        writeln!(f, "   Total Time:      {:?}", self.time_total)?;
        Ok(())
    }
}
