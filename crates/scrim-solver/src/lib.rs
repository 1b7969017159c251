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

//! # Scrim Solver
//!
//! The high-level facade of the scrim workspace. Callers hand over an
//! entrant snapshot (typically the result of
//! `Roster::snapshot_and_clear`) and a [`config::BalanceConfig`]; the solver
//! buckets the snapshot by lane, seeds a lineup, anneals it under the
//! configured move policy, and returns the balanced teams, the waiting list,
//! and the final imbalance score.
//!
//! Every input yields a defined outcome. A snapshot that cannot field a
//! single complete team short-circuits to the degenerate result (no teams,
//! everyone waiting, score zero) without running the engine.

pub mod config;
pub mod outcome;
pub mod solver;

pub use config::{BalanceConfig, MovePolicy};
pub use outcome::{BalanceOutcome, BalanceTermination};
pub use solver::{partition, partition_with_rng};
