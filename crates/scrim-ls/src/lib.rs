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

//! # Scrim Local Search
//!
//! Simulated annealing over team lineups. This crate contains the search
//! layer of the scrim workspace: the imbalance energy function, the two
//! move-proposal policies (role-preserving and unconstrained), the pluggable
//! cooling schedules, and the Metropolis engine that drives them.
//!
//! The engine is deliberately narrow: it owns no domain knowledge beyond the
//! `Lineup` state it mutates, and every stochastic decision flows through an
//! injected `rand::Rng`, so a fixed seed reproduces a run bit for bit.

pub mod cooling;
pub mod engine;
pub mod eval;
pub mod monitor;
pub mod operator;
pub mod result;
pub mod stats;
