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

//! # Scrim Model
//!
//! **The Core Domain Model for the Scrim Team Balancing Solver.**
//!
//! This crate defines the fundamental data structures used to represent a
//! custom-game lobby: entrants with a rank-derived skill rating and a required
//! lane, the mutable roster the registration layer owns, and the partition
//! state the annealing engine (`scrim_ls`) optimizes.
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **registration** and **solving**:
//!
//! * **`index`**: Strongly-typed wrappers (`PoolIndex`, `SlotIndex`, `TeamIndex`)
//!   to prevent logical indexing errors between the player pool and the lineup grid.
//! * **`role`** / **`rank`**: The fixed 5-lane set and the rank-label lookup that
//!   maps tiers and divisions to integer ratings.
//! * **`player`** / **`roster`**: Entrant records and the collaborator-owned
//!   registration list with its snapshot-then-clear transaction.
//! * **`grouping`**: Role bucketing: feasible team count, candidate selection,
//!   and the flattened candidates-first pool layout.
//! * **`lineup`** / **`team`**: The mutable slot grid the search operates on, and
//!   the immutable role-ordered teams handed back to callers.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: Indices are distinct types. You cannot accidentally use a
//!    `SlotIndex` to address the player pool.
//! 2. **Memory Layout**: The lineup is a flattened slot grid (`team * 5 + offset`)
//!    rather than nested vectors, keeping swaps and evaluation cache-friendly.
//! 3. **Fail-Fast**: Constructors validate eagerly; the solver never sees an
//!    inconsistent grouping or lineup.

pub mod grouping;
pub mod index;
pub mod lineup;
pub mod player;
pub mod rank;
pub mod rating;
pub mod role;
pub mod roster;
pub mod team;
