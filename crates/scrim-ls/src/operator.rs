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

//! Move-proposal policies for the annealing engine.
//!
//! This module defines the `MoveOperator` trait separating how candidate
//! moves are generated from how they are accepted, plus the two policies the
//! solver ships:
//!
//! - [`RoleStrictSwap`] exchanges the holders of one lane between two teams.
//!   Both entrants land in a slot of their own lane, so the one-per-lane
//!   invariant survives every move by construction.
//! - [`UnconstrainedSwap`] exchanges arbitrary slot holders across teams and
//!   occasionally rotates a benched entrant into play. Lane purity is then
//!   maintained only by the energy function's diversity penalty.
//!
//! Both swap kinds are involutions: applying the same move twice restores the
//! previous lineup, which is how the engine rolls back rejected candidates.
//!
//! An operator may decline to propose (`None`) when no eligible move exists,
//! such as fewer than two teams for a cross-team swap or an empty bench for
//! a rotation.
//! The engine treats that as a no-op iteration; the cooling schedule still
//! advances.

use rand::Rng;
use scrim_model::lineup::Lineup;
use scrim_model::index::{SlotIndex, TeamIndex};
use scrim_model::player::Player;
use scrim_model::rating::RatingValue;
use scrim_model::role::Role;

/// A reversible exchange on a lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapMove {
    /// Exchange the occupants of two slots.
    Slots { a: SlotIndex, b: SlotIndex },

    /// Exchange a slot occupant with a benched entrant.
    Bench { slot: SlotIndex, bench_pos: usize },
}

impl SwapMove {
    /// Applies the exchange. Applying the same move again undoes it.
    #[inline]
    pub fn apply(&self, lineup: &mut Lineup) {
        match *self {
            SwapMove::Slots { a, b } => lineup.swap_slots(a, b),
            SwapMove::Bench { slot, bench_pos } => lineup.swap_with_bench(slot, bench_pos),
        }
    }
}

/// A stateful policy proposing candidate moves for the current lineup.
pub trait MoveOperator<T, R>
where
    T: RatingValue,
    R: Rng,
{
    /// Returns the name of the operator for logging and identification.
    fn name(&self) -> &str;

    /// Proposes the next candidate move, or `None` if no eligible move
    /// exists for this lineup.
    fn propose(
        &mut self,
        players: &[Player<T>],
        lineup: &Lineup,
        rng: &mut R,
    ) -> Option<SwapMove>;
}

/// Samples two distinct team indices uniformly.
#[inline]
fn distinct_teams<R: Rng>(num_teams: usize, rng: &mut R) -> (TeamIndex, TeamIndex) {
    let first = rng.random_range(0..num_teams);
    let mut second = rng.random_range(0..num_teams - 1);
    if second >= first {
        second += 1;
    }
    (TeamIndex::new(first), TeamIndex::new(second))
}

/// The role-preserving policy: swap the holders of one lane between two
/// distinct teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleStrictSwap;

impl RoleStrictSwap {
    /// Creates a new role-strict swap policy.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns the slot of `team` holding `role`, if present.
    fn find_role_slot<T>(
        players: &[Player<T>],
        lineup: &Lineup,
        team: TeamIndex,
        role: Role,
    ) -> Option<SlotIndex>
    where
        T: RatingValue,
    {
        lineup
            .team(team)
            .iter()
            .position(|&pool_index| players[pool_index.get()].role() == role)
            .map(|offset| Lineup::slot_of(team, offset))
    }
}

impl<T, R> MoveOperator<T, R> for RoleStrictSwap
where
    T: RatingValue,
    R: Rng,
{
    fn name(&self) -> &str {
        "RoleStrictSwap"
    }

    fn propose(
        &mut self,
        players: &[Player<T>],
        lineup: &Lineup,
        rng: &mut R,
    ) -> Option<SwapMove> {
        let num_teams = lineup.num_teams();
        if num_teams < 2 {
            return None;
        }

        let (first, second) = distinct_teams(num_teams, rng);
        let role = Role::ALL[rng.random_range(0..Role::COUNT)];

        // Both teams hold the lane exactly once on any lineup this policy has
        // produced; the lookup only misses on foreign (non-strict) lineups.
        let a = Self::find_role_slot(players, lineup, first, role)?;
        let b = Self::find_role_slot(players, lineup, second, role)?;
        Some(SwapMove::Slots { a, b })
    }
}

/// The unconstrained policy: swap arbitrary slots across teams, occasionally
/// rotating a benched entrant into play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnconstrainedSwap {
    bench_swap_probability: f64,
}

impl UnconstrainedSwap {
    /// Creates a new unconstrained swap policy.
    ///
    /// `bench_swap_probability` is the chance a proposal exchanges a slot
    /// holder with a benched entrant instead of crossing two teams.
    ///
    /// # Panics
    ///
    /// Panics if `bench_swap_probability` is not within `0.0..=1.0`.
    #[inline]
    pub fn new(bench_swap_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&bench_swap_probability),
            "called `UnconstrainedSwap::new()` with invalid bench_swap_probability: {}. Must be in [0.0, 1.0]",
            bench_swap_probability
        );
        Self {
            bench_swap_probability,
        }
    }

    /// Returns the bench rotation probability.
    #[inline]
    pub fn bench_swap_probability(&self) -> f64 {
        self.bench_swap_probability
    }
}

impl<T, R> MoveOperator<T, R> for UnconstrainedSwap
where
    T: RatingValue,
    R: Rng,
{
    fn name(&self) -> &str {
        "UnconstrainedSwap"
    }

    fn propose(
        &mut self,
        _players: &[Player<T>],
        lineup: &Lineup,
        rng: &mut R,
    ) -> Option<SwapMove> {
        let num_teams = lineup.num_teams();
        let can_cross_teams = num_teams >= 2;
        let can_rotate_bench = !lineup.bench().is_empty() && lineup.num_slots() > 0;
        if !can_cross_teams && !can_rotate_bench {
            return None;
        }

        let rotate = can_rotate_bench
            && (!can_cross_teams || rng.random_bool(self.bench_swap_probability));

        if rotate {
            let slot = SlotIndex::new(rng.random_range(0..lineup.num_slots()));
            let bench_pos = rng.random_range(0..lineup.bench().len());
            Some(SwapMove::Bench { slot, bench_pos })
        } else {
            let (first, second) = distinct_teams(num_teams, rng);
            let a = Lineup::slot_of(first, rng.random_range(0..Role::COUNT));
            let b = Lineup::slot_of(second, rng.random_range(0..Role::COUNT));
            Some(SwapMove::Slots { a, b })
        }
    }
}
