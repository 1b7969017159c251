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

//! The mutable partition state the search operates on.
//!
//! A lineup is a flattened slot grid (`num_teams` teams of five slots, slot
//! `team * 5 + offset`) holding pool indices, plus an optional bench of
//! waiting pool indices that swap moves may exchange into play. The grid is
//! a Structure-of-Arrays view of the partition: swapping two slots is two
//! writes, and evaluation walks one contiguous vector.
//!
//! The seeded lineup implements the deliberate skew the search starts from:
//! with the pool's role-major layout (`role * num_teams + rank_within_role`),
//! slot `(team, role)` receives candidate `role * num_teams + team`, so team 0
//! concentrates the strongest entrant of every lane. Correcting that skew is
//! the annealing phase's job.

use crate::index::{PoolIndex, SlotIndex, TeamIndex};
use crate::role::Role;

/// A candidate partition: the slot grid plus the bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    /// `slots[team * 5 + offset]` is the pool index occupying that slot.
    slots: Vec<PoolIndex>,
    /// Waiting pool indices available as swap partners (empty in role-strict
    /// searches, where the waiting list is fixed).
    bench: Vec<PoolIndex>,
    num_teams: usize,
}

impl Lineup {
    /// Builds the seeded lineup over a role-major candidate pool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scrim_model::lineup::Lineup;
    /// # use scrim_model::index::TeamIndex;
    /// let lineup = Lineup::seeded(2);
    /// // Team 0 holds the strongest candidate of every role: pool indices
    /// // 0, 2, 4, 6, 8 under the role-major layout.
    /// let team0: Vec<usize> = lineup
    ///     .team(TeamIndex::new(0))
    ///     .iter()
    ///     .map(|i| i.get())
    ///     .collect();
    /// assert_eq!(team0, vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn seeded(num_teams: usize) -> Self {
        let mut slots = Vec::with_capacity(num_teams * Role::COUNT);
        for team in 0..num_teams {
            for role in 0..Role::COUNT {
                slots.push(PoolIndex::new(role * num_teams + team));
            }
        }
        Self {
            slots,
            bench: Vec::new(),
            num_teams,
        }
    }

    /// Builds the seeded lineup and benches the rest of the pool.
    ///
    /// # Panics
    ///
    /// Panics if `pool_len` is smaller than the candidate region.
    pub fn seeded_with_bench(num_teams: usize, pool_len: usize) -> Self {
        let candidate_count = num_teams * Role::COUNT;
        assert!(
            pool_len >= candidate_count,
            "called `Lineup::seeded_with_bench` with pool_len {} smaller than the candidate region {}",
            pool_len,
            candidate_count
        );

        let mut lineup = Self::seeded(num_teams);
        lineup.bench = (candidate_count..pool_len).map(PoolIndex::new).collect();
        lineup
    }

    /// Returns the number of teams.
    #[inline]
    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    /// Returns the number of slots (`5 * num_teams`).
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the pool index occupying a slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    #[inline]
    pub fn slot(&self, slot: SlotIndex) -> PoolIndex {
        self.slots[slot.get()]
    }

    /// Returns the five slots of one team.
    ///
    /// # Panics
    ///
    /// Panics if `team` is out of bounds.
    #[inline]
    pub fn team(&self, team: TeamIndex) -> &[PoolIndex] {
        let start = team.get() * Role::COUNT;
        &self.slots[start..start + Role::COUNT]
    }

    /// Returns an iterator over the teams' slot windows.
    #[inline]
    pub fn teams(&self) -> std::slice::ChunksExact<'_, PoolIndex> {
        self.slots.chunks_exact(Role::COUNT)
    }

    /// Returns the benched pool indices.
    #[inline]
    pub fn bench(&self) -> &[PoolIndex] {
        &self.bench
    }

    /// Returns every pool index the lineup references, slots first.
    pub fn indices(&self) -> impl Iterator<Item = PoolIndex> + '_ {
        self.slots.iter().chain(self.bench.iter()).copied()
    }

    /// Returns the slot index of `(team, offset)`.
    #[inline]
    pub fn slot_of(team: TeamIndex, offset: usize) -> SlotIndex {
        SlotIndex::new(team.get() * Role::COUNT + offset)
    }

    /// Exchanges the occupants of two slots.
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of bounds.
    #[inline]
    pub fn swap_slots(&mut self, a: SlotIndex, b: SlotIndex) {
        self.slots.swap(a.get(), b.get());
    }

    /// Exchanges a slot occupant with a benched entrant.
    ///
    /// # Panics
    ///
    /// Panics if `slot` or `bench_pos` is out of bounds.
    #[inline]
    pub fn swap_with_bench(&mut self, slot: SlotIndex, bench_pos: usize) {
        std::mem::swap(&mut self.slots[slot.get()], &mut self.bench[bench_pos]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_role_major_transpose() {
        let num_teams = 3;
        let lineup = Lineup::seeded(num_teams);
        assert_eq!(lineup.num_slots(), num_teams * Role::COUNT);
        assert!(lineup.bench().is_empty());

        for team in 0..num_teams {
            for role in 0..Role::COUNT {
                let slot = Lineup::slot_of(TeamIndex::new(team), role);
                assert_eq!(lineup.slot(slot).get(), role * num_teams + team);
            }
        }
    }

    #[test]
    fn test_seeded_with_bench_covers_pool_tail() {
        let lineup = Lineup::seeded_with_bench(2, 13);
        let benched: Vec<usize> = lineup.bench().iter().map(|i| i.get()).collect();
        assert_eq!(benched, vec![10, 11, 12]);
    }

    #[test]
    #[should_panic(expected = "called `Lineup::seeded_with_bench`")]
    fn test_seeded_with_bench_rejects_short_pool() {
        let _ = Lineup::seeded_with_bench(2, 9);
    }

    #[test]
    fn test_swap_slots_is_an_involution() {
        let mut lineup = Lineup::seeded(2);
        let original = lineup.clone();
        let a = Lineup::slot_of(TeamIndex::new(0), 1);
        let b = Lineup::slot_of(TeamIndex::new(1), 1);

        lineup.swap_slots(a, b);
        assert_ne!(lineup, original);
        lineup.swap_slots(a, b);
        assert_eq!(lineup, original, "applying a swap twice must undo it");
    }

    #[test]
    fn test_swap_with_bench_is_an_involution() {
        let mut lineup = Lineup::seeded_with_bench(2, 12);
        let original = lineup.clone();
        let slot = Lineup::slot_of(TeamIndex::new(1), 3);

        lineup.swap_with_bench(slot, 1);
        assert_eq!(lineup.slot(slot).get(), 11);
        assert_eq!(lineup.bench()[1].get(), original.slot(slot).get());

        lineup.swap_with_bench(slot, 1);
        assert_eq!(lineup, original);
    }

    #[test]
    fn test_indices_cover_slots_and_bench() {
        let lineup = Lineup::seeded_with_bench(1, 7);
        let mut seen: Vec<usize> = lineup.indices().map(|i| i.get()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }
}
