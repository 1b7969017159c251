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

//! Role bucketing and candidate selection.
//!
//! Before any search runs, the entrant snapshot is grouped by lane. The
//! feasible team count is the size of the thinnest lane bucket, the top
//! `num_teams` entrants of every lane (by rating, ties broken by stable
//! registration order) become candidates, and everyone else waits.
//!
//! The grouping flattens everything into a single pool vector laid out for
//! the search: candidates first in role-major order (`role * num_teams +
//! rank_within_role`), then the per-role leftovers in role order. The seeded
//! lineup and the evaluator both rely on this layout.
//!
//! Every input produces a defined grouping. Fewer than five entrants, or any
//! empty lane bucket, yields the degenerate grouping: zero teams and the
//! whole snapshot (in registration order) waiting.

use crate::player::Player;
use crate::rating::RatingValue;
use crate::role::Role;

/// The bucketized entrant snapshot: feasible team count plus the flattened
/// candidates-first pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrouping<T> {
    /// Candidates in role-major order, then leftovers in role order. For the
    /// degenerate grouping, the snapshot in registration order.
    players: Vec<Player<T>>,
    num_teams: usize,
}

impl<T> RoleGrouping<T>
where
    T: RatingValue,
{
    /// Buckets an entrant snapshot by lane and selects candidates.
    pub fn from_players(players: &[Player<T>]) -> Self {
        if players.len() < Role::COUNT {
            return Self::degenerate(players);
        }

        let mut buckets: [Vec<&Player<T>>; Role::COUNT] = Default::default();
        for player in players {
            buckets[player.role().index()].push(player);
        }

        // The thinnest lane bounds the number of complete teams.
        let num_teams = buckets.iter().map(Vec::len).min().unwrap_or(0);
        if num_teams == 0 {
            return Self::degenerate(players);
        }

        for bucket in &mut buckets {
            // Stable descending sort: ties keep registration order.
            bucket.sort_by(|a, b| b.rating().cmp(&a.rating()));
        }

        let mut pool = Vec::with_capacity(players.len());
        for bucket in &buckets {
            pool.extend(bucket[..num_teams].iter().map(|p| (*p).clone()));
        }
        for bucket in &buckets {
            pool.extend(bucket[num_teams..].iter().map(|p| (*p).clone()));
        }

        Self {
            players: pool,
            num_teams,
        }
    }

    fn degenerate(players: &[Player<T>]) -> Self {
        Self {
            players: players.to_vec(),
            num_teams: 0,
        }
    }

    /// Returns the number of complete teams this snapshot can field.
    #[inline]
    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    /// Returns `true` if no team can be formed.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.num_teams == 0
    }

    /// Returns the whole pool: candidates first, then leftovers.
    #[inline]
    pub fn players(&self) -> &[Player<T>] {
        &self.players
    }

    /// Returns the number of entrants in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the number of candidate entries (`5 * num_teams`).
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.num_teams * Role::COUNT
    }

    /// Returns the candidates in role-major order.
    #[inline]
    pub fn candidates(&self) -> &[Player<T>] {
        &self.players[..self.candidate_count()]
    }

    /// Returns the waiting entrants, flattened in role order.
    #[inline]
    pub fn leftovers(&self) -> &[Player<T>] {
        &self.players[self.candidate_count()..]
    }
}
