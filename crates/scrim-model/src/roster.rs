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

//! The registration roster.
//!
//! The roster is the explicit state object the registration layer owns: an
//! insertion-ordered entry list keyed by [`PlayerId`]. Re-entering updates the
//! existing record in place (keeping the original position), so an entrant's
//! slot in the waiting-list tie-break never moves just because they corrected
//! their rank.
//!
//! The optimizer never touches a live roster. Callers take an atomic
//! [`snapshot_and_clear`](Roster::snapshot_and_clear) immediately before
//! partitioning, which both hands over an immutable entrant list and opens
//! registration for the next round.

use crate::player::{Player, PlayerId};
use crate::rating::RatingValue;
use crate::role::Role;

/// An insertion-ordered registration list keyed by entrant identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster<T> {
    entries: Vec<Player<T>>,
}

impl<T> Default for Roster<T> {
    #[inline]
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Roster<T>
where
    T: RatingValue,
{
    /// Creates an empty roster.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of registered entrants.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the given entrant is registered.
    #[inline]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.iter().any(|p| p.id() == id)
    }

    /// Returns the entry for the given entrant, if registered.
    #[inline]
    pub fn get(&self, id: PlayerId) -> Option<&Player<T>> {
        self.entries.iter().find(|p| p.id() == id)
    }

    /// Registers an entrant, or updates their existing entry in place.
    ///
    /// Returns `true` if an existing entry was updated, `false` for a fresh
    /// registration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scrim_model::player::{Player, PlayerId};
    /// # use scrim_model::rank::{Rank, RankTier};
    /// # use scrim_model::role::Role;
    /// # use scrim_model::roster::Roster;
    /// let mut roster: Roster<i32> = Roster::new();
    /// let rank = Rank::new(RankTier::Silver, 1).unwrap();
    /// let fresh = roster.enter(Player::from_rank(PlayerId::new(1), "Jinx", rank, Role::Adc));
    /// assert!(!fresh);
    /// assert_eq!(roster.len(), 1);
    /// ```
    pub fn enter(&mut self, player: Player<T>) -> bool {
        if let Some(existing) = self.entries.iter_mut().find(|p| p.id() == player.id()) {
            *existing = player;
            true
        } else {
            self.entries.push(player);
            false
        }
    }

    /// Withdraws an entrant, returning their entry if they were registered.
    pub fn withdraw(&mut self, id: PlayerId) -> Option<Player<T>> {
        let position = self.entries.iter().position(|p| p.id() == id)?;
        Some(self.entries.remove(position))
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in registration order.
    #[inline]
    pub fn players(&self) -> &[Player<T>] {
        &self.entries
    }

    /// Returns an iterator over the entries in registration order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Player<T>> {
        self.entries.iter()
    }

    /// Returns the number of registered entrants per role, indexed by
    /// [`Role::index`].
    pub fn role_counts(&self) -> [usize; Role::COUNT] {
        let mut counts = [0usize; Role::COUNT];
        for player in &self.entries {
            counts[player.role().index()] += 1;
        }
        counts
    }

    /// Takes the current entries and clears the roster in one step.
    ///
    /// This is the snapshot-then-clear transaction: the returned list is what
    /// the optimizer partitions, and registration for the next round starts
    /// from an empty roster the moment this returns.
    #[inline]
    pub fn snapshot_and_clear(&mut self) -> Vec<Player<T>> {
        std::mem::take(&mut self.entries)
    }
}
