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

//! Entrant records.
//!
//! A [`Player`] is the immutable unit the optimizer partitions: an opaque
//! identity, a display name, the rank label it registered with, its required
//! lane, and the integer rating derived from the rank table. Records are
//! created by the registration layer and never change during a run.

use crate::rank::Rank;
use crate::rating::RatingValue;
use crate::role::Role;

/// An opaque, comparable entrant identity.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Creates a new `PlayerId`.
    #[inline(always)]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying key.
    #[inline(always)]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlayerId {
    #[inline(always)]
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

/// A registered entrant, immutable for the duration of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player<T> {
    id: PlayerId,
    name: String,
    rank: Rank,
    role: Role,
    rating: T,
}

impl<T> Player<T>
where
    T: RatingValue,
{
    /// Creates a player with an explicit rating.
    pub fn new(id: PlayerId, name: impl Into<String>, rank: Rank, role: Role, rating: T) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            role,
            rating,
        }
    }

    /// Creates a player whose rating comes from the rank table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scrim_model::player::{Player, PlayerId};
    /// # use scrim_model::rank::{Rank, RankTier};
    /// # use scrim_model::role::Role;
    /// let rank = Rank::new(RankTier::Gold, 2).unwrap();
    /// let player: Player<i32> = Player::from_rank(PlayerId::new(1), "Ashe", rank, Role::Adc);
    /// assert_eq!(player.rating(), 1400);
    /// ```
    pub fn from_rank(id: PlayerId, name: impl Into<String>, rank: Rank, role: Role) -> Self {
        let rating = T::from_i32(rank.rating_value()).unwrap_or_else(T::zero);
        Self::new(id, name, rank, role, rating)
    }

    /// Returns the entrant identity.
    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rank label the entrant registered with.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the required lane.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the skill rating.
    #[inline]
    pub fn rating(&self) -> T {
        self.rating
    }
}

impl<T> std::fmt::Display for Player<T>
where
    T: RatingValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} / {}, {})",
            self.name, self.rank, self.role, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::RankTier;

    #[test]
    fn test_from_rank_uses_lookup_table() {
        let rank = Rank::new(RankTier::Diamond, 3).unwrap();
        let player: Player<i32> =
            Player::from_rank(PlayerId::new(42), "Riven", rank, Role::Top);
        assert_eq!(player.rating(), 2600);
        assert_eq!(player.role(), Role::Top);
        assert_eq!(player.id(), PlayerId::new(42));
    }

    #[test]
    fn test_display_mentions_rank_and_lane() {
        let rank = Rank::new(RankTier::Gold, 2).unwrap();
        let player: Player<i32> = Player::from_rank(PlayerId::new(1), "Lux", rank, Role::Mid);
        assert_eq!(format!("{}", player), "Lux (Gold 2 / MID, 1400)");
    }
}
