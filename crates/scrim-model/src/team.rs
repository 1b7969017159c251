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

//! Assembled output teams.

use crate::player::Player;
use crate::rating::RatingValue;
use crate::role::Role;
use num_traits::ToPrimitive;
use smallvec::SmallVec;

/// An immutable team handed back to the caller, members in lane order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team<T> {
    players: SmallVec<[Player<T>; Role::COUNT]>,
}

impl<T> Team<T>
where
    T: RatingValue,
{
    /// Assembles a team, ordering members by lane.
    pub fn from_players(players: impl IntoIterator<Item = Player<T>>) -> Self {
        let mut players: SmallVec<[Player<T>; Role::COUNT]> = players.into_iter().collect();
        players.sort_by_key(|p| p.role().index());
        Self { players }
    }

    /// Returns the members in lane order.
    #[inline]
    pub fn players(&self) -> &[Player<T>] {
        &self.players
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the team has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns `true` if the team fields exactly one member per lane.
    pub fn has_full_role_coverage(&self) -> bool {
        if self.players.len() != Role::COUNT {
            return false;
        }
        let mut mask = 0u8;
        for player in &self.players {
            mask |= 1 << player.role().index();
        }
        mask.count_ones() as usize == Role::COUNT
    }

    /// Returns the mean member rating, or `0.0` for an empty team.
    pub fn average_rating(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .players
            .iter()
            .map(|p| p.rating().to_f64().unwrap_or(0.0))
            .sum();
        sum / self.players.len() as f64
    }
}

impl<T> std::fmt::Display for Team<T>
where
    T: RatingValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Average rating: {:.0}", self.average_rating())?;
        for player in &self.players {
            writeln!(f, "  - {} ({} / {})", player.name(), player.rank(), player.role())?;
        }
        Ok(())
    }
}
