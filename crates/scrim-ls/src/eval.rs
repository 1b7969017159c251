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

//! Imbalance energy for candidate lineups.
//!
//! The annealing objective is a weighted sum of three imbalance measures,
//! lower is better:
//!
//! - **Rating spread**: the population standard deviation of per-team rating
//!   sums. Teams hoarding total skill diverge from the mean and are penalized.
//! - **Lane diversity penalty**: for each team, `5 − distinct lanes fielded`.
//!   Structurally zero for role-preserving searches; it is what keeps the
//!   unconstrained policy from collapsing teams onto duplicate lanes.
//! - **Star spread**: the population standard deviation of per-team counts of
//!   "star players", the top `min(population, 2 * num_teams)` entrants by
//!   rating. This spreads the strongest entrants across teams instead of
//!   letting one team stack them.
//!
//! The energy depends only on the multiset of per-team compositions, so it is
//! invariant under reordering teams or reordering members within a team.
//! Star membership is fixed for a whole run and precomputed into a bit set;
//! evaluation walks the slot grid once with small stack-allocated scratch
//! buffers, keeping the hot loop allocation-free.

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use num_traits::ToPrimitive;
use scrim_model::index::PoolIndex;
use scrim_model::lineup::Lineup;
use scrim_model::player::Player;
use scrim_model::rating::RatingValue;
use scrim_model::role::Role;
use smallvec::{smallvec, SmallVec};

/// Weights of the three energy components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImbalanceWeights {
    /// Weight of the per-team rating-sum standard deviation.
    pub rating_spread: f64,

    /// Weight of the missing-lane penalty.
    pub lane_diversity: f64,

    /// Weight of the star-player distribution standard deviation.
    pub star_spread: f64,
}

impl Default for ImbalanceWeights {
    /// The production weighting: lane gaps dominate rating spread, and star
    /// stacking dominates both.
    #[inline]
    fn default() -> Self {
        Self {
            rating_spread: 1.0,
            lane_diversity: 100.0,
            star_spread: 500.0,
        }
    }
}

/// A trait for scoring candidate lineups.
pub trait LineupEvaluator<T>
where
    T: RatingValue,
{
    /// Returns the name of the evaluator.
    fn name(&self) -> &str;

    /// Returns the imbalance energy of a lineup over the given pool.
    /// Lower is better.
    fn evaluate(&self, players: &[Player<T>], lineup: &Lineup) -> f64;
}

/// The composite imbalance evaluator used by every search policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ImbalanceEvaluator {
    weights: ImbalanceWeights,
    /// Star membership by pool index, fixed for the whole run.
    stars: FixedBitSet,
}

impl ImbalanceEvaluator {
    /// Creates an evaluator over a pool.
    ///
    /// `population` is the number of leading pool entries eligible to appear
    /// in a team: the candidate region for role-preserving searches, the
    /// whole pool when benched entrants can rotate in. The top
    /// `min(population, 2 * num_teams)` of those entries by rating become
    /// star players; rating ties are broken by pool order.
    ///
    /// # Panics
    ///
    /// Panics if `population` exceeds the pool length.
    pub fn new<T>(
        players: &[Player<T>],
        population: usize,
        num_teams: usize,
        weights: ImbalanceWeights,
    ) -> Self
    where
        T: RatingValue,
    {
        assert!(
            population <= players.len(),
            "called `ImbalanceEvaluator::new` with population {} exceeding the pool length {}",
            population,
            players.len()
        );

        let num_stars = population.min(2 * num_teams);
        let mut stars = FixedBitSet::with_capacity(players.len());
        for index in (0..population)
            .sorted_by(|&a, &b| players[b].rating().cmp(&players[a].rating()))
            .take(num_stars)
        {
            stars.insert(index);
        }

        Self { weights, stars }
    }

    /// Returns the component weights.
    #[inline]
    pub fn weights(&self) -> ImbalanceWeights {
        self.weights
    }

    /// Returns `true` if the pool entry counts as a star player.
    #[inline]
    pub fn is_star(&self, index: PoolIndex) -> bool {
        self.stars.contains(index.get())
    }
}

impl<T> LineupEvaluator<T> for ImbalanceEvaluator
where
    T: RatingValue,
{
    fn name(&self) -> &str {
        "ImbalanceEvaluator"
    }

    fn evaluate(&self, players: &[Player<T>], lineup: &Lineup) -> f64 {
        let num_teams = lineup.num_teams();
        if num_teams == 0 {
            return 0.0;
        }

        let mut rating_sums: SmallVec<[f64; 8]> = smallvec![0.0; num_teams];
        let mut star_counts: SmallVec<[f64; 8]> = smallvec![0.0; num_teams];
        let mut lane_penalty = 0.0;

        for (team, slots) in lineup.teams().enumerate() {
            let mut role_mask = 0u8;
            for &pool_index in slots {
                let player = &players[pool_index.get()];
                rating_sums[team] += player.rating().to_f64().unwrap_or(0.0);
                role_mask |= 1 << player.role().index();
                if self.stars.contains(pool_index.get()) {
                    star_counts[team] += 1.0;
                }
            }
            lane_penalty += (Role::COUNT - role_mask.count_ones() as usize) as f64;
        }

        self.weights.rating_spread * population_std_dev(&rating_sums)
            + self.weights.lane_diversity * lane_penalty
            + self.weights.star_spread * population_std_dev(&star_counts)
    }
}

/// Population standard deviation; `0.0` for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}
