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

//! The balancing result handed back to callers.

use scrim_ls::result::AnnealTerminationReason;
use scrim_ls::stats::AnnealStatistics;
use scrim_model::player::Player;
use scrim_model::rating::RatingValue;
use scrim_model::team::Team;

/// Why a balancing run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceTermination {
    /// The snapshot could not field a single complete team; the engine never
    /// ran.
    Degenerate,

    /// The cooling schedule reached its floor. This is the normal stop.
    TemperatureFloor,

    /// The iteration cap was exhausted before the schedule froze.
    IterationLimit,
}

impl From<AnnealTerminationReason> for BalanceTermination {
    #[inline]
    fn from(reason: AnnealTerminationReason) -> Self {
        match reason {
            AnnealTerminationReason::TemperatureFloor => BalanceTermination::TemperatureFloor,
            AnnealTerminationReason::IterationLimit => BalanceTermination::IterationLimit,
        }
    }
}

impl std::fmt::Display for BalanceTermination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceTermination::Degenerate => write!(f, "Degenerate Snapshot"),
            BalanceTermination::TemperatureFloor => write!(f, "Temperature Floor Reached"),
            BalanceTermination::IterationLimit => write!(f, "Iteration Limit Reached"),
        }
    }
}

/// The balanced teams, the waiting list, and the final score of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceOutcome<T> {
    teams: Vec<Team<T>>,
    waiting: Vec<Player<T>>,
    score: f64,
    statistics: AnnealStatistics,
    termination: BalanceTermination,
}

impl<T> BalanceOutcome<T>
where
    T: RatingValue,
{
    /// Creates a new outcome.
    #[inline]
    pub fn new(
        teams: Vec<Team<T>>,
        waiting: Vec<Player<T>>,
        score: f64,
        statistics: AnnealStatistics,
        termination: BalanceTermination,
    ) -> Self {
        Self {
            teams,
            waiting,
            score,
            statistics,
            termination,
        }
    }

    /// Creates the degenerate outcome: no teams, everyone waiting, score
    /// zero.
    #[inline]
    pub fn degenerate(waiting: Vec<Player<T>>) -> Self {
        Self {
            teams: Vec::new(),
            waiting,
            score: 0.0,
            statistics: AnnealStatistics::default(),
            termination: BalanceTermination::Degenerate,
        }
    }

    /// Returns the balanced teams.
    #[inline]
    pub fn teams(&self) -> &[Team<T>] {
        &self.teams
    }

    /// Returns the waiting list.
    #[inline]
    pub fn waiting(&self) -> &[Player<T>] {
        &self.waiting
    }

    /// Returns the final imbalance score (lower is better).
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the annealing statistics. All zero for degenerate outcomes.
    #[inline]
    pub fn statistics(&self) -> &AnnealStatistics {
        &self.statistics
    }

    /// Returns why the run finished.
    #[inline]
    pub fn termination(&self) -> BalanceTermination {
        self.termination
    }

    /// Returns the number of teams formed.
    #[inline]
    pub fn num_teams(&self) -> usize {
        self.teams.len()
    }

    /// Returns the number of entrants across teams and the waiting list.
    pub fn total_entrants(&self) -> usize {
        self.teams.iter().map(Team::len).sum::<usize>() + self.waiting.len()
    }
}

impl<T> std::fmt::Display for BalanceOutcome<T>
where
    T: RatingValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Balance Result: {} entrants, {} teams ({})",
            self.total_entrants(),
            self.num_teams(),
            self.termination
        )?;
        for (i, team) in self.teams.iter().enumerate() {
            if i < 26 {
                writeln!(f, "Team {}:", (b'A' + i as u8) as char)?;
            } else {
                writeln!(f, "Team {}:", i + 1)?;
            }
            write!(f, "{}", team)?;
        }
        if !self.waiting.is_empty() {
            writeln!(f, "Waiting:")?;
            for player in &self.waiting {
                writeln!(f, "  - {} ({} / {})", player.name(), player.rank(), player.role())?;
            }
        }
        write!(f, "Imbalance score: {:.2} (lower is better)", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_model::player::PlayerId;
    use scrim_model::rank::{Rank, RankTier};
    use scrim_model::role::Role;

    fn player(id: i64, role: Role) -> Player<i32> {
        let rank = Rank::new(RankTier::Silver, 2).unwrap();
        Player::from_rank(PlayerId::new(id), format!("p{}", id), rank, role)
    }

    #[test]
    fn test_degenerate_outcome() {
        let outcome = BalanceOutcome::degenerate(vec![player(1, Role::Top), player(2, Role::Mid)]);
        assert!(outcome.teams().is_empty());
        assert_eq!(outcome.waiting().len(), 2);
        assert_eq!(outcome.score(), 0.0);
        assert_eq!(outcome.termination(), BalanceTermination::Degenerate);
        assert_eq!(outcome.statistics().iterations, 0);
        assert_eq!(outcome.total_entrants(), 2);
    }

    #[test]
    fn test_display_lists_teams_and_waiting() {
        let team = Team::from_players(vec![player(1, Role::Top), player(2, Role::Mid)]);
        let outcome = BalanceOutcome::new(
            vec![team],
            vec![player(3, Role::Support)],
            12.5,
            AnnealStatistics::default(),
            BalanceTermination::TemperatureFloor,
        );
        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Team A:"));
        assert!(rendered.contains("Waiting:"));
        assert!(rendered.contains("p3"));
        assert!(rendered.contains("Imbalance score: 12.50"));
    }
}
