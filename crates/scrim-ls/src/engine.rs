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

//! The Metropolis annealing driver.
//!
//! The engine orchestrates one cooling loop over a single mutable lineup:
//! the operator proposes a reversible swap, the evaluator scores the mutated
//! lineup, and the Metropolis criterion decides whether the move sticks. A
//! strictly improving candidate is always accepted; a worsening candidate is
//! accepted with probability `exp(-delta / T)`, which decays as the schedule
//! cools. Rejected moves are rolled back by re-applying the swap.
//!
//! The engine tracks the best lineup ever visited separately from the
//! current one, so the returned result never regresses even though the walk
//! itself may. The temperature advances once per iteration whether the
//! proposal was applied, rejected, or never produced ("time passes"), and
//! the loop stops at the schedule's floor or at the iteration cap, whichever
//! comes first. With the production defaults the floor is the normal stop;
//! the cap is a safety bound.

use crate::cooling::CoolingSchedule;
use crate::eval::LineupEvaluator;
use crate::monitor::AnnealMonitor;
use crate::operator::MoveOperator;
use crate::result::{AnnealOutcome, AnnealTerminationReason};
use crate::stats::AnnealStatistics;
use rand::Rng;
use scrim_model::lineup::Lineup;
use scrim_model::player::Player;
use scrim_model::rating::RatingValue;
use std::time::Instant;

/// Metropolis acceptance: always take improvements, otherwise gamble with
/// probability `exp(-delta / temperature)`.
#[inline]
fn metropolis_accept<R>(delta: f64, temperature: f64, rng: &mut R) -> bool
where
    R: Rng,
{
    if delta < 0.0 {
        return true;
    }
    if temperature <= 1e-9 {
        // Prevent division by zero / extreme probabilities.
        return false;
    }
    let acceptance_probability = (-delta / temperature).exp();
    rng.random_bool(acceptance_probability)
}

/// The simulated annealing engine.
///
/// The engine owns no search state between runs; every call to
/// [`run`](AnnealingEngine::run) starts from the lineup it is handed and
/// returns a self-contained [`AnnealOutcome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnealingEngine;

impl AnnealingEngine {
    /// Creates a new engine.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the cooling loop and returns the best lineup discovered.
    ///
    /// # Parameters
    /// - `players`: the grouping's pool; every index in `initial` must be in
    ///   bounds.
    /// - `initial`: the seed lineup; also the result if no move ever
    ///   improves on it.
    /// - `operator`: the move-proposal policy.
    /// - `schedule`: the cooling schedule; reset via `on_start` before the
    ///   first iteration.
    /// - `evaluator`: the energy function.
    /// - `monitor`: observation hooks.
    /// - `rng`: the injected randomness source; a fixed seed reproduces the
    ///   run exactly.
    /// - `iteration_limit`: the safety cap on loop iterations.
    #[allow(clippy::too_many_arguments)]
    pub fn run<T, R, C, O, E, M>(
        &self,
        players: &[Player<T>],
        initial: Lineup,
        operator: &mut O,
        schedule: &mut C,
        evaluator: &E,
        monitor: &mut M,
        rng: &mut R,
        iteration_limit: u64,
    ) -> AnnealOutcome
    where
        T: RatingValue,
        R: Rng,
        C: CoolingSchedule,
        O: MoveOperator<T, R>,
        E: LineupEvaluator<T>,
        M: AnnealMonitor,
    {
        debug_assert!(
            initial.indices().all(|index| index.get() < players.len()),
            "called `AnnealingEngine::run` with a lineup referencing out-of-bounds pool indices"
        );

        let start_time = Instant::now();
        let mut stats = AnnealStatistics::default();

        schedule.on_start();

        let mut current = initial;
        let mut current_score = evaluator.evaluate(players, &current);
        let mut best = current.clone();
        let mut best_score = current_score;
        monitor.on_start(current_score);

        let termination_reason = loop {
            if stats.iterations >= iteration_limit {
                break AnnealTerminationReason::IterationLimit;
            }
            if schedule.is_frozen() {
                break AnnealTerminationReason::TemperatureFloor;
            }

            stats.on_iteration();

            let Some(candidate_move) = operator.propose(players, &current, rng) else {
                // No eligible move; the schedule still advances.
                schedule.update();
                continue;
            };

            candidate_move.apply(&mut current);
            stats.on_proposed_move();

            let candidate_score = evaluator.evaluate(players, &current);
            let delta = candidate_score - current_score;

            if metropolis_accept(delta, schedule.current(), rng) {
                current_score = candidate_score;
                stats.on_accepted_move();

                if candidate_score < best_score {
                    best = current.clone();
                    best_score = candidate_score;
                    stats.on_new_best();
                    monitor.on_new_best(best_score, &stats);
                }
            } else {
                // Swap moves are involutions: re-applying rolls back.
                candidate_move.apply(&mut current);
            }

            schedule.update();
        };

        stats.set_total_time(start_time.elapsed());
        monitor.on_end(best_score, &stats);

        AnnealOutcome::new(best, best_score, termination_reason, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooling::GeometricCooling;
    use crate::eval::{ImbalanceEvaluator, ImbalanceWeights};
    use crate::monitor::NoOpMonitor;
    use crate::operator::{RoleStrictSwap, UnconstrainedSwap};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use scrim_model::player::PlayerId;
    use scrim_model::rank::{Rank, RankTier};
    use scrim_model::role::Role;

    fn role_major_pool(ratings_per_role: &[Vec<i32>]) -> Vec<Player<i32>> {
        let rank = Rank::new(RankTier::Gold, 4).unwrap();
        let mut pool = Vec::new();
        let mut id = 0;
        for (r, per_role) in ratings_per_role.iter().enumerate() {
            for &rating in per_role {
                id += 1;
                pool.push(Player::new(
                    PlayerId::new(id),
                    format!("p{}", id),
                    rank,
                    Role::ALL[r],
                    rating,
                ));
            }
        }
        pool
    }

    fn two_team_pool() -> Vec<Player<i32>> {
        role_major_pool(&[
            vec![2000, 400],
            vec![1900, 300],
            vec![1800, 200],
            vec![1700, 100],
            vec![1600, 50],
        ])
    }

    struct BestScoreTrace {
        scores: Vec<f64>,
    }

    impl AnnealMonitor for BestScoreTrace {
        fn on_new_best(&mut self, best_score: f64, _stats: &AnnealStatistics) {
            self.scores.push(best_score);
        }
    }

    #[test]
    fn test_run_improves_on_seeded_skew() {
        let pool = two_team_pool();
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());
        let initial = Lineup::seeded(2);
        let initial_score = evaluator.evaluate(&pool, &initial);

        let outcome = AnnealingEngine::new().run(
            &pool,
            initial,
            &mut RoleStrictSwap::new(),
            &mut GeometricCooling::new(1000.0, 0.998, 0.01),
            &evaluator,
            &mut NoOpMonitor,
            &mut ChaCha8Rng::seed_from_u64(42),
            50_000,
        );

        assert!(
            outcome.score() < initial_score,
            "annealing must improve on the deliberately skewed seed: {} vs {}",
            outcome.score(),
            initial_score
        );
        assert_eq!(
            outcome.termination_reason(),
            AnnealTerminationReason::TemperatureFloor
        );
        assert_eq!(
            outcome.score(),
            evaluator.evaluate(&pool, outcome.lineup()),
            "the reported score must match the returned lineup"
        );
    }

    #[test]
    fn test_best_score_is_monotone() {
        let pool = two_team_pool();
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());
        let mut trace = BestScoreTrace { scores: Vec::new() };

        let outcome = AnnealingEngine::new().run(
            &pool,
            Lineup::seeded(2),
            &mut RoleStrictSwap::new(),
            &mut GeometricCooling::new(1000.0, 0.998, 0.01),
            &evaluator,
            &mut trace,
            &mut ChaCha8Rng::seed_from_u64(7),
            50_000,
        );

        for window in trace.scores.windows(2) {
            assert!(
                window[1] < window[0],
                "tracked best must only ever improve: {:?}",
                trace.scores
            );
        }
        if let Some(&last) = trace.scores.last() {
            assert_eq!(last, outcome.score());
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let pool = two_team_pool();
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());

        let run = |seed: u64| {
            AnnealingEngine::new().run(
                &pool,
                Lineup::seeded(2),
                &mut RoleStrictSwap::new(),
                &mut GeometricCooling::new(1000.0, 0.998, 0.01),
                &evaluator,
                &mut NoOpMonitor,
                &mut ChaCha8Rng::seed_from_u64(seed),
                50_000,
            )
        };

        let first = run(99);
        let second = run(99);
        assert_eq!(first.lineup(), second.lineup(), "same seed, same lineup");
        assert_eq!(first.score(), second.score());
        assert_eq!(first.termination_reason(), second.termination_reason());
        assert_eq!(
            first.statistics().accepted_moves,
            second.statistics().accepted_moves
        );
    }

    #[test]
    fn test_single_team_burns_schedule_with_no_op_iterations() {
        let pool = role_major_pool(&[vec![1000], vec![900], vec![800], vec![700], vec![600]]);
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 1, ImbalanceWeights::default());

        let outcome = AnnealingEngine::new().run(
            &pool,
            Lineup::seeded(1),
            &mut RoleStrictSwap::new(),
            &mut GeometricCooling::new(1000.0, 0.998, 0.01),
            &evaluator,
            &mut NoOpMonitor,
            &mut ChaCha8Rng::seed_from_u64(1),
            50_000,
        );

        assert_eq!(outcome.score(), 0.0);
        assert_eq!(
            outcome.termination_reason(),
            AnnealTerminationReason::TemperatureFloor
        );
        assert_eq!(outcome.statistics().proposed_moves, 0);
        assert!(
            outcome.statistics().iterations > 5_000,
            "the schedule must still be burned down by no-op iterations"
        );
    }

    #[test]
    fn test_iteration_limit_is_a_safety_bound() {
        let pool = two_team_pool();
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());

        let outcome = AnnealingEngine::new().run(
            &pool,
            Lineup::seeded(2),
            &mut RoleStrictSwap::new(),
            // A rate this close to 1.0 cannot freeze within the cap.
            &mut GeometricCooling::new(1000.0, 0.999_999, 0.01),
            &evaluator,
            &mut NoOpMonitor,
            &mut ChaCha8Rng::seed_from_u64(5),
            100,
        );

        assert_eq!(
            outcome.termination_reason(),
            AnnealTerminationReason::IterationLimit
        );
        assert_eq!(outcome.statistics().iterations, 100);
    }

    #[test]
    fn test_zero_iteration_limit_returns_seed() {
        let pool = two_team_pool();
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());
        let initial = Lineup::seeded(2);
        let initial_score = evaluator.evaluate(&pool, &initial);

        let outcome = AnnealingEngine::new().run(
            &pool,
            initial.clone(),
            &mut RoleStrictSwap::new(),
            &mut GeometricCooling::new(1000.0, 0.998, 0.01),
            &evaluator,
            &mut NoOpMonitor,
            &mut ChaCha8Rng::seed_from_u64(2),
            0,
        );

        assert_eq!(outcome.lineup(), &initial);
        assert_eq!(outcome.score(), initial_score);
    }

    #[test]
    fn test_unconstrained_run_conserves_pool() {
        // Candidate region for two teams, plus one leftover TOP on the bench.
        let mut pool = two_team_pool();
        pool.push(Player::new(
            PlayerId::new(11),
            "p11",
            Rank::new(RankTier::Gold, 4).unwrap(),
            Role::Top,
            350,
        ));
        let evaluator =
            ImbalanceEvaluator::new(&pool, pool.len(), 2, ImbalanceWeights::default());

        let outcome = AnnealingEngine::new().run(
            &pool,
            Lineup::seeded_with_bench(2, pool.len()),
            &mut UnconstrainedSwap::new(0.2),
            &mut GeometricCooling::new(1000.0, 0.998, 0.01),
            &evaluator,
            &mut NoOpMonitor,
            &mut ChaCha8Rng::seed_from_u64(21),
            50_000,
        );

        let mut seen: Vec<usize> = outcome.lineup().indices().map(|i| i.get()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..pool.len()).collect::<Vec<_>>());
        assert_eq!(outcome.lineup().bench().len(), 1);
    }

    #[test]
    fn test_metropolis_accepts_equal_scores_while_warm() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        // exp(0) = 1.0: equal-cost candidates always pass while warm.
        assert!(metropolis_accept(0.0, 100.0, &mut rng));
        // Strict improvement passes even at (effectively) zero temperature.
        assert!(metropolis_accept(-1.0, 0.0, &mut rng));
        // Worsening move at zero temperature never passes.
        assert!(!metropolis_accept(1.0, 0.0, &mut rng));
    }
}
