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

//! The balancing pipeline.
//!
//! `partition` is the single operation this workspace exposes: bucket the
//! snapshot by lane, short-circuit if no complete team can be fielded, seed
//! the deliberately skewed initial lineup, anneal it under the configured
//! move policy, and assemble the result. The caller owns the roster
//! lifecycle; the solver only ever sees an immutable snapshot.

use crate::config::{BalanceConfig, MovePolicy};
use crate::outcome::BalanceOutcome;
use rand::Rng;
use scrim_ls::cooling::GeometricCooling;
use scrim_ls::engine::AnnealingEngine;
use scrim_ls::eval::ImbalanceEvaluator;
use scrim_ls::monitor::NoOpMonitor;
use scrim_ls::operator::{MoveOperator, RoleStrictSwap, UnconstrainedSwap};
use scrim_ls::result::AnnealOutcome;
use scrim_model::grouping::RoleGrouping;
use scrim_model::lineup::Lineup;
use scrim_model::player::Player;
use scrim_model::rating::RatingValue;
use scrim_model::team::Team;

/// Partitions an entrant snapshot into balanced teams and a waiting list,
/// using a fresh thread-local randomness source.
///
/// See [`partition_with_rng`] for the seedable variant.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn partition<T>(players: &[Player<T>], config: &BalanceConfig) -> BalanceOutcome<T>
where
    T: RatingValue,
{
    partition_with_rng(players, config, &mut rand::rng())
}

/// Partitions an entrant snapshot with an injected randomness source.
///
/// A fixed RNG seed and a fixed snapshot reproduce the outcome exactly.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn partition_with_rng<T, R>(
    players: &[Player<T>],
    config: &BalanceConfig,
    rng: &mut R,
) -> BalanceOutcome<T>
where
    T: RatingValue,
    R: Rng,
{
    config.validate();

    let grouping = RoleGrouping::from_players(players);
    if grouping.is_degenerate() {
        return BalanceOutcome::degenerate(grouping.players().to_vec());
    }

    let num_teams = grouping.num_teams();
    match config.move_policy {
        MovePolicy::RoleStrict => {
            // The waiting list is fixed up front; only candidates anneal.
            let initial = Lineup::seeded(num_teams);
            let evaluator = ImbalanceEvaluator::new(
                grouping.players(),
                grouping.candidate_count(),
                num_teams,
                config.weights,
            );
            let mut operator = RoleStrictSwap::new();
            let annealed = run_engine(&grouping, initial, &mut operator, &evaluator, config, rng);
            assemble(&grouping, annealed, false)
        }
        MovePolicy::Unconstrained => {
            // Leftovers join the bench and may rotate into play.
            let initial = Lineup::seeded_with_bench(num_teams, grouping.len());
            let evaluator = ImbalanceEvaluator::new(
                grouping.players(),
                grouping.len(),
                num_teams,
                config.weights,
            );
            let mut operator = UnconstrainedSwap::new(config.bench_swap_probability);
            let annealed = run_engine(&grouping, initial, &mut operator, &evaluator, config, rng);
            assemble(&grouping, annealed, true)
        }
    }
}

fn run_engine<T, R, O>(
    grouping: &RoleGrouping<T>,
    initial: Lineup,
    operator: &mut O,
    evaluator: &ImbalanceEvaluator,
    config: &BalanceConfig,
    rng: &mut R,
) -> AnnealOutcome
where
    T: RatingValue,
    R: Rng,
    O: MoveOperator<T, R>,
{
    let mut schedule = GeometricCooling::new(
        config.initial_temperature,
        config.cooling_rate,
        config.temperature_floor,
    );
    let mut monitor = NoOpMonitor;

    AnnealingEngine::new().run(
        grouping.players(),
        initial,
        operator,
        &mut schedule,
        evaluator,
        &mut monitor,
        rng,
        config.max_iterations,
    )
}

fn assemble<T>(
    grouping: &RoleGrouping<T>,
    annealed: AnnealOutcome,
    bench_is_waiting: bool,
) -> BalanceOutcome<T>
where
    T: RatingValue,
{
    let players = grouping.players();
    let lineup = annealed.lineup();

    let teams: Vec<Team<T>> = lineup
        .teams()
        .map(|slots| {
            Team::from_players(slots.iter().map(|&index| players[index.get()].clone()))
        })
        .collect();

    let waiting: Vec<Player<T>> = if bench_is_waiting {
        lineup
            .bench()
            .iter()
            .map(|&index| players[index.get()].clone())
            .collect()
    } else {
        grouping.leftovers().to_vec()
    };

    BalanceOutcome::new(
        teams,
        waiting,
        annealed.score(),
        annealed.statistics().clone(),
        annealed.termination_reason().into(),
    )
}
