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

//! End-to-end balancing scenarios.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scrim_model::player::{Player, PlayerId};
use scrim_model::rank::{Rank, RankTier};
use scrim_model::role::Role;
use scrim_solver::{partition_with_rng, BalanceConfig, BalanceTermination, MovePolicy};

fn player(id: i64, role: Role, rating: i32) -> Player<i32> {
    let rank = Rank::new(RankTier::Gold, 4).unwrap();
    Player::new(PlayerId::new(id), format!("p{}", id), rank, role, rating)
}

fn random_roster(size: usize, seed: u64) -> Vec<Player<i32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let role = Role::ALL[rng.random_range(0..Role::COUNT)];
            let rating = rng.random_range(0..=3800);
            player(i as i64, role, rating)
        })
        .collect()
}

fn role_counts(players: &[Player<i32>]) -> [usize; Role::COUNT] {
    let mut counts = [0usize; Role::COUNT];
    for p in players {
        counts[p.role().index()] += 1;
    }
    counts
}

/// The waiting list one role should produce: everyone past the top
/// `num_teams` by rating, ties broken by snapshot order.
fn expected_waiting_ids(players: &[Player<i32>], role: Role, num_teams: usize) -> Vec<i64> {
    players
        .iter()
        .filter(|p| p.role() == role)
        .sorted_by(|a, b| b.rating().cmp(&a.rating()))
        .skip(num_teams)
        .map(|p| p.id().get())
        .sorted()
        .collect()
}

#[test]
fn test_scenario_single_full_team() {
    // One entrant per lane: a single team, nobody waiting, score zero.
    let players = vec![
        player(1, Role::Top, 1000),
        player(2, Role::Jungle, 900),
        player(3, Role::Mid, 800),
        player(4, Role::Adc, 700),
        player(5, Role::Support, 600),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 1);
    assert!(outcome.waiting().is_empty());
    assert_eq!(outcome.score(), 0.0);
    assert_eq!(outcome.termination(), BalanceTermination::TemperatureFloor);
    assert!(outcome.teams()[0].has_full_role_coverage());
    assert_eq!(outcome.teams()[0].len(), 5);
}

#[test]
fn test_scenario_eleven_entrants_two_teams() {
    // TOP=3, JG=2, MID=2, ADC=2, SUP=2: two teams, the weakest TOP waits.
    let players = vec![
        player(1, Role::Top, 1500),
        player(2, Role::Top, 1200),
        player(3, Role::Top, 400),
        player(4, Role::Jungle, 1400),
        player(5, Role::Jungle, 800),
        player(6, Role::Mid, 1300),
        player(7, Role::Mid, 900),
        player(8, Role::Adc, 1100),
        player(9, Role::Adc, 1000),
        player(10, Role::Support, 700),
        player(11, Role::Support, 600),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 2);
    assert_eq!(outcome.waiting().len(), 1);
    assert_eq!(outcome.waiting()[0].id(), PlayerId::new(3));
    for team in outcome.teams() {
        assert!(team.has_full_role_coverage());
    }
}

#[test]
fn test_scenario_missing_role_waits_everyone() {
    // No SUP entrant: no team can be formed regardless of the other lanes.
    let players = vec![
        player(1, Role::Top, 1500),
        player(2, Role::Top, 1200),
        player(3, Role::Jungle, 1400),
        player(4, Role::Mid, 1300),
        player(5, Role::Mid, 900),
        player(6, Role::Adc, 1100),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 0);
    assert_eq!(outcome.score(), 0.0);
    assert_eq!(outcome.termination(), BalanceTermination::Degenerate);
    assert_eq!(outcome.statistics().iterations, 0);
    // The whole snapshot waits, in snapshot order.
    let waiting_ids: Vec<i64> = outcome.waiting().iter().map(|p| p.id().get()).collect();
    assert_eq!(waiting_ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_scenario_fewer_than_five_entrants() {
    let players = vec![
        player(1, Role::Top, 1500),
        player(2, Role::Jungle, 1200),
        player(3, Role::Mid, 1400),
        player(4, Role::Adc, 1300),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 0);
    assert_eq!(outcome.waiting().len(), 4);
    assert_eq!(outcome.termination(), BalanceTermination::Degenerate);
}

#[test]
fn test_empty_snapshot() {
    let players: Vec<Player<i32>> = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 0);
    assert!(outcome.waiting().is_empty());
    assert_eq!(outcome.score(), 0.0);
}

#[test]
fn test_every_entrant_is_placed_or_waiting() {
    for seed in 0..8u64 {
        for size in [0usize, 3, 5, 9, 11, 17, 25, 40] {
            let players = random_roster(size, seed * 1000 + size as u64);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

            assert_eq!(
                5 * outcome.num_teams() + outcome.waiting().len(),
                players.len(),
                "conservation failed for size {} seed {}",
                size,
                seed
            );

            // Nobody appears twice.
            let ids: Vec<i64> = outcome
                .teams()
                .iter()
                .flat_map(|t| t.players().iter())
                .chain(outcome.waiting().iter())
                .map(|p| p.id().get())
                .sorted()
                .collect();
            let expected: Vec<i64> = players.iter().map(|p| p.id().get()).sorted().collect();
            assert_eq!(ids, expected);
        }
    }
}

#[test]
fn test_team_count_matches_thinnest_lane() {
    for seed in 0..8u64 {
        let players = random_roster(23, seed);
        let counts = role_counts(&players);
        let expected_teams = if players.len() < 5 {
            0
        } else {
            *counts.iter().min().unwrap()
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);
        assert_eq!(outcome.num_teams(), expected_teams);

        for team in outcome.teams() {
            assert!(
                team.has_full_role_coverage(),
                "every team must field one entrant per lane"
            );
        }
    }
}

#[test]
fn test_waiting_is_the_per_lane_overflow() {
    for seed in 0..8u64 {
        let players = random_roster(19, 77 + seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);
        if outcome.num_teams() == 0 {
            continue;
        }

        for role in Role::ALL {
            let actual: Vec<i64> = outcome
                .waiting()
                .iter()
                .filter(|p| p.role() == role)
                .map(|p| p.id().get())
                .sorted()
                .collect();
            assert_eq!(
                actual,
                expected_waiting_ids(&players, role, outcome.num_teams()),
                "waiting list must be the sub-top-{} overflow of {}",
                outcome.num_teams(),
                role
            );
        }
    }
}

#[test]
fn test_waiting_ties_break_by_snapshot_order() {
    // Two equally rated TOPs: the earlier registration plays, the later
    // one waits.
    let players = vec![
        player(1, Role::Top, 1000),
        player(2, Role::Top, 1000),
        player(3, Role::Jungle, 900),
        player(4, Role::Mid, 900),
        player(5, Role::Adc, 900),
        player(6, Role::Support, 900),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 1);
    assert_eq!(outcome.waiting().len(), 1);
    assert_eq!(outcome.waiting()[0].id(), PlayerId::new(2));
}

#[test]
fn test_fixed_seed_reproduces_outcome() {
    let players = random_roster(21, 1234);
    let config = BalanceConfig::default();

    let first = partition_with_rng(&players, &config, &mut ChaCha8Rng::seed_from_u64(9));
    let second = partition_with_rng(&players, &config, &mut ChaCha8Rng::seed_from_u64(9));

    assert_eq!(first.teams(), second.teams());
    assert_eq!(first.waiting(), second.waiting());
    assert_eq!(first.score(), second.score());
    assert_eq!(first.termination(), second.termination());
}

#[test]
fn test_balancing_beats_the_seeded_split() {
    // A roster with a sharp skill gap per lane. The seed would stack every
    // strong entrant on one team; the annealed result must spread them.
    let mut players = Vec::new();
    for (i, role) in Role::ALL.iter().enumerate() {
        players.push(player(i as i64, *role, 3000 + i as i32 * 10));
        players.push(player(10 + i as i64, *role, 200 + i as i32 * 10));
    }
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let outcome = partition_with_rng(&players, &BalanceConfig::default(), &mut rng);

    assert_eq!(outcome.num_teams(), 2);
    let averages: Vec<f64> = outcome.teams().iter().map(|t| t.average_rating()).collect();
    let gap = (averages[0] - averages[1]).abs();
    // The seeded split would sit at a gap of 2800; a balanced one mixes
    // strong and weak entrants across both teams.
    assert!(
        gap < 1500.0,
        "annealing must narrow the seeded average-rating gap, got {}",
        gap
    );
}

#[test]
fn test_unconstrained_policy_conserves_entrants() {
    let config = BalanceConfig::default().with_move_policy(MovePolicy::Unconstrained);
    for seed in 0..6u64 {
        let players = random_roster(18, 500 + seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = partition_with_rng(&players, &config, &mut rng);

        assert_eq!(
            5 * outcome.num_teams() + outcome.waiting().len(),
            players.len()
        );
        let ids: Vec<i64> = outcome
            .teams()
            .iter()
            .flat_map(|t| t.players().iter())
            .chain(outcome.waiting().iter())
            .map(|p| p.id().get())
            .sorted()
            .collect();
        let expected: Vec<i64> = players.iter().map(|p| p.id().get()).sorted().collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_unconstrained_policy_is_deterministic() {
    let players = random_roster(16, 4321);
    let config = BalanceConfig::default().with_move_policy(MovePolicy::Unconstrained);

    let first = partition_with_rng(&players, &config, &mut ChaCha8Rng::seed_from_u64(77));
    let second = partition_with_rng(&players, &config, &mut ChaCha8Rng::seed_from_u64(77));

    assert_eq!(first.teams(), second.teams());
    assert_eq!(first.waiting(), second.waiting());
    assert_eq!(first.score(), second.score());
}

#[test]
fn test_iteration_cap_short_runs_still_produce_valid_partitions() {
    let players = random_roster(15, 999);
    let config = BalanceConfig::default().with_max_iterations(10);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let outcome = partition_with_rng(&players, &config, &mut rng);

    if outcome.num_teams() > 0 {
        assert_eq!(outcome.termination(), BalanceTermination::IterationLimit);
        assert_eq!(outcome.statistics().iterations, 10);
    }
    assert_eq!(
        5 * outcome.num_teams() + outcome.waiting().len(),
        players.len()
    );
}

#[test]
#[should_panic(expected = "invalid cooling_rate")]
fn test_invalid_config_panics_before_grouping() {
    let players = random_roster(10, 1);
    let config = BalanceConfig::default().with_cooling_rate(2.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let _ = partition_with_rng(&players, &config, &mut rng);
}
