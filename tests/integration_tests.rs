//! Integration tests for the elo-engine crate
//!
//! These tests drive the engine the way a surrounding application would:
//! - Settling games and applying the returned deltas across a season
//! - Matchup analysis feeding the displayed stakes
//! - Configuration loading feeding the engine

mod fixtures;

use elo_engine::config::{AppConfig, EloConfig};
use elo_engine::game::{recent_form, settle_game, Game, TieScore};
use elo_engine::matchup::analyze_matchup;
use elo_engine::rating::{EloEngine, RatingCalculator};
use elo_engine::types::Outcome;
use elo_engine::utils::current_timestamp;
use std::collections::HashMap;

use fixtures::{ExchangeCall, RecordingCalculator};

#[test]
fn test_settlement_calls_engine_once_per_side_with_roles_swapped() {
    let calculator = RecordingCalculator::new(EloEngine::default());
    let game = Game::new("lions", "tigers", TieScore::new((2, 0), (2, 1)));

    let settlement = settle_game(&calculator, &game, 1100, 1000, current_timestamp()).unwrap();

    let calls = calculator.get_exchange_calls();
    assert_eq!(
        calls,
        vec![
            ExchangeCall {
                rating_a: 1100,
                rating_b: 1000,
                outcome: Outcome::Win,
                goal_differential: 3,
            },
            ExchangeCall {
                rating_a: 1000,
                rating_b: 1100,
                outcome: Outcome::Loss,
                goal_differential: 3,
            },
        ]
    );
    assert_eq!(settlement.net_change(), 0);

    calculator.clear_calls();
    assert!(calculator.get_exchange_calls().is_empty());
}

#[test]
fn test_incomplete_game_never_reaches_the_engine() {
    let calculator = RecordingCalculator::new(EloEngine::default());
    let mut game = Game::new("lions", "tigers", TieScore::new((2, 0), (0, 0)));
    game.score.leg2.team1 = None;

    assert!(settle_game(&calculator, &game, 1000, 1000, current_timestamp()).is_err());
    assert!(calculator.get_exchange_calls().is_empty());
}

#[test]
fn test_season_of_games_conserves_rating_pool() {
    let engine = EloEngine::default();
    let initial = engine.initial_rating();

    let mut ratings: HashMap<String, i32> = ["lions", "tigers", "bears", "wolves"]
        .iter()
        .map(|team| (team.to_string(), initial))
        .collect();
    let mut history = Vec::new();
    let mut played = Vec::new();

    let schedule = [
        ("lions", "tigers", (3, 1), (2, 1)),
        ("bears", "wolves", (0, 0), (1, 1)),
        ("tigers", "bears", (5, 0), (4, 0)),
        ("wolves", "lions", (1, 2), (0, 3)),
        ("lions", "bears", (1, 1), (0, 1)),
        ("tigers", "wolves", (2, 2), (2, 2)),
    ];

    for (home, away, leg1, leg2) in schedule {
        let game = Game::new(home, away, TieScore::new(leg1, leg2));
        let settlement =
            settle_game(&engine, &game, ratings[home], ratings[away], current_timestamp())
                .unwrap();

        ratings.insert(home.to_string(), settlement.team1.new_rating);
        ratings.insert(away.to_string(), settlement.team2.new_rating);
        history.extend(settlement.history);
        played.push(game);
    }

    // Zero-sum: the pool keeps its total
    let total: i32 = ratings.values().sum();
    assert_eq!(total, initial * 4);

    // One history row per team per game, the last one matching the live rating
    assert_eq!(history.len(), schedule.len() * 2);
    for (team, rating) in &ratings {
        let last = history
            .iter()
            .rev()
            .find(|entry| &entry.team_id == team)
            .unwrap();
        assert_eq!(last.rating, *rating);
    }

    // Lions won twice and lost once
    assert!(ratings["lions"] > initial);
    played.reverse();
    assert_eq!(
        recent_form("lions", &played, 5),
        vec![Outcome::Loss, Outcome::Win, Outcome::Win]
    );
}

#[test]
fn test_matchup_stakes_match_settlement_without_margin() {
    let engine = EloEngine::default();
    let analysis = analyze_matchup(&engine, 1150, 1000);

    let win = Game::new("lions", "tigers", TieScore::new((1, 0), (1, 1)));
    let settlement = settle_game(&engine, &win, 1150, 1000, current_timestamp()).unwrap();
    assert_eq!(settlement.team1.delta, analysis.team1_gain_on_win);
    assert_eq!(settlement.team2.delta, analysis.team2_loss_on_loss);

    let loss = Game::new("lions", "tigers", TieScore::new((0, 1), (1, 1)));
    let settlement = settle_game(&engine, &loss, 1150, 1000, current_timestamp()).unwrap();
    assert_eq!(settlement.team1.delta, analysis.team1_loss_on_loss);
    assert_eq!(settlement.team2.delta, analysis.team2_gain_on_win);

    let total = analysis.team1_win_probability
        + analysis.draw_probability
        + analysis.team2_win_probability;
    assert!((total - 100.0).abs() <= 0.2);
}

#[test]
fn test_config_file_drives_engine() {
    let config = AppConfig::from_toml_str(
        r#"
        [service]
        name = "league-ratings"
        log_level = "debug"
        form_length = 3

        [elo]
        k_factor = 32.0
        rating_divisor = 400.0
        base_draw = 0.25
        draw_decay = 300.0
        initial_rating = 1500

        [elo.goal_differential]
        moderate_threshold = 3
        moderate_multiplier = 1.25
        large_threshold = 5
        large_multiplier = 1.5
        blowout_threshold = 7
        blowout_step = 0.125
        "#,
    )
    .unwrap();

    let engine = EloEngine::new(config.elo).unwrap();
    assert_eq!(engine.initial_rating(), 1500);
    assert_eq!(engine.points_exchange(1500, 1500, Outcome::Win, 0), 16);
    assert_eq!(engine.points_exchange(1500, 1500, Outcome::Win, 3), 20);
    assert_eq!(engine.points_exchange(1500, 1500, Outcome::Win, 5), 24);
    // 1.5 + 2 * 0.125
    assert_eq!(engine.points_exchange(1500, 1500, Outcome::Win, 8), 28);
    assert_eq!(engine.match_odds(1500, 1500).draw, 0.25);
}

#[test]
fn test_runtime_config_update_through_trait() {
    let mut calculator: Box<dyn RatingCalculator> = Box::new(EloEngine::default());
    assert_eq!(calculator.points_exchange(1000, 1000, Outcome::Win, 0), 20);

    let classic = serde_json::to_value(EloConfig::classic()).unwrap();
    calculator.update_config(classic).unwrap();

    assert_eq!(calculator.points_exchange(1000, 1000, Outcome::Win, 0), 40);
    assert_eq!(calculator.points_exchange(1000, 1000, Outcome::Win, 9), 40);
    assert_eq!(calculator.config()["goal_differential"], serde_json::Value::Null);
}
