mod common;

use gridiron_game::{
    BoxScore, FlowState, GameRng, GameSession, PlayType, Possession, QuarterType,
    SimulationConfig, simulate_game,
};

const SEEDS: [u64; 8] = [1, 7, 42, 1337, 2024, 0xBEEF, 0xDEAD_BEEF, u64::MAX];

fn play(seed: u64) -> gridiron_game::Game {
    let (home, away) = common::teams();
    simulate_game(home, away, Some(seed), &SimulationConfig::default()).unwrap()
}

#[test]
fn same_seed_same_game() {
    for seed in SEEDS {
        let first = play(seed);
        let second = play(seed);
        assert_eq!(first, second, "seed {seed} diverged");
        assert_eq!(first.seed, seed);
    }
}

#[test]
fn regulation_quarters_consume_exactly_nine_hundred_seconds() {
    for seed in SEEDS {
        let game = play(seed);
        for quarter in [
            QuarterType::First,
            QuarterType::Second,
            QuarterType::Third,
            QuarterType::Fourth,
        ] {
            let used: u32 = game
                .plays
                .iter()
                .filter(|play| play.quarter == quarter)
                .map(|play| play.clock_seconds)
                .sum();
            assert_eq!(used, 900, "seed {seed} {quarter} quarter");
        }
    }
}

#[test]
fn ball_stays_on_the_field() {
    for seed in SEEDS {
        let game = play(seed);
        assert!(game.field_position <= 100);
        for play in &game.plays {
            assert!(play.start_field_position <= 100, "seed {seed} play {}", play.number);
            assert!(play.end_field_position <= 100, "seed {seed} play {}", play.number);
            assert!(play.clock_seconds <= play.start_time);
        }
    }
}

#[test]
fn possession_passes_only_through_recorded_changes() {
    for seed in SEEDS {
        let game = play(seed);
        for pair in game.plays.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            assert_eq!(prev.possession_change, prev.end_possession != prev.possession);
            if next.play_type == PlayType::Kickoff || prev.turnover_on_downs {
                continue;
            }
            assert_eq!(
                next.possession, prev.end_possession,
                "seed {seed} play {} -> {}",
                prev.number, next.number
            );
        }
    }
}

#[test]
fn play_log_is_numbered_and_scores_add_up() {
    for seed in SEEDS {
        let game = play(seed);
        assert!(game.is_over());
        for (expected, play) in (1_u32..).zip(&game.plays) {
            assert_eq!(play.number, expected);
        }
        let home: u16 = game
            .plays
            .iter()
            .map(|play| play.points(gridiron_game::Possession::Home))
            .sum();
        let away: u16 = game
            .plays
            .iter()
            .map(|play| play.points(gridiron_game::Possession::Away))
            .sum();
        assert_eq!((home, away), (game.home_score, game.away_score));

        let score = BoxScore::from_game(&game);
        assert_eq!(score.home.points, game.home_score);
        assert_eq!(score.away.points, game.away_score);
    }
}

#[test]
fn post_game_is_entered_once_and_every_play_passes_post_play() {
    let (home, away) = common::teams();
    let mut session = GameSession::new(
        home,
        away,
        GameRng::from_seed(1337),
        SimulationConfig::default(),
    );
    while !session.is_finished() {
        session.step().unwrap();
    }
    assert_eq!(session.state(), FlowState::PostGame);
    assert_eq!(session.flow().entries(FlowState::PostGame), 1);
    assert_eq!(session.flow().entries(FlowState::CoinToss), 1);
    let post_play = session.flow().entries(FlowState::PostPlay);
    let game = session.into_game().unwrap();
    assert_eq!(game.plays.len(), post_play);
}

#[test]
fn opening_toss_replays_for_a_seed() {
    let toss = |seed: u64| {
        let (home, away) = common::teams();
        let mut session =
            GameSession::new(home, away, GameRng::from_seed(seed), SimulationConfig::default());
        for _ in 0..3 {
            session.step().unwrap();
        }
        let game = session.game().unwrap();
        (game.won_coin_toss, game.deferred_possession, game.opening_receiver)
    };
    assert_eq!(toss(42), toss(42));
    let winners: std::collections::HashSet<_> = (0..64).map(|seed| toss(seed).0).collect();
    assert_eq!(winners.len(), 2, "both sides should win some tosses");
}

#[test]
fn seed_42_toss_goes_to_the_visitors_who_defer() {
    let (home, away) = common::teams();
    let mut session =
        GameSession::new(home, away, GameRng::from_seed(42), SimulationConfig::default());
    assert_eq!(session.step().unwrap(), FlowState::PreGame);
    assert_eq!(session.step().unwrap(), FlowState::CoinToss);
    assert_eq!(session.rng().draws(), 2);
    assert_eq!(session.step().unwrap(), FlowState::PrePlay);

    let game = session.game().unwrap();
    assert_eq!(game.won_coin_toss, Possession::Away);
    assert!(game.deferred_possession);
    assert_eq!(game.opening_receiver, Possession::Home);
    assert_eq!(game.possession, Possession::Away);
    let kickoff = game.current_play.as_ref().unwrap();
    assert_eq!(kickoff.play_type, PlayType::Kickoff);
    assert_eq!(kickoff.possession, Possession::Away);
}

#[test]
fn overtime_can_be_switched_off() {
    let mut config = SimulationConfig::default();
    config.decisions.overtime_enabled = false;
    for seed in SEEDS {
        let (home, away) = common::teams();
        let game = simulate_game(home, away, Some(seed), &config).unwrap();
        assert!(game.plays.iter().all(|play| play.quarter != QuarterType::Overtime));
    }
}
