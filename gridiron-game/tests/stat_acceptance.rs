use gridiron_game::config::SimulationConfig;
use gridiron_game::model::{FumbleContext, PenaltyTiming, PlayType, Player, Position, Possession};
use gridiron_game::penalty::{PenaltyCatalog, PenaltyCheckEntry, PenaltyDef, PenaltyName};
use gridiron_game::rng::GameRng;
use gridiron_game::skills::{
    Bounce, completion_chance, fair_catch_chance, field_goal_block_chance, fumble_chance,
    interception_chance, kickoff_muff_chance, kickoff_out_of_bounds_chance, penalty_check,
    protection_chance, punt_block_chance, punt_downed_chance, punt_muff_chance,
    punt_out_of_bounds_chance, qb_pressure_chance, recovery_chance, tackle_break_chance,
};
use gridiron_game::{outcome, power};

const SAMPLE_SIZE: u32 = 10_000;

/// Roster-scale powers plus differentials far outside any real roster.
fn ratings() -> impl Iterator<Item = f64> {
    (0..=10)
        .map(|step| f64::from(step) * 10.0)
        .chain([-1000.0, 1000.0])
}

#[test]
fn every_chance_respects_its_configured_clamp() {
    let cfg = SimulationConfig::default();
    for offense in ratings() {
        for defense in ratings() {
            for pressured in [false, true] {
                let chance = completion_chance(&cfg.passing, offense, defense, pressured);
                assert!(cfg.passing.completion_bounds.contains(chance), "{chance}");
                let chance = interception_chance(&cfg.passing, defense, offense, pressured);
                assert!(cfg.passing.interception_bounds.contains(chance), "{chance}");
            }
            let chance = qb_pressure_chance(&cfg.passing, defense, offense, 1.0);
            assert!(cfg.passing.qb_pressure_bounds.contains(chance), "{chance}");
            let chance = protection_chance(&cfg.passing, offense, defense);
            assert!(cfg.passing.protection_bounds.contains(chance), "{chance}");

            for context in [FumbleContext::Normal, FumbleContext::Return, FumbleContext::Sack] {
                for tacklers in 0..=3 {
                    let chance = fumble_chance(&cfg.turnovers, context, defense, offense, tacklers);
                    assert!(cfg.turnovers.fumble_bounds.contains(chance), "{chance}");
                }
            }
            for bounce in [Bounce::Backward, Bounce::Sideways, Bounce::Forward] {
                let chance = recovery_chance(&cfg.turnovers, bounce, offense, defense);
                assert!(cfg.turnovers.recovery_bounds.contains(chance), "{chance}");
            }
            for good_snap in [true, false] {
                for distance in [20, 35, 50, 65] {
                    let chance =
                        field_goal_block_chance(&cfg.field_goals, distance, good_snap, defense, offense);
                    assert!(cfg.field_goals.block_bounds.contains(chance), "{chance}");
                }
                let chance = punt_block_chance(&cfg.punts, good_snap, defense, offense);
                assert!(cfg.punts.block_bounds.contains(chance), "{chance}");
            }
        }
    }
}

#[test]
fn tackle_breaks_stay_clamped_for_any_carrier() {
    let cfg = SimulationConfig::default();
    for rating in [0_u8, 25, 50, 75, 100] {
        let mut carrier = Player::new("Carrier", 22, Position::RB);
        carrier.rushing = rating;
        carrier.strength = rating;
        for tackling in ratings() {
            let chance = tackle_break_chance(&cfg.rushing, &carrier, tackling);
            assert!(cfg.rushing.tackle_break_bounds.contains(chance), "{chance}");
        }
    }
}

#[test]
fn kick_coverage_chances_stay_clamped_for_any_returner() {
    let cfg = SimulationConfig::default();
    for rating in [0_u8, 50, 100] {
        let mut returner = Player::new("Returner", 84, Position::WR);
        returner.catching = rating;
        returner.awareness = rating;
        returner.agility = rating;
        for spot in (-20..=120).step_by(5) {
            for tenths in (0..=80).step_by(4) {
                let hang = f64::from(tenths) / 10.0;
                let chance = punt_out_of_bounds_chance(&cfg.punts, spot);
                assert!(cfg.punts.out_of_bounds_bounds.contains(chance), "{chance}");
                let chance = punt_downed_chance(&cfg.punts, spot, hang);
                assert!(cfg.punts.downed_bounds.contains(chance), "{chance}");
                let chance = fair_catch_chance(&cfg.punts.fair_catch, hang, spot);
                assert!(cfg.punts.fair_catch.bounds.contains(chance), "{chance}");
                let chance = fair_catch_chance(&cfg.kickoffs.fair_catch, hang, spot);
                assert!(cfg.kickoffs.fair_catch.bounds.contains(chance), "{chance}");
                let chance = punt_muff_chance(&cfg.punts, &returner, hang);
                assert!(cfg.punts.muff_bounds.contains(chance), "{chance}");
            }
            let chance = kickoff_muff_chance(&cfg.kickoffs, &returner, spot);
            assert!(cfg.kickoffs.muff_bounds.contains(chance), "{chance}");
            let chance = kickoff_out_of_bounds_chance(&cfg.kickoffs, spot);
            assert!((0.0..=1.0).contains(&chance), "{chance}");
        }
    }
}

#[test]
fn elite_back_outgains_an_average_one() {
    let cfg = SimulationConfig::default();
    let line: Vec<Player> = [Position::C, Position::G, Position::G, Position::T, Position::T]
        .into_iter()
        .zip(60_u8..)
        .map(|(position, number)| Player::new("Lineman", number, position))
        .collect();
    let blockers: Vec<&Player> = line.iter().collect();
    let front: Vec<Player> = [Position::DE, Position::DT, Position::DT, Position::DE, Position::LB]
        .into_iter()
        .zip(90_u8..)
        .map(|(position, number)| Player::new("Defender", number, position))
        .collect();
    let defenders: Vec<&Player> = front.iter().collect();
    let defense_power = power::run_defense_power(&defenders);

    let average = Player::new("Average", 30, Position::RB);
    let mut elite = Player::new("Elite", 28, Position::RB);
    elite.speed = 99;
    elite.rushing = 99;
    elite.strength = 95;
    elite.agility = 97;

    let mut rng = GameRng::from_seed(0x5EED);
    let mut totals = [0_i64; 2];
    let mut breakaways = 0_u32;
    for _ in 0..1000 {
        for (slot, carrier) in [&average, &elite].into_iter().enumerate() {
            let offense_power = power::run_offense_power(&blockers, carrier);
            let run = outcome::run_yards(&cfg.rushing, offense_power, defense_power, carrier, 75, &mut rng);
            totals[slot] += i64::from(run.yards);
            if run.breakaway {
                assert_eq!(slot, 1, "only fast backs break away");
                breakaways += 1;
            }
        }
    }
    assert!(totals[1] > totals[0] + 1000, "elite {} vs average {}", totals[1], totals[0]);
    assert!(breakaways > 0);
}

#[test]
fn elite_back_gains_on_seed_7_against_weak_tacklers() {
    let cfg = SimulationConfig::default();
    let line: Vec<Player> = [Position::C, Position::G, Position::G, Position::T, Position::T]
        .into_iter()
        .zip(60_u8..)
        .map(|(position, number)| Player::new("Lineman", number, position))
        .collect();
    let blockers: Vec<&Player> = line.iter().collect();
    let front: Vec<Player> = [Position::DE, Position::DT, Position::DT, Position::DE, Position::LB]
        .into_iter()
        .zip(90_u8..)
        .map(|(position, number)| {
            let mut defender = Player::new("Defender", number, position);
            defender.tackling = 10;
            defender
        })
        .collect();
    let defenders: Vec<&Player> = front.iter().collect();

    let mut back = Player::new("Elite", 28, Position::RB);
    back.speed = 99;
    back.rushing = 99;
    let offense_power = power::run_offense_power(&blockers, &back);
    let defense_power = power::run_defense_power(&defenders);

    let mut rng = GameRng::from_seed(7);
    let first = outcome::run_yards(&cfg.rushing, offense_power, defense_power, &back, 75, &mut rng);
    assert!(first.yards > 0, "seed 7 run went for {}", first.yards);

    let mut breakaways = u32::from(first.breakaway);
    for _ in 1..1000 {
        let run = outcome::run_yards(&cfg.rushing, offense_power, defense_power, &back, 75, &mut rng);
        assert!(run.yards > 0, "{}", run.yards);
        breakaways += u32::from(run.breakaway);
    }
    assert!(breakaways > 0);
}

#[test]
fn penalty_flags_track_catalog_odds() {
    let catalog = PenaltyCatalog {
        penalties: vec![PenaltyDef {
            name: PenaltyName::OffensiveHolding,
            odds: 0.2,
            home_odds: 0.7,
            away_odds: 0.3,
            yards: 10,
            automatic_first_down: false,
        }],
        checks: vec![PenaltyCheckEntry {
            timing: PenaltyTiming::During,
            play_type: PlayType::Pass,
            penalties: vec![PenaltyName::OffensiveHolding],
        }],
    };
    let mut rng = GameRng::from_seed(1234);
    let mut flags = 0_u32;
    let mut away = 0_u32;
    for _ in 0..SAMPLE_SIZE {
        if let Some(foul) = penalty_check(&catalog, PenaltyTiming::During, PlayType::Pass, &mut rng) {
            flags += 1;
            if foul.called_on == Possession::Away {
                away += 1;
            }
        }
    }
    let n = f64::from(SAMPLE_SIZE);
    let expected = n * 0.2;
    let sd = (n * 0.2 * 0.8).sqrt();
    assert!((f64::from(flags) - expected).abs() < 4.0 * sd, "flags {flags}");

    let hits = f64::from(flags);
    let away_sd = (hits * 0.3 * 0.7).sqrt();
    assert!((f64::from(away) - hits * 0.3).abs() < 4.0 * away_sd, "away {away} of {flags}");
}

#[test]
fn embedded_catalog_covers_every_check() {
    let catalog = PenaltyCatalog::default_catalog();
    let mut rng = GameRng::from_seed(9);
    for timing in [PenaltyTiming::Before, PenaltyTiming::During, PenaltyTiming::After] {
        for play_type in [
            PlayType::Kickoff,
            PlayType::Punt,
            PlayType::FieldGoal,
            PlayType::Run,
            PlayType::Pass,
        ] {
            let before = rng.draws();
            let _ = penalty_check(catalog, timing, play_type, &mut rng);
            assert!(rng.draws() > before, "{timing:?} {play_type:?} took no draw");
        }
    }
}
