use rand::RngCore;

use super::{Rules, coin_toss};
use crate::flow::Trigger;
use crate::model::{Game, HalfType, Play, Quarter, QuarterRef, QuarterType};
use crate::numbers::round_f64_to_u32;

/// Run the play's time off the quarter clock and advance the quarter when
/// it hits zero.
///
/// Regulation runs First, Second, Third, Fourth. A tied Fourth quarter is
/// re-tagged Overtime when overtime is enabled; any score in overtime ends
/// it. Every other expiry past the Fourth ends the game.
pub fn quarter_expire_check(game: &mut Game, play: &mut Play, rules: Rules<'_>) {
    let decisions = &rules.config.decisions;
    let Quarter {
        quarter_type,
        time_remaining,
    } = *game.quarter();
    play.clock_seconds = round_f64_to_u32(play.elapsed_time).min(time_remaining);
    let remaining = time_remaining - play.clock_seconds;
    game.quarter_mut().time_remaining = remaining;

    let sudden_death = quarter_type == QuarterType::Overtime && !play.scores.is_empty();
    if remaining > 0 && !sudden_death {
        return;
    }
    play.quarter_expired = true;
    match quarter_type {
        QuarterType::First => {
            game.current_quarter = QuarterRef { half: 0, quarter: 1 };
        }
        QuarterType::Second => {
            game.current_quarter = QuarterRef { half: 1, quarter: 0 };
        }
        QuarterType::Third => {
            game.current_quarter = QuarterRef { half: 1, quarter: 1 };
        }
        QuarterType::Fourth if decisions.overtime_enabled && game.is_tied() => {
            *game.quarter_mut() = Quarter {
                quarter_type: QuarterType::Overtime,
                time_remaining: decisions.overtime_seconds,
            };
            log::info!("regulation ends tied; overtime");
        }
        QuarterType::Fourth | QuarterType::Overtime | QuarterType::GameOver => {
            game.quarter_mut().quarter_type = QuarterType::GameOver;
        }
    }
    log::debug!(
        "play {}: quarter {} expired, now {}",
        play.number,
        play.quarter,
        game.quarter().quarter_type
    );
}

/// Mark half and game boundaries once a quarter has expired.
pub fn half_expire_check(game: &mut Game, play: &mut Play) {
    if !play.quarter_expired {
        return;
    }
    match play.quarter {
        QuarterType::Second => {
            game.current_half = 1;
            play.half_expired = true;
        }
        _ if game.is_over() => {
            game.halves[game.current_half].half_type = HalfType::GameOver;
            play.half_expired = true;
            play.game_expired = true;
            log::info!(
                "final: {} {} - {} {}",
                game.home_team.display_name(),
                game.home_score,
                game.away_score,
                game.away_team.display_name()
            );
        }
        _ if game.quarter().quarter_type == QuarterType::Overtime => {
            play.half_expired = true;
        }
        _ => {}
    }
}

/// Intermission: end the game, start overtime, or schedule the second-half kick.
pub fn halftime<R: RngCore>(game: &mut Game, rng: &mut R) -> Trigger {
    if game.is_over() {
        return Trigger::GameExpired;
    }
    if game.quarter().quarter_type == QuarterType::Overtime {
        coin_toss(game, rng);
    } else {
        game.pending_kickoff = Some(game.opening_receiver);
    }
    Trigger::HalftimeOver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::model::{PlayType, Possession};
    use crate::rng::GameRng;
    use crate::test_support::{game, quiet_rules};

    fn timed(game: &Game, seconds: f64) -> Play {
        let quarter = game.quarter();
        let mut play = Play::new(
            1,
            PlayType::Run,
            Possession::Home,
            quarter.quarter_type,
            quarter.time_remaining,
            40,
        );
        play.elapsed_time = seconds;
        play
    }

    #[test]
    fn clock_runs_down_to_the_next_quarter() {
        let config = SimulationConfig::default();
        let rules = quiet_rules(&config);
        let mut game = game();
        let mut play = timed(&game, 899.6);
        quarter_expire_check(&mut game, &mut play, rules);
        assert_eq!(play.clock_seconds, 900);
        assert!(play.quarter_expired);
        assert_eq!(game.current_quarter, QuarterRef { half: 0, quarter: 1 });
        assert_eq!(game.halves[0].quarters[0].time_remaining, 0);
        half_expire_check(&mut game, &mut play);
        assert!(!play.half_expired);
    }

    #[test]
    fn second_quarter_expiry_ends_the_half() {
        let config = SimulationConfig::default();
        let mut game = game();
        game.current_quarter = QuarterRef { half: 0, quarter: 1 };
        let mut play = timed(&game, 2_000.0);
        quarter_expire_check(&mut game, &mut play, quiet_rules(&config));
        half_expire_check(&mut game, &mut play);
        assert!(play.half_expired);
        assert_eq!(game.current_half, 1);
        assert_eq!(game.quarter().quarter_type, QuarterType::Third);

        let mut rng = GameRng::from_seed(1);
        game.opening_receiver = Possession::Away;
        assert_eq!(halftime(&mut game, &mut rng), Trigger::HalftimeOver);
        assert_eq!(game.pending_kickoff, Some(Possession::Away));
    }

    #[test]
    fn tied_fourth_goes_to_overtime_then_game_over() {
        let config = SimulationConfig::default();
        let rules = quiet_rules(&config);
        let mut game = game();
        game.current_half = 1;
        game.current_quarter = QuarterRef { half: 1, quarter: 1 };
        let mut play = timed(&game, 950.0);
        quarter_expire_check(&mut game, &mut play, rules);
        half_expire_check(&mut game, &mut play);
        assert_eq!(game.quarter().quarter_type, QuarterType::Overtime);
        assert_eq!(game.quarter().time_remaining, 600);
        assert!(play.half_expired);
        assert!(!play.game_expired);

        let mut rng = GameRng::from_seed(3);
        assert_eq!(halftime(&mut game, &mut rng), Trigger::HalftimeOver);
        assert!(game.pending_kickoff.is_some());

        let mut ot = timed(&game, 30.0);
        game.home_score = 3;
        ot.scores.push(crate::model::ScoreEvent {
            team: Possession::Home,
            kind: crate::model::ScoreKind::FieldGoal,
            points: 3,
        });
        quarter_expire_check(&mut game, &mut ot, rules);
        half_expire_check(&mut game, &mut ot);
        assert!(ot.game_expired);
        assert!(game.is_over());
        assert_eq!(game.half().half_type, HalfType::GameOver);
        assert_eq!(halftime(&mut game, &mut rng), Trigger::GameExpired);
    }

    #[test]
    fn decided_fourth_ends_the_game() {
        let config = SimulationConfig::default();
        let mut game = game();
        game.current_half = 1;
        game.current_quarter = QuarterRef { half: 1, quarter: 1 };
        game.away_score = 10;
        let mut play = timed(&game, 900.0);
        quarter_expire_check(&mut game, &mut play, quiet_rules(&config));
        half_expire_check(&mut game, &mut play);
        assert!(play.game_expired);
        assert!(game.is_over());
    }
}
