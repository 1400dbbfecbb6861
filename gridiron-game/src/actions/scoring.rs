use rand::RngCore;

use super::Rules;
use crate::constants::{
    EXTRA_POINT_POINTS, EXTRA_POINT_SPOT, FIELD_GOAL_POINTS, SAFETY_POINTS, TOUCHDOWN_POINTS,
    TWO_POINT_POINTS,
};
use crate::model::{
    Game, Play, Position, Possession, QuarterType, ScoreEvent, ScoreKind, ScoringPlay,
};
use crate::outcome::{field_goal_distance, field_goal_make_chance};
use crate::skills::occurs;

fn award(game: &mut Game, play: &mut Play, team: Possession, kind: ScoreKind, points: u16) {
    game.add_points(team, points);
    play.scores.push(ScoreEvent { team, kind, points });
}

/// Credit the play's score, run the try after a touchdown, and schedule
/// the free kick: the scorer kicks after a touchdown or field goal, the
/// team that conceded a safety kicks after one.
pub fn score_check<R: RngCore>(game: &mut Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) {
    let Some(scoring) = play.scoring else {
        return;
    };
    match scoring {
        ScoringPlay::Touchdown(team) => {
            award(game, play, team, ScoreKind::Touchdown, TOUCHDOWN_POINTS);
            if play.quarter != QuarterType::Overtime {
                conversion(game, play, team, rules, rng);
            }
            game.pending_kickoff = Some(team);
        }
        ScoringPlay::FieldGoal(team) => {
            award(game, play, team, ScoreKind::FieldGoal, FIELD_GOAL_POINTS);
            game.pending_kickoff = Some(team);
        }
        ScoringPlay::Safety(team) => {
            award(game, play, team, ScoreKind::Safety, SAFETY_POINTS);
            game.pending_kickoff = Some(team.opponent());
        }
    }
    log::debug!(
        "play {}: {scoring:?}, score {}-{}",
        play.number,
        game.home_score,
        game.away_score
    );
}

/// Two-point try or extra point.
///
/// Draw order: try selection, then either (run/pass, success) for two or
/// the kick for one.
fn conversion<R: RngCore>(
    game: &mut Game,
    play: &mut Play,
    team: Possession,
    rules: Rules<'_>,
    rng: &mut R,
) {
    let decisions = &rules.config.decisions;
    let name = game.team(team).display_name();
    if occurs(decisions.two_point_attempt_probability, rng) {
        let style = if occurs(decisions.two_point_run_probability, rng) {
            "run"
        } else {
            "pass"
        };
        if occurs(decisions.two_point_success_probability, rng) {
            award(game, play, team, ScoreKind::TwoPoint, TWO_POINT_POINTS);
            play.narrate(format!("{name} convert the two-point {style}"));
        } else {
            play.narrate(format!("{name} are stopped on the two-point {style}"));
        }
        return;
    }

    let roster = game.team(team);
    let kicker = roster
        .available_at(Position::K)
        .next()
        .and_then(|index| roster.player(index));
    let good = match kicker {
        Some(kicker) => occurs(
            field_goal_make_chance(
                &rules.config.field_goals,
                field_goal_distance(EXTRA_POINT_SPOT),
                f64::from(kicker.kicking),
            ),
            rng,
        ),
        None => {
            log::warn!("play {}: no kicker for the extra point", play.number);
            false
        }
    };
    if good {
        award(game, play, team, ScoreKind::ExtraPoint, EXTRA_POINT_POINTS);
        play.narrate("The extra point is good");
    } else {
        play.narrate("The extra point is no good");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::model::PlayType;
    use crate::rng::GameRng;
    use crate::test_support::{game, quiet_rules};

    fn scored(scoring: ScoringPlay, quarter: QuarterType) -> Play {
        let mut play = Play::new(9, PlayType::Run, Possession::Home, quarter, 120, 95);
        play.scoring = Some(scoring);
        play
    }

    #[test]
    fn touchdown_with_certain_extra_point() {
        let mut config = SimulationConfig::default();
        config.decisions.two_point_attempt_probability = 0.0;
        config.field_goals.make_bounds.min = 1.0;
        config.field_goals.make_bounds.max = 1.0;
        let mut game = game();
        let mut play = scored(ScoringPlay::Touchdown(Possession::Home), QuarterType::Second);
        let mut rng = GameRng::from_seed(1);
        score_check(&mut game, &mut play, quiet_rules(&config), &mut rng);
        assert_eq!(game.home_score, 7);
        assert_eq!(play.points(Possession::Home), 7);
        assert_eq!(game.pending_kickoff, Some(Possession::Home));
    }

    #[test]
    fn two_point_try_when_forced() {
        let mut config = SimulationConfig::default();
        config.decisions.two_point_attempt_probability = 1.0;
        config.decisions.two_point_success_probability = 1.0;
        let mut game = game();
        let mut play = scored(ScoringPlay::Touchdown(Possession::Away), QuarterType::Fourth);
        let mut rng = GameRng::from_seed(1);
        score_check(&mut game, &mut play, quiet_rules(&config), &mut rng);
        assert_eq!(game.away_score, 8);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn overtime_touchdown_skips_the_try() {
        let config = SimulationConfig::default();
        let mut game = game();
        let mut play = scored(ScoringPlay::Touchdown(Possession::Home), QuarterType::Overtime);
        let mut rng = GameRng::from_seed(1);
        score_check(&mut game, &mut play, quiet_rules(&config), &mut rng);
        assert_eq!(game.home_score, 6);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn safety_makes_the_conceding_team_kick() {
        let config = SimulationConfig::default();
        let mut game = game();
        let mut play = scored(ScoringPlay::Safety(Possession::Away), QuarterType::Third);
        let mut rng = GameRng::from_seed(1);
        score_check(&mut game, &mut play, quiet_rules(&config), &mut rng);
        assert_eq!(game.away_score, 2);
        assert_eq!(game.pending_kickoff, Some(Possession::Home));
    }
}
