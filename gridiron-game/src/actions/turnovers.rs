use rand::RngCore;

use super::{Rules, awareness, unit_of};
use crate::constants::{
    FIELD_GOAL_SECONDS, FUMBLE_SECONDS, GOAL_LINE, INTERCEPTION_RETURN_SECONDS, PUNT_BASE_SECONDS,
    RETURN_SECONDS_PER_YARD,
};
use crate::flow::Trigger;
use crate::model::{FumbleContext, FumbleRecord, Game, Play, PlayDetail, PlayType, Position};
use crate::outcome;
use crate::power::tackling_power;
use crate::skills::{self, occurs};

const SCOOPERS: [Position; 6] = [
    Position::CB,
    Position::S,
    Position::FS,
    Position::OLB,
    Position::LB,
    Position::DE,
];

/// Run back an interception from the catch spot.
///
/// Draw order: catch depth, return yards, then tacklers when the return
/// stops short of the goal line.
pub fn interception_return<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) -> Trigger {
    let interceptor = match &play.detail {
        PlayDetail::Pass(detail) => detail.interceptor,
        _ => None,
    };
    let depth = outcome::interception_depth(rng);
    let catch_spot = (i32::from(play.start_field_position) + depth).min(GOAL_LINE - 1);
    let defense_spot = GOAL_LINE - catch_spot;
    let return_yards = interceptor.and_then(|i| game.player(i)).map_or(0, |player| {
        outcome::interception_return(&rules.config.passing, player, GOAL_LINE - defense_spot, rng)
    });
    play.set_ball(play.defense(), defense_spot + return_yards);
    play.ball_carrier = interceptor;
    play.fumble_context = FumbleContext::Return;
    if i32::from(play.end_field_position) < GOAL_LINE {
        play.tacklers = skills::tacklers(game, &play.offense_on_field, rng);
    }
    if let PlayDetail::Pass(detail) = &mut play.detail {
        detail.return_yards = return_yards;
    }
    play.elapsed_time += INTERCEPTION_RETURN_SECONDS;
    play.narrate(format!("Returned {return_yards} yards"));
    Trigger::Fumble
}

/// Scramble for a blocked punt or field goal behind the line.
///
/// Draw order: recovering side, then yards lost by the kicking team. A
/// defense that scoops up a blocked field goal runs it back: return yards,
/// then tacklers when the return stops short of the goal line.
pub fn blocked_kick<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) -> Trigger {
    let defense_recovers = occurs(rules.config.turnovers.blocked_kick_defense_recovery, rng);
    let loss = outcome::blocked_kick_loss(rng);
    play.set_ball(play.possession, i32::from(play.start_field_position) - loss);
    if defense_recovers {
        play.change_possession();
        play.narrate(format!(
            "{} scoop up the loose ball",
            game.team(play.end_possession).display_name()
        ));
        if play.play_type == PlayType::FieldGoal {
            return_blocked_field_goal(game, play, rules, rng);
        }
    } else {
        play.narrate(format!(
            "{} fall on it, {loss} yards behind the line",
            game.team(play.possession).display_name()
        ));
    }
    play.yards_gained = -loss;
    play.elapsed_time += if play.play_type == PlayType::Punt {
        PUNT_BASE_SECONDS
    } else {
        FIELD_GOAL_SECONDS
    };
    Trigger::Fumble
}

fn return_blocked_field_goal<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) {
    let Some((scooper, player)) = skills::returner(game, &play.defense_on_field, &SCOOPERS)
        .and_then(|r| game.player(r).map(|p| (r, p)))
    else {
        return;
    };
    let yards = outcome::blocked_field_goal_return(&rules.config.field_goals, player, rng);
    play.set_ball(
        play.end_possession,
        (i32::from(play.end_field_position) + yards).max(1),
    );
    play.ball_carrier = Some(scooper);
    play.fumble_context = FumbleContext::Return;
    if i32::from(play.end_field_position) < GOAL_LINE {
        play.tacklers = skills::tacklers(game, &play.offense_on_field, rng);
    }
    if let PlayDetail::FieldGoal(detail) = &mut play.detail {
        detail.returner = Some(scooper);
        detail.return_yards = yards;
    }
    play.elapsed_time += RETURN_SECONDS_PER_YARD * f64::from(yards.abs());
    play.narrate(format!("{} returns it {yards} yards", player.tag()));
}

/// Check whether the ball carrier put it on the ground, and who came up with it.
///
/// Only a carrier brought down in the field of play can fumble. Draw order:
/// the fumble roll, then the recovery draws, then the return for a
/// recovering defense.
pub fn fumble_return<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) -> Trigger {
    let cfg = &rules.config.turnovers;
    let spot = i32::from(play.end_field_position);
    let Some(fumbler) = play.ball_carrier else {
        return Trigger::PlayResult;
    };
    let Some(carrier) = game.player(fumbler) else {
        return Trigger::PlayResult;
    };
    if spot <= 0 || spot >= GOAL_LINE {
        return Trigger::PlayResult;
    }

    let holder = play.end_possession;
    let own_unit = unit_of(play, holder);
    let opposing_unit = unit_of(play, holder.opponent());
    let hitters = game.resolve(opposing_unit);
    let chance = skills::fumble_chance(
        cfg,
        play.fumble_context,
        tackling_power(&hitters),
        carrier.ball_security(),
        play.tacklers.len(),
    );
    if !occurs(chance, rng) {
        return Trigger::PlayResult;
    }

    let recovery = skills::fumble_recovery(
        cfg,
        awareness(game, own_unit),
        awareness(game, opposing_unit),
        rng,
    );
    let lost = !recovery.fumbling_side_recovers;
    let recoverer = if lost {
        play.tacklers
            .first()
            .copied()
            .or_else(|| opposing_unit.first().copied())
    } else {
        Some(fumbler)
    };
    play.narrate(format!("{} fumbles!", carrier.tag()));
    if recovery.out_of_bounds {
        play.narrate("The ball squirts out of bounds");
    }
    if lost {
        play.change_possession();
        let advance = outcome::fumble_return(rng);
        play.set_ball(
            play.end_possession,
            i32::from(play.end_field_position) + advance,
        );
        play.narrate(format!(
            "Recovered by {}, returned {advance} yards",
            game.team(play.end_possession).display_name()
        ));
    } else if !recovery.out_of_bounds {
        play.narrate(format!(
            "{} hang on to it",
            game.team(holder).display_name()
        ));
    }
    log::debug!(
        "play {}: fumble by {holder}, lost={lost}, bounce={:?}",
        play.number,
        recovery.bounce
    );
    play.fumbles.push(FumbleRecord {
        fumbler,
        context: play.fumble_context,
        recovered_by: play.end_possession,
        recoverer,
        out_of_bounds: recovery.out_of_bounds,
        lost,
    });
    play.elapsed_time += FUMBLE_SECONDS;
    Trigger::PlayResult
}
