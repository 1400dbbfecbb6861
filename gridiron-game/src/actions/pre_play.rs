use rand::RngCore;

use super::{Rules, personnel};
use crate::constants::{
    GOOD_SNAP_SECONDS, HUDDLE_SECONDS, KICKOFF_SPOT, MUFFED_SNAP_SECONDS,
    PLAY_CLOCK_RUNOFF_SECONDS,
};
use crate::flow::Trigger;
use crate::model::{Down, Game, PenaltyTiming, Play, PlayType, Position};
use crate::outcome::field_goal_distance;
use crate::rng::Roll;
use crate::skills::{self, CoinToss};

/// Toss for the opening (or overtime) possession and schedule the kickoff.
///
/// The receiving team is the toss winner unless it defers.
pub fn coin_toss<R: RngCore>(game: &mut Game, rng: &mut R) -> CoinToss {
    let toss = skills::coin_toss(rng);
    let receiver = toss.receiver();
    game.won_coin_toss = toss.winner;
    game.deferred_possession = toss.deferred;
    game.opening_receiver = receiver;
    game.possession = receiver.opponent();
    game.pending_kickoff = Some(receiver.opponent());
    log::info!(
        "{} wins the toss{}; {} receives",
        game.team(toss.winner).display_name(),
        if toss.deferred { " and defers" } else { "" },
        game.team(receiver).display_name(),
    );
    toss
}

/// Pick the next scrimmage call for the team with the ball.
///
/// Fourth down is decided without a draw: kick the field goal when it is in
/// range and a kicker is healthy, go for it when short and deep enough,
/// punt otherwise. Every other down draws once against the run share.
pub fn choose_play_type<R: RngCore>(game: &Game, rules: Rules<'_>, rng: &mut R) -> PlayType {
    let decisions = &rules.config.decisions;
    if game.down == Down::Fourth {
        let in_range = field_goal_distance(game.field_position) <= decisions.field_goal_max_distance;
        let has_kicker = game
            .team(game.possession)
            .available_at(Position::K)
            .next()
            .is_some();
        if in_range && has_kicker {
            return PlayType::FieldGoal;
        }
        let go_for_it = game.yards_to_go <= decisions.fourth_down_go_max_yards
            && game.field_position >= decisions.fourth_down_go_min_field_position;
        if !go_for_it {
            return PlayType::Punt;
        }
    }
    if rng.roll() <= decisions.run_probability {
        PlayType::Run
    } else {
        PlayType::Pass
    }
}

/// Build the next play, put personnel on the field, and check the snap.
///
/// Draw order: play call (scrimmage only), pre-snap penalty, snap quality.
pub fn pre_play<R: RngCore>(game: &mut Game, rules: Rules<'_>, rng: &mut R) -> Trigger {
    let play_type = if let Some(kicker) = game.pending_kickoff.take() {
        game.possession = kicker;
        game.field_position = KICKOFF_SPOT;
        game.down = Down::None;
        PlayType::Kickoff
    } else {
        choose_play_type(game, rules, rng)
    };

    let number = u32::try_from(game.plays.len() + 1).unwrap_or(u32::MAX);
    let quarter = *game.quarter();
    let mut play = Play::new(
        number,
        play_type,
        game.possession,
        quarter.quarter_type,
        quarter.time_remaining,
        game.field_position,
    );
    if play_type != PlayType::Kickoff {
        play.down = game.down;
        play.yards_to_go = game.yards_to_go;
    }
    if play_type.is_scrimmage() {
        play.elapsed_time += HUDDLE_SECONDS + PLAY_CLOCK_RUNOFF_SECONDS;
    }

    let (offense, defense) = personnel(game, play_type, game.possession);
    play.offense_on_field = offense;
    play.defense_on_field = defense;

    let offense_name = game.team(game.possession).display_name();
    if play_type == PlayType::Kickoff {
        play.narrate(format!(
            "{offense_name} kick off from their own {}",
            game.field_position
        ));
    } else {
        play.narrate(format!(
            "{offense_name}, {} and {} at their own {}: {play_type}",
            play.down, play.yards_to_go, game.field_position
        ));
    }

    if let Some(foul) = skills::penalty_check(rules.penalties, PenaltyTiming::Before, play_type, rng)
    {
        play.narrate(format!(
            "Flag before the snap: {} on {}",
            foul.name,
            game.team(foul.called_on).display_name()
        ));
        log::debug!("play {number}: pre-snap {} on {}", foul.name, foul.called_on);
        play.penalties.push(foul);
    }

    if play_type != PlayType::Kickoff {
        play.good_snap = skills::snap_is_good(&rules.config.turnovers, play_type, rng);
        if play.good_snap {
            play.elapsed_time += GOOD_SNAP_SECONDS;
        } else {
            play.elapsed_time += MUFFED_SNAP_SECONDS;
            play.narrate("The snap is muffed");
        }
    }

    log::debug!(
        "play {number}: {play_type} by {} from {}",
        play.possession,
        play.start_field_position
    );
    game.current_play = Some(play);
    Trigger::Snap
}
