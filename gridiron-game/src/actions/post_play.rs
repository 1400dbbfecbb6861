use rand::RngCore;

use super::enforcement::DownState;
use super::{
    Rules, apply_penalties, half_expire_check, injury_check, quarter_expire_check, score_check,
};
use crate::error::SimulationError;
use crate::flow::Trigger;
use crate::model::{Game, PenaltyTiming, Play, PlayType};
use crate::numbers::clamp_to_u8;
use crate::skills;

/// Move the chains: commit the dead-ball spot and work out the next down.
///
/// A play killed before the snap leaves the game untouched; enforcement
/// replays it. A score leaves the spot alone for the ensuing free kick.
pub fn advance_down(game: &mut Game, play: &mut Play) {
    if play.has_pre_snap_foul() {
        return;
    }
    game.possession = play.end_possession;
    game.field_position = play.end_field_position;
    if play.scoring.is_some() {
        return;
    }
    if play.play_type == PlayType::Kickoff || play.possession_change {
        game.first_and_ten();
        return;
    }
    let gain = play.net_gain();
    let to_go = i32::from(play.yards_to_go);
    if gain >= to_go {
        play.first_down = true;
        game.first_and_ten();
        return;
    }
    match play.down.next() {
        Some(next) => {
            game.down = next;
            let to_goal = game.yards_to_goal().max(1);
            game.yards_to_go = clamp_to_u8((to_go - gain).clamp(1, to_goal));
        }
        None => {
            play.turnover_on_downs = true;
            play.narrate(format!(
                "Turnover on downs; {} take over",
                game.team(game.possession.opponent()).display_name()
            ));
            game.turn_over();
            game.first_and_ten();
        }
    }
}

/// Fold the finished play back into the game and append it to the log.
///
/// Order: live-ball and post-play flags, score, injuries, down, penalty
/// enforcement, quarter clock, half boundary, log.
///
/// # Errors
///
/// Returns [`SimulationError::NoActivePlay`] when no play is in progress.
pub fn post_play<R: RngCore>(
    game: &mut Game,
    rules: Rules<'_>,
    rng: &mut R,
) -> Result<Trigger, SimulationError> {
    let mut play = game
        .current_play
        .take()
        .ok_or(SimulationError::NoActivePlay)?;
    let before = DownState::of(game);

    if !play.has_pre_snap_foul() {
        for timing in [PenaltyTiming::During, PenaltyTiming::After] {
            if let Some(foul) = skills::penalty_check(rules.penalties, timing, play.play_type, rng)
            {
                play.narrate(format!(
                    "Flag: {} on {}",
                    foul.name,
                    game.team(foul.called_on).display_name()
                ));
                play.penalties.push(foul);
            }
        }
    }

    score_check(game, &mut play, rules, rng);
    injury_check(game, &mut play, rules, rng);
    advance_down(game, &mut play);
    apply_penalties(game, &mut play, before);
    quarter_expire_check(game, &mut play, rules);
    half_expire_check(game, &mut play);

    log::debug!(
        "play {} done: {} {}-{}, {} {} at {}",
        play.number,
        play.play_type,
        game.home_score,
        game.away_score,
        game.possession,
        game.down,
        game.field_position
    );
    let expired = play.quarter_expired;
    game.plays.push(play);
    Ok(Trigger::NextPlay(expired))
}
