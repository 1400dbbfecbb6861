use rand::RngCore;

use super::{Rules, first_at};
use crate::config::YardRange;
use crate::constants::{
    GOAL_LINE, KICKOFF_BASE_SECONDS, ONSIDE_RECOVERY_SPOT, PASS_COMPLETE_BASE_SECONDS,
    PASS_INCOMPLETE_SECONDS, PUNT_BASE_SECONDS, RETURN_SECONDS_PER_YARD, SACK_SECONDS,
    TOUCHBACK_SPOT, FIELD_GOAL_SECONDS,
};
use crate::flow::Trigger;
use crate::line_battle::pressure_factor;
use crate::model::{
    FieldGoalDetail, FumbleContext, FumbleRecord, Game, KickoffDetail, PassDetail, Play,
    PlayDetail, PlayType, PlayerRef, Position, PuntDetail, RunDetail,
};
use crate::numbers::round_f64_to_u32;
use crate::outcome;
use crate::power;
use crate::skills::{self, occurs};

const KICK_RETURNERS: [Position; 2] = [Position::WR, Position::RB];
const PUNT_RETURNERS: [Position; 3] = [Position::WR, Position::RB, Position::CB];
const INTERCEPTORS: [Position; 4] = [Position::CB, Position::S, Position::FS, Position::LB];

/// Resolve the snapped play for its type.
///
/// Returns the trigger that leaves the play state: a block or interception
/// branch, or `Fumble` to run the loose-ball check.
pub fn execute_play<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) -> Trigger {
    if play.has_pre_snap_foul() {
        if play.play_type == PlayType::Kickoff {
            play.narrate("The kick is waved off and will be tried again");
        } else {
            play.narrate("The play is dead");
        }
        return Trigger::Fumble;
    }
    match play.play_type {
        PlayType::Kickoff => kickoff(game, play, rules, rng),
        PlayType::Punt => punt(game, play, rules, rng),
        PlayType::FieldGoal => field_goal(game, play, rules, rng),
        PlayType::Run => run(game, play, rules, rng),
        PlayType::Pass => pass(game, play, rules, rng),
    }
}

fn return_seconds(yards: i32) -> f64 {
    RETURN_SECONDS_PER_YARD * f64::from(yards.abs())
}

/// Free kick from the tee.
///
/// Draw order: onside attempt, then either the onside recovery or the kick
/// distance followed by out of bounds, fair catch, muff and return, stopping
/// at the first that happens. End-zone kicks are touchbacks before any
/// coverage draw; an in-bounds kick with nobody back to field it is one too.
fn kickoff<R: RngCore>(game: &Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) -> Trigger {
    let cfg = &rules.config.kickoffs;
    let kicking = play.possession;
    let receiving = kicking.opponent();
    let mut detail = KickoffDetail {
        kicker: first_at(game, &play.offense_on_field, Position::K),
        ..KickoffDetail::default()
    };
    let kicker = detail.kicker.and_then(|k| game.player(k));

    let second_half = game.current_half == 1;
    if skills::onside_attempt(cfg, game.deficit(kicking), second_half, rng) {
        detail.onside = true;
        detail.onside_recovered = occurs(skills::onside_recovery_chance(cfg, kicker), rng);
        let spot = i32::from(ONSIDE_RECOVERY_SPOT);
        if detail.onside_recovered {
            play.set_ball(kicking, spot);
            play.narrate(format!(
                "Onside kick recovered by {}",
                game.team(kicking).display_name()
            ));
        } else {
            play.set_ball(receiving, GOAL_LINE - spot);
            play.narrate(format!(
                "Onside kick fielded by {}",
                game.team(receiving).display_name()
            ));
        }
        play.elapsed_time += KICKOFF_BASE_SECONDS;
        play.detail = PlayDetail::Kickoff(detail);
        return Trigger::Fumble;
    }

    let distance = outcome::kickoff_distance(cfg, kicker, rng);
    detail.distance = distance;
    let landing = i32::from(play.start_field_position) + distance;
    let mut return_yards = 0;
    if landing >= GOAL_LINE {
        detail.touchback = true;
        play.set_ball(receiving, i32::from(TOUCHBACK_SPOT));
        play.narrate(format!("Kickoff of {distance} yards into the end zone, touchback"));
    } else if occurs(skills::kickoff_out_of_bounds_chance(cfg, landing), rng) {
        detail.out_of_bounds = true;
        play.set_ball(receiving, i32::from(cfg.out_of_bounds_spot));
        play.narrate(format!(
            "The kickoff goes out of bounds; {} take it at the {}",
            game.team(receiving).display_name(),
            cfg.out_of_bounds_spot
        ));
    } else {
        let catch_spot = GOAL_LINE - landing;
        detail.returner = skills::returner(game, &play.defense_on_field, &KICK_RETURNERS);
        match detail.returner.and_then(|r| game.player(r).map(|p| (r, p))) {
            None => {
                detail.touchback = true;
                play.set_ball(receiving, i32::from(TOUCHBACK_SPOT));
                play.narrate("Nobody back to field it; touchback");
            }
            Some((returner_ref, returner)) => {
                let hang_time = outcome::kickoff_hang_time(cfg, distance);
                if occurs(skills::fair_catch_chance(&cfg.fair_catch, hang_time, catch_spot), rng) {
                    detail.fair_catch = true;
                    play.set_ball(receiving, catch_spot);
                    play.narrate(format!(
                        "{} calls for a fair catch at the {catch_spot}",
                        returner.tag()
                    ));
                } else if occurs(skills::kickoff_muff_chance(cfg, returner, landing), rng) {
                    detail.muffed = true;
                    muffed_kick(
                        game,
                        play,
                        returner_ref,
                        catch_spot,
                        cfg.muff_receiving_recovery,
                        cfg.muff_recovery_yards,
                        rng,
                    );
                } else {
                    let ret = outcome::kickoff_return(cfg, returner, rng);
                    return_yards = ret.yards;
                    detail.return_yards = ret.yards;
                    play.set_ball(receiving, catch_spot + ret.yards);
                    play.ball_carrier = Some(returner_ref);
                    play.fumble_context = FumbleContext::Return;
                    if i32::from(play.end_field_position) < GOAL_LINE {
                        play.tacklers = skills::tacklers(game, &play.offense_on_field, rng);
                    }
                    play.narrate(format!(
                        "{} takes it at the {catch_spot} and returns it to the {}{}",
                        returner.tag(),
                        play.end_field_position,
                        if ret.big_return { ", a big return" } else { "" }
                    ));
                }
            }
        }
    }
    play.elapsed_time += KICKOFF_BASE_SECONDS + return_seconds(return_yards);
    play.detail = PlayDetail::Kickoff(detail);
    Trigger::Fumble
}

/// A fielded kick hits the ground. The receivers fall on it near the catch
/// spot, or the kicking team takes over where it was muffed.
fn muffed_kick<R: RngCore>(
    game: &Game,
    play: &mut Play,
    returner: PlayerRef,
    catch_spot: i32,
    receiving_recovery: f64,
    spread: YardRange,
    rng: &mut R,
) {
    let kicking = play.possession;
    let receiving = kicking.opponent();
    let scramble = outcome::muff_recovery(receiving_recovery, spread, rng);
    if scramble.receiving_team {
        play.set_ball(receiving, (catch_spot + scramble.yards).clamp(1, GOAL_LINE - 1));
        play.narrate(format!(
            "{} muffs it, but {} fall on it at the {}",
            game.player_tag(returner),
            game.team(receiving).display_name(),
            play.end_field_position
        ));
    } else {
        play.set_ball(kicking, GOAL_LINE - catch_spot);
        play.narrate(format!(
            "{} muffs it and {} recover!",
            game.player_tag(returner),
            game.team(kicking).display_name()
        ));
    }
    log::debug!(
        "play {}: muffed kick by {returner:?}, recovered by {}",
        play.number,
        play.end_possession
    );
    play.fumbles.push(FumbleRecord {
        fumbler: returner,
        context: FumbleContext::Return,
        recovered_by: play.end_possession,
        recoverer: None,
        out_of_bounds: false,
        lost: !scramble.receiving_team,
    });
}

/// Draw order: block, distance, hang time, then out of bounds, downed, fair
/// catch, muff and return, stopping at the first that happens. A punt with
/// nobody back to field it is downed without a draw.
fn punt<R: RngCore>(game: &Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) -> Trigger {
    let cfg = &rules.config.punts;
    let kicking = play.possession;
    let receiving = kicking.opponent();
    let mut detail = PuntDetail {
        punter: first_at(game, &play.offense_on_field, Position::P),
        ..PuntDetail::default()
    };

    let offense = game.resolve(&play.offense_on_field);
    let defense = game.resolve(&play.defense_on_field);
    let block = skills::punt_block_chance(
        cfg,
        play.good_snap,
        power::pass_rush_power(&defense),
        power::pass_blocking_power(&offense),
    );
    if occurs(block, rng) {
        detail.blocked = true;
        play.narrate("The punt is blocked!");
        play.detail = PlayDetail::Punt(detail);
        return Trigger::PuntBlocked;
    }

    let punter = detail.punter.and_then(|p| game.player(p));
    if punter.is_none() {
        log::warn!("play {}: no punter on the field", play.number);
        play.narrate("No punter available; the ball is booted away");
    }
    let distance = outcome::punt_distance(cfg, punter, rng);
    let hang_time = outcome::punt_hang_time(cfg, distance, rng);
    detail.distance = distance;
    detail.hang_tenths = round_f64_to_u32(hang_time * 10.0);
    let landing = i32::from(play.start_field_position) + distance;
    let mut return_yards = 0;
    if landing >= GOAL_LINE {
        detail.touchback = true;
        play.set_ball(receiving, i32::from(TOUCHBACK_SPOT));
        play.narrate(format!("Punt of {distance} yards into the end zone, touchback"));
    } else {
        let catch_spot = GOAL_LINE - landing;
        detail.returner = skills::returner(game, &play.defense_on_field, &PUNT_RETURNERS);
        let fielder = detail.returner.and_then(|r| game.player(r).map(|p| (r, p)));
        if occurs(skills::punt_out_of_bounds_chance(cfg, catch_spot), rng) {
            detail.out_of_bounds = true;
            play.set_ball(receiving, catch_spot);
            play.narrate(format!(
                "Punt of {distance} yards goes out of bounds at the {catch_spot}"
            ));
        } else if let Some((returner_ref, returner)) = fielder
            && !occurs(skills::punt_downed_chance(cfg, catch_spot, hang_time), rng)
        {
            if occurs(skills::fair_catch_chance(&cfg.fair_catch, hang_time, catch_spot), rng) {
                detail.fair_catch = true;
                play.set_ball(receiving, catch_spot);
                play.narrate(format!(
                    "Punt of {distance} yards, fair catch at the {catch_spot}"
                ));
            } else if occurs(skills::punt_muff_chance(cfg, returner, hang_time), rng) {
                detail.muffed = true;
                play.narrate(format!("Punt of {distance} yards"));
                muffed_kick(
                    game,
                    play,
                    returner_ref,
                    catch_spot,
                    cfg.muff_receiving_recovery,
                    cfg.muff_recovery_yards,
                    rng,
                );
            } else {
                let ret = outcome::punt_return(cfg, returner, hang_time, rng);
                detail.return_yards = ret.yards;
                return_yards = ret.yards;
                play.set_ball(receiving, (catch_spot + ret.yards).max(1));
                play.ball_carrier = Some(returner_ref);
                play.fumble_context = FumbleContext::Return;
                if i32::from(play.end_field_position) < GOAL_LINE {
                    play.tacklers = skills::tacklers(game, &play.offense_on_field, rng);
                }
                play.narrate(format!(
                    "Punt of {distance} yards, {} returns it {} yards{}",
                    returner.tag(),
                    ret.yards,
                    if ret.big_return { ", a big return" } else { "" }
                ));
            }
        } else {
            detail.downed = true;
            play.set_ball(receiving, catch_spot);
            play.narrate(format!("Punt of {distance} yards, downed at the {catch_spot}"));
        }
    }
    play.elapsed_time += PUNT_BASE_SECONDS + return_seconds(return_yards);
    play.detail = PlayDetail::Punt(detail);
    Trigger::Fumble
}

fn field_goal<R: RngCore>(
    game: &Game,
    play: &mut Play,
    rules: Rules<'_>,
    rng: &mut R,
) -> Trigger {
    let cfg = &rules.config.field_goals;
    let distance = outcome::field_goal_distance(play.start_field_position);
    let mut detail = FieldGoalDetail {
        kicker: first_at(game, &play.offense_on_field, Position::K),
        distance,
        ..FieldGoalDetail::default()
    };

    let offense = game.resolve(&play.offense_on_field);
    let defense = game.resolve(&play.defense_on_field);
    let block = skills::field_goal_block_chance(
        cfg,
        distance,
        play.good_snap,
        power::pass_rush_power(&defense),
        power::pass_blocking_power(&offense),
    );
    play.elapsed_time += FIELD_GOAL_SECONDS;
    if occurs(block, rng) {
        detail.blocked = true;
        play.narrate(format!("The {distance}-yard try is blocked!"));
        play.detail = PlayDetail::FieldGoal(detail);
        return Trigger::FieldGoalBlocked;
    }

    detail.good = match detail.kicker.and_then(|k| game.player(k)) {
        Some(kicker) => occurs(
            outcome::field_goal_make_chance(cfg, distance, f64::from(kicker.kicking)),
            rng,
        ),
        None => {
            log::warn!("play {}: no kicker on the field", play.number);
            play.narrate("No kicker available");
            false
        }
    };
    if detail.good {
        play.narrate(format!("The {distance}-yard field goal is good"));
    } else {
        let spot = (GOAL_LINE - i32::from(play.start_field_position))
            .max(i32::from(TOUCHBACK_SPOT));
        play.set_ball(play.defense(), spot);
        play.narrate(format!("The {distance}-yard field goal is no good"));
    }
    play.detail = PlayDetail::FieldGoal(detail);
    Trigger::Fumble
}

/// Muffed snap on a scrimmage play: the quarterback falls on it for a loss.
fn muffed_snap<R: RngCore>(game: &Game, play: &mut Play, rng: &mut R) -> (Option<PlayerRef>, i32) {
    let quarterback = first_at(game, &play.offense_on_field, Position::QB);
    let loss = outcome::muffed_snap_loss(rng);
    play.set_ball(play.possession, i32::from(play.start_field_position) - loss);
    play.yards_gained = play.net_gain();
    play.elapsed_time += outcome::run_play_seconds(rng);
    let who = quarterback.map_or_else(|| String::from("The offense"), |qb| game.player_tag(qb));
    play.narrate(format!("{who} falls on the loose snap, loss of {loss}"));
    (quarterback, play.yards_gained)
}

fn yards_to_goal(play: &Play) -> i32 {
    GOAL_LINE - i32::from(play.start_field_position)
}

fn run<R: RngCore>(game: &Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) -> Trigger {
    if !play.good_snap {
        let (carrier, yards) = muffed_snap(game, play, rng);
        play.detail = PlayDetail::Run(RunDetail {
            carrier,
            yards,
            ..RunDetail::default()
        });
        return Trigger::Fumble;
    }

    let carrier_ref = skills::ball_carrier(game, &play.offense_on_field);
    let Some((carrier_ref, carrier)) = carrier_ref.and_then(|c| game.player(c).map(|p| (c, p)))
    else {
        log::warn!("play {}: no ball carrier available", play.number);
        play.narrate("No ball carrier available; no gain");
        play.elapsed_time += outcome::run_play_seconds(rng);
        return Trigger::Fumble;
    };

    let cfg = &rules.config.rushing;
    let offense = game.resolve(&play.offense_on_field);
    let defense = game.resolve(&play.defense_on_field);
    let to_goal = yards_to_goal(play);
    let run = outcome::run_yards(
        cfg,
        power::run_offense_power(&offense, carrier),
        power::run_defense_power(&defense),
        carrier,
        to_goal,
        rng,
    );
    let mut detail = RunDetail {
        carrier: Some(carrier_ref),
        yards: run.yards,
        breakaway: run.breakaway,
        ..RunDetail::default()
    };
    let tackling = power::tackling_power(&defense);
    if occurs(skills::tackle_break_chance(cfg, carrier, tackling), rng) {
        detail.broke_tackle = true;
        detail.yards = (detail.yards + outcome::tackle_break_yards(rng)).min(to_goal);
    }

    complete_carry(game, play, carrier_ref, detail.yards, rng);
    play.elapsed_time += outcome::run_play_seconds(rng);
    play.narrate(format!(
        "{} runs for {} yards{}{}",
        carrier.tag(),
        detail.yards,
        if detail.breakaway { ", breaking into the open" } else { "" },
        if detail.broke_tackle { ", shedding a tackler" } else { "" },
    ));
    play.detail = PlayDetail::Run(detail);
    Trigger::Fumble
}

/// Spot a live-ball carry; tacklers are credited unless the carrier scores.
fn complete_carry<R: RngCore>(
    game: &Game,
    play: &mut Play,
    carrier: PlayerRef,
    yards: i32,
    rng: &mut R,
) {
    play.set_ball(play.possession, i32::from(play.start_field_position) + yards);
    play.yards_gained = yards;
    play.ball_carrier = Some(carrier);
    if i32::from(play.end_field_position) < GOAL_LINE {
        play.tacklers = skills::tacklers(game, &play.defense_on_field, rng);
    }
}

fn pass<R: RngCore>(game: &Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) -> Trigger {
    let mut detail = PassDetail::default();
    if !play.good_snap {
        let (passer, yards) = muffed_snap(game, play, rng);
        detail.passer = passer;
        detail.yards = yards;
        play.detail = PlayDetail::Pass(detail);
        return Trigger::Fumble;
    }

    detail.passer = first_at(game, &play.offense_on_field, Position::QB);
    let Some((passer_ref, passer)) = detail
        .passer
        .and_then(|qb| game.player(qb).map(|p| (qb, p)))
    else {
        log::warn!("play {}: no quarterback on the field", play.number);
        play.narrate("No quarterback available; the play goes nowhere");
        play.elapsed_time += PASS_INCOMPLETE_SECONDS;
        play.detail = PlayDetail::Pass(detail);
        return Trigger::Fumble;
    };

    let cfg = &rules.config.passing;
    let offense = game.resolve(&play.offense_on_field);
    let defense = game.resolve(&play.defense_on_field);
    let rush = power::pass_rush_power(&defense);
    let block = power::pass_blocking_power(&offense);
    let factor = pressure_factor(&offense, &defense, true);
    detail.pressured = occurs(skills::qb_pressure_chance(cfg, rush, block, factor), rng);
    let to_goal = yards_to_goal(play);

    if detail.pressured {
        if occurs(rules.config.rushing.qb_scramble_probability, rng) {
            let run = outcome::run_yards(
                &rules.config.rushing,
                power::run_offense_power(&offense, passer),
                power::run_defense_power(&defense),
                passer,
                to_goal,
                rng,
            );
            complete_carry(game, play, passer_ref, run.yards, rng);
            play.elapsed_time += outcome::run_play_seconds(rng);
            play.narrate(format!(
                "{} is flushed out and scrambles for {} yards",
                passer.tag(),
                run.yards
            ));
            play.detail = PlayDetail::Run(RunDetail {
                carrier: Some(passer_ref),
                yards: run.yards,
                breakaway: run.breakaway,
                scramble: true,
                ..RunDetail::default()
            });
            return Trigger::Fumble;
        }
        if !occurs(skills::protection_chance(cfg, block, rush), rng) {
            let loss = outcome::sack_loss(rng);
            play.set_ball(play.possession, i32::from(play.start_field_position) - loss);
            play.yards_gained = play.net_gain();
            play.ball_carrier = Some(passer_ref);
            play.fumble_context = FumbleContext::Sack;
            if play.end_field_position > 0 {
                play.tacklers = skills::tacklers(game, &play.defense_on_field, rng);
            }
            play.elapsed_time += SACK_SECONDS;
            detail.sacked = true;
            detail.yards = play.yards_gained;
            play.narrate(format!("{} is sacked for a loss of {loss}", passer.tag()));
            play.detail = PlayDetail::Pass(detail);
            return Trigger::Fumble;
        }
    }

    detail.receiver = skills::pass_target(game, &play.offense_on_field, rng);
    let Some((receiver_ref, receiver)) = detail
        .receiver
        .and_then(|r| game.player(r).map(|p| (r, p)))
    else {
        log::warn!("play {}: no eligible receiver on the field", play.number);
        play.narrate(format!("{} has nobody to throw to; incomplete", passer.tag()));
        play.elapsed_time += PASS_INCOMPLETE_SECONDS;
        play.detail = PlayDetail::Pass(detail);
        return Trigger::Fumble;
    };

    let coverage = power::coverage_power(&defense);
    let passing = f64::from(passer.passing);
    play.elapsed_time += PASS_INCOMPLETE_SECONDS;
    if occurs(
        skills::interception_chance(cfg, coverage, passing, detail.pressured),
        rng,
    ) {
        if let Some(interceptor) = skills::returner(game, &play.defense_on_field, &INTERCEPTORS) {
            detail.intercepted = true;
            detail.interceptor = Some(interceptor);
            play.narrate(format!(
                "{} throws for {} and it is picked off by {}!",
                passer.tag(),
                receiver.tag(),
                game.player_tag(interceptor)
            ));
            play.detail = PlayDetail::Pass(detail);
            return Trigger::Intercepted;
        }
        play.narrate("The ball is tipped and falls incomplete");
        play.detail = PlayDetail::Pass(detail);
        return Trigger::Fumble;
    }

    let offense_power = power::pass_offense_power(passer, receiver);
    if occurs(
        skills::completion_chance(cfg, offense_power, coverage, detail.pressured),
        rng,
    ) {
        let gain = outcome::pass_yards(cfg, passer, receiver, to_goal, rng);
        detail.complete = true;
        detail.yards = gain.yards;
        detail.deep_ball = gain.deep_ball;
        complete_carry(game, play, receiver_ref, gain.yards, rng);
        play.elapsed_time +=
            PASS_COMPLETE_BASE_SECONDS - PASS_INCOMPLETE_SECONDS + return_seconds(gain.yards);
        play.narrate(format!(
            "{} completes to {} for {} yards{}",
            passer.tag(),
            receiver.tag(),
            gain.yards,
            if gain.deep_ball { " on a deep shot" } else { "" }
        ));
    } else {
        play.narrate(format!(
            "{} throws for {}, incomplete{}",
            passer.tag(),
            receiver.tag(),
            if detail.pressured { " under pressure" } else { "" }
        ));
    }
    play.detail = PlayDetail::Pass(detail);
    Trigger::Fumble
}
