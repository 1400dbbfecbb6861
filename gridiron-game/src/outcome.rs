//! Outcome calculators: turn skills-check results into yards, distances and seconds.
//!
//! Each calculator draws from the game stream in a fixed order, documented
//! per function, so seeded replays stay bit-identical.
use rand::RngCore;

use crate::config::{
    FieldGoalsConfig, KickoffsConfig, NoiseRange, PassingConfig, PuntsConfig, RushingConfig,
    YardRange,
};
use crate::constants::{
    BLOCKED_KICK_LOSS_MAX, BLOCKED_KICK_LOSS_MIN, DEFAULT_RATING, FIELD_GOAL_SNAP_OFFSET,
    FUMBLE_RETURN_MAX, INTERCEPTION_DEPTH_MAX, INTERCEPTION_DEPTH_MIN, MUFFED_SNAP_LOSS_MAX,
    MUFFED_SNAP_LOSS_MIN, RUN_PLAY_BASE_SECONDS, RUN_PLAY_SPREAD_SECONDS, SACK_LOSS_MAX,
    SACK_LOSS_MIN, TACKLE_BREAK_MAX_YARDS, TACKLE_BREAK_MIN_YARDS,
};
use crate::model::Player;
use crate::numbers::round_f64_to_i32;
use crate::rng::Roll;

/// Yards from a base figure plus one uniform noise draw.
fn noisy_yards<R: RngCore>(base: f64, noise: NoiseRange, rng: &mut R) -> i32 {
    round_f64_to_i32(base + noise.sample(rng.roll()))
}

/// One draw against `probability`, then one bonus draw on a hit.
fn bonus_yards<R: RngCore>(probability: f64, bonus: YardRange, rng: &mut R) -> Option<i32> {
    (rng.roll() < probability).then(|| rng.between(bonus.min, bonus.max))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunYards {
    pub yards: i32,
    pub breakaway: bool,
}

/// Run yardage for a carrier behind the offensive line.
///
/// Draws: noise, then (fast carriers only) the breakaway roll and bonus.
/// The result is clamped to `[-max_loss, yards_to_goal]`.
pub fn run_yards<R: RngCore>(
    cfg: &RushingConfig,
    offense_power: f64,
    defense_power: f64,
    carrier: &Player,
    yards_to_goal: i32,
    rng: &mut R,
) -> RunYards {
    let base = cfg.base_yards + (offense_power - defense_power) / cfg.skill_divisor;
    let mut yards = noisy_yards(base, cfg.yards_noise, rng);
    let mut breakaway = false;
    if crate::skills::breakaway_eligible(cfg, carrier)
        && let Some(bonus) = bonus_yards(cfg.breakaway_probability, cfg.breakaway_bonus, rng)
    {
        yards += bonus;
        breakaway = true;
    }
    RunYards {
        yards: yards.clamp(-cfg.max_loss, yards_to_goal.max(-cfg.max_loss)),
        breakaway,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassYards {
    pub yards: i32,
    pub deep_ball: bool,
}

/// Yards on a completed pass, clamped to `[0, yards_to_goal]`.
///
/// Draws: noise, then (eligible receivers only) the deep-ball roll and bonus.
pub fn pass_yards<R: RngCore>(
    cfg: &PassingConfig,
    passer: &Player,
    receiver: &Player,
    yards_to_goal: i32,
    rng: &mut R,
) -> PassYards {
    let skill =
        f64::from(passer.passing) + f64::from(receiver.catching) + f64::from(receiver.speed);
    let mut yards = noisy_yards(cfg.base_yards + skill / cfg.skill_divisor, cfg.yards_noise, rng);
    let mut deep_ball = false;
    if crate::skills::deep_ball_eligible(cfg, receiver)
        && let Some(bonus) = bonus_yards(cfg.deep_ball_probability, cfg.deep_ball_bonus, rng)
    {
        yards += bonus;
        deep_ball = true;
    }
    PassYards {
        yards: yards.clamp(0, yards_to_goal.max(0)),
        deep_ball,
    }
}

/// Kickoff distance in the air. A missing kicker kicks like an average one.
///
/// One draw: the distance noise.
pub fn kickoff_distance<R: RngCore>(
    cfg: &KickoffsConfig,
    kicker: Option<&Player>,
    rng: &mut R,
) -> i32 {
    let kicking = kicker.map_or(DEFAULT_RATING, |kicker| f64::from(kicker.kicking));
    let base = cfg.distance_base + kicking / 100.0 * cfg.distance_kicking_span;
    cfg.distance_bounds
        .clamp(noisy_yards(base, cfg.distance_noise, rng))
}

/// Kickoff hang time in seconds; no draw.
#[must_use]
pub fn kickoff_hang_time(cfg: &KickoffsConfig, distance: i32) -> f64 {
    cfg.hang_time_base + f64::from(distance) * cfg.hang_time_per_yard
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickReturn {
    /// Yards gained from the catch spot.
    pub yards: i32,
    pub big_return: bool,
}

/// Kickoff return yardage from the catch spot.
///
/// Draws: noise, then (fast returners only) the big-return roll and bonus.
pub fn kickoff_return<R: RngCore>(
    cfg: &KickoffsConfig,
    returner: &Player,
    rng: &mut R,
) -> KickReturn {
    let speed = f64::from(returner.speed);
    let mut yards = noisy_yards(
        cfg.return_base + speed / cfg.return_speed_divisor,
        cfg.return_noise,
        rng,
    );
    let mut big_return = false;
    if speed > cfg.big_return_speed_threshold
        && let Some(bonus) = bonus_yards(cfg.big_return_probability, cfg.big_return_bonus, rng)
    {
        yards += bonus;
        big_return = true;
    }
    KickReturn {
        yards: cfg.return_bounds.clamp(yards),
        big_return,
    }
}

/// Gross punt distance. No punter falls back to the configured default.
pub fn punt_distance<R: RngCore>(cfg: &PuntsConfig, punter: Option<&Player>, rng: &mut R) -> i32 {
    let Some(punter) = punter else {
        return cfg.fallback_distance;
    };
    let base = cfg.distance_base + f64::from(punter.kicking) / cfg.kicking_divisor;
    cfg.distance_bounds
        .clamp(noisy_yards(base, cfg.distance_noise, rng))
}

/// Punt hang time in seconds, rounded to tenths.
///
/// One draw: the hang-time noise.
pub fn punt_hang_time<R: RngCore>(cfg: &PuntsConfig, distance: i32, rng: &mut R) -> f64 {
    let hang = f64::from(distance) * cfg.hang_time_per_yard + cfg.hang_time_noise.sample(rng.roll());
    (hang.max(cfg.hang_time_min) * 10.0).round() / 10.0
}

/// Punt return yardage from the catch spot.
///
/// Hang time lets the coverage close, taking up to `return_hang_penalty`
/// yards off the base. Draws: noise, then the big-return roll for fast
/// returners.
pub fn punt_return<R: RngCore>(
    cfg: &PuntsConfig,
    returner: &Player,
    hang_time: f64,
    rng: &mut R,
) -> KickReturn {
    let speed = f64::from(returner.speed);
    let coverage = (hang_time / cfg.return_hang_reference).clamp(0.0, 1.0) * cfg.return_hang_penalty;
    let mut yards = noisy_yards(
        cfg.return_base + speed / cfg.return_speed_divisor - coverage,
        cfg.return_noise,
        rng,
    );
    let mut big_return = false;
    if speed > cfg.big_return_speed_threshold
        && let Some(bonus) = bonus_yards(cfg.big_return_probability, cfg.big_return_bonus, rng)
    {
        yards += bonus;
        big_return = true;
    }
    KickReturn {
        yards: cfg.return_bounds.clamp(yards),
        big_return,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuffRecovery {
    pub receiving_team: bool,
    /// Yards from the catch spot where the receiving team fell on it.
    pub yards: i32,
}

/// Scramble after a muffed kick.
///
/// Draws: the recovering side, then the spot only when the receiving team
/// keeps it. A kicking-team recovery stays where the ball was muffed.
pub fn muff_recovery<R: RngCore>(
    receiving_recovery: f64,
    spread: YardRange,
    rng: &mut R,
) -> MuffRecovery {
    if rng.roll() < receiving_recovery {
        MuffRecovery {
            receiving_team: true,
            yards: rng.between(spread.min, spread.max),
        }
    } else {
        MuffRecovery {
            receiving_team: false,
            yards: 0,
        }
    }
}

/// Kick distance from the line of scrimmage: snap depth plus the end zone.
#[must_use]
pub fn field_goal_distance(field_position: u8) -> u32 {
    u32::from(100_u8.saturating_sub(field_position)) + FIELD_GOAL_SNAP_OFFSET
}

#[must_use]
pub fn field_goal_make_chance(cfg: &FieldGoalsConfig, distance: u32, kicking: f64) -> f64 {
    let decay = (f64::from(distance) - cfg.make_reference_distance) * cfg.make_decay_per_yard;
    let skill = (kicking - cfg.kicker_reference) / cfg.kicker_divisor;
    cfg.make_bounds.clamp(cfg.make_base - decay + skill)
}

/// Interception return from the catch spot, clamped to `[0, yards_to_goal]`.
pub fn interception_return<R: RngCore>(
    cfg: &PassingConfig,
    interceptor: &Player,
    yards_to_goal: i32,
    rng: &mut R,
) -> i32 {
    let base =
        cfg.interception_return_base + f64::from(interceptor.speed) / cfg.interception_return_speed_divisor;
    noisy_yards(base, cfg.interception_return_noise, rng).clamp(0, yards_to_goal.max(0))
}

/// Depth downfield where the interception is made.
pub fn interception_depth<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(INTERCEPTION_DEPTH_MIN, INTERCEPTION_DEPTH_MAX)
}

pub fn sack_loss<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(SACK_LOSS_MIN, SACK_LOSS_MAX)
}

pub fn muffed_snap_loss<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(MUFFED_SNAP_LOSS_MIN, MUFFED_SNAP_LOSS_MAX)
}

pub fn tackle_break_yards<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(TACKLE_BREAK_MIN_YARDS, TACKLE_BREAK_MAX_YARDS)
}

/// Yards the kicking team loses chasing a blocked kick.
pub fn blocked_kick_loss<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(BLOCKED_KICK_LOSS_MIN, BLOCKED_KICK_LOSS_MAX)
}

/// Return of a blocked field goal by the defender who scooped it up.
///
/// One draw: the return noise.
pub fn blocked_field_goal_return<R: RngCore>(
    cfg: &FieldGoalsConfig,
    recoverer: &Player,
    rng: &mut R,
) -> i32 {
    let quickness = (f64::from(recoverer.speed) + f64::from(recoverer.agility)) / 2.0;
    let base = cfg.block_return_base + quickness / 100.0 * cfg.block_return_skill_span;
    cfg.block_return_bounds
        .clamp(noisy_yards(base, cfg.block_return_noise, rng))
}

/// Advance by the team that scoops up a loose ball.
pub fn fumble_return<R: RngCore>(rng: &mut R) -> i32 {
    rng.between(0, FUMBLE_RETURN_MAX)
}

/// Seconds a run play keeps the clock moving.
pub fn run_play_seconds<R: RngCore>(rng: &mut R) -> f64 {
    RUN_PLAY_BASE_SECONDS + rng.roll() * RUN_PLAY_SPREAD_SECONDS
}
