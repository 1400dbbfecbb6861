use rand::RngCore;

use crate::config::{
    FairCatchConfig, FieldGoalsConfig, HangBonus, KickoffsConfig, PuntsConfig, ZoneBonus,
};
use crate::model::Player;
use crate::rng::Roll;

const BLOCK_POWER_STEP: f64 = 10.0;

/// Chance a field goal try is blocked, tiered by kick distance.
#[must_use]
pub fn field_goal_block_chance(
    cfg: &FieldGoalsConfig,
    distance: u32,
    good_snap: bool,
    rush_power: f64,
    protection_power: f64,
) -> f64 {
    let mut chance = if distance <= cfg.block_short_distance {
        cfg.block_very_short
    } else if distance <= cfg.block_medium_distance {
        cfg.block_short
    } else if distance <= cfg.block_long_distance {
        cfg.block_medium
    } else {
        cfg.block_long
    };
    if !good_snap {
        chance *= cfg.bad_snap_multiplier;
    }
    chance += (rush_power - protection_power) / BLOCK_POWER_STEP * cfg.block_defender_factor;
    cfg.block_bounds.clamp(chance)
}

#[must_use]
pub fn punt_block_chance(
    cfg: &PuntsConfig,
    good_snap: bool,
    rush_power: f64,
    protection_power: f64,
) -> f64 {
    let base = if good_snap {
        cfg.block_good_snap
    } else {
        cfg.block_bad_snap
    };
    cfg.block_bounds
        .clamp(base + (rush_power - protection_power) / BLOCK_POWER_STEP * cfg.block_defender_factor)
}

/// Chance a punt that stays in the field of play rolls out of bounds.
///
/// `yards_from_goal` is where the ball lands, measured from the receiving
/// goal line; coffin-corner kicks go out more often.
#[must_use]
pub fn punt_out_of_bounds_chance(cfg: &PuntsConfig, yards_from_goal: i32) -> f64 {
    cfg.out_of_bounds_bounds
        .clamp(cfg.out_of_bounds_base + ZoneBonus::pick(&cfg.out_of_bounds_zone, yards_from_goal))
}

/// Chance the coverage gets there first and downs the punt.
#[must_use]
pub fn punt_downed_chance(cfg: &PuntsConfig, yards_from_goal: i32, hang_time: f64) -> f64 {
    cfg.downed_bounds.clamp(
        cfg.downed_base
            + ZoneBonus::pick(&cfg.downed_zone, yards_from_goal)
            + HangBonus::pick(&cfg.downed_hang, hang_time),
    )
}

/// Chance the returner waves for a fair catch.
#[must_use]
pub fn fair_catch_chance(cfg: &FairCatchConfig, hang_time: f64, yards_from_goal: i32) -> f64 {
    cfg.bounds.clamp(
        cfg.base
            + HangBonus::pick(&cfg.hang, hang_time)
            + ZoneBonus::pick(&cfg.zone, yards_from_goal),
    )
}

/// Chance a punt returner drops the catch. Sure hands cut it; long hang raises it.
#[must_use]
pub fn punt_muff_chance(cfg: &PuntsConfig, returner: &Player, hang_time: f64) -> f64 {
    let hands = f64::from(returner.catching) / 100.0 * cfg.muff_catching_factor;
    cfg.muff_bounds
        .clamp(cfg.muff_base - hands + HangBonus::pick(&cfg.muff_hang, hang_time))
}

/// Chance a kickoff lands out of bounds, higher in the sideline-prone zone.
#[must_use]
pub fn kickoff_out_of_bounds_chance(cfg: &KickoffsConfig, landing: i32) -> f64 {
    let zone = cfg.out_of_bounds_danger_zone;
    if (zone.min..=zone.max).contains(&landing) {
        cfg.out_of_bounds_danger_probability
    } else {
        cfg.out_of_bounds_probability
    }
}

/// Chance a kick returner muffs the kickoff. Short kicks are harder to
/// field; awareness and agility settle the ball.
#[must_use]
pub fn kickoff_muff_chance(cfg: &KickoffsConfig, returner: &Player, landing: i32) -> f64 {
    let base = if landing < cfg.muff_short_landing {
        cfg.muff_short
    } else {
        cfg.muff_base
    };
    let poise = (f64::from(returner.awareness) + f64::from(returner.agility))
        / 2.0
        / cfg.muff_skill_divisor;
    cfg.muff_bounds.clamp(base * (1.0 - poise))
}

/// A kicking team trailing late enough tries an onside kick.
///
/// Only second-half kicks by a team down at least `onside_deficit` qualify;
/// nothing is drawn otherwise.
pub fn onside_attempt<R: RngCore>(
    cfg: &KickoffsConfig,
    deficit: i32,
    second_half: bool,
    rng: &mut R,
) -> bool {
    if !second_half || deficit < i32::from(cfg.onside_deficit) {
        return false;
    }
    rng.roll() < cfg.onside_attempt_probability
}

#[must_use]
pub fn onside_recovery_chance(cfg: &KickoffsConfig, kicker: Option<&Player>) -> f64 {
    let kicking = kicker.map_or(0.0, |kicker| f64::from(kicker.kicking));
    (cfg.onside_recovery_base + cfg.onside_skill_bonus * kicking / cfg.onside_skill_divisor)
        .clamp(0.0, 1.0)
}
