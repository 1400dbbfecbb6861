use serde::{Deserialize, Serialize};

use super::{
    ConfigError, NoiseRange, ProbabilityBounds, YardRange, check_positive, check_probability,
    check_rating,
};

/// Probability added once a kick hangs longer than `over` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HangBonus {
    pub over: f64,
    pub bonus: f64,
}

impl HangBonus {
    #[must_use]
    pub const fn new(over: f64, bonus: f64) -> Self {
        Self { over, bonus }
    }

    /// Largest bonus among the tiers `hang_time` clears; zero when none do.
    #[must_use]
    pub fn pick(tiers: &[Self], hang_time: f64) -> f64 {
        tiers
            .iter()
            .filter(|tier| hang_time > tier.over)
            .map(|tier| tier.bonus)
            .fold(0.0, f64::max)
    }
}

/// Probability added once the ball is inside `inside` yards of the receiving goal line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBonus {
    pub inside: i32,
    pub bonus: f64,
}

impl ZoneBonus {
    #[must_use]
    pub const fn new(inside: i32, bonus: f64) -> Self {
        Self { inside, bonus }
    }

    /// Largest bonus among the tiers the spot falls inside; zero when none apply.
    #[must_use]
    pub fn pick(tiers: &[Self], yards_from_goal: i32) -> f64 {
        tiers
            .iter()
            .filter(|tier| yards_from_goal < tier.inside)
            .map(|tier| tier.bonus)
            .fold(0.0, f64::max)
    }
}

fn check_tiers(
    field: &'static str,
    hang: &[HangBonus],
    zone: &[ZoneBonus],
) -> Result<(), ConfigError> {
    for tier in hang {
        check_probability(field, tier.bonus)?;
    }
    for tier in zone {
        check_probability(field, tier.bonus)?;
    }
    Ok(())
}

/// Fair-catch odds for a fielded kick: a base rate raised by hang time and
/// by how deep in their own end the returner stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairCatchConfig {
    pub base: f64,
    #[serde(default)]
    pub hang: Vec<HangBonus>,
    #[serde(default)]
    pub zone: Vec<ZoneBonus>,
    #[serde(default = "FairCatchConfig::default_bounds")]
    pub bounds: ProbabilityBounds,
}

impl FairCatchConfig {
    const fn default_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.0, 0.95)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check_probability(field, self.base)?;
        check_tiers(field, &self.hang, &self.zone)?;
        self.bounds.validate(field)
    }
}

/// Field-goal make and block tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGoalsConfig {
    #[serde(default = "FieldGoalsConfig::default_make_base")]
    pub make_base: f64,
    #[serde(default = "FieldGoalsConfig::default_make_reference_distance")]
    pub make_reference_distance: f64,
    #[serde(default = "FieldGoalsConfig::default_make_decay_per_yard")]
    pub make_decay_per_yard: f64,
    #[serde(default = "FieldGoalsConfig::default_kicker_reference")]
    pub kicker_reference: f64,
    #[serde(default = "FieldGoalsConfig::default_kicker_divisor")]
    pub kicker_divisor: f64,
    #[serde(default = "FieldGoalsConfig::default_make_bounds")]
    pub make_bounds: ProbabilityBounds,
    #[serde(default = "FieldGoalsConfig::default_block_short_distance")]
    pub block_short_distance: u32,
    #[serde(default = "FieldGoalsConfig::default_block_medium_distance")]
    pub block_medium_distance: u32,
    #[serde(default = "FieldGoalsConfig::default_block_long_distance")]
    pub block_long_distance: u32,
    #[serde(default = "FieldGoalsConfig::default_block_very_short")]
    pub block_very_short: f64,
    #[serde(default = "FieldGoalsConfig::default_block_short")]
    pub block_short: f64,
    #[serde(default = "FieldGoalsConfig::default_block_medium")]
    pub block_medium: f64,
    #[serde(default = "FieldGoalsConfig::default_block_long")]
    pub block_long: f64,
    #[serde(default = "FieldGoalsConfig::default_bad_snap_multiplier")]
    pub bad_snap_multiplier: f64,
    /// Block adjustment per ten points of rush-minus-protection power.
    #[serde(default = "FieldGoalsConfig::default_block_defender_factor")]
    pub block_defender_factor: f64,
    #[serde(default = "FieldGoalsConfig::default_block_bounds")]
    pub block_bounds: ProbabilityBounds,
    /// Return yards for a recovered block: base plus the recoverer's
    /// quickness scaled over this span.
    #[serde(default = "FieldGoalsConfig::default_block_return_base")]
    pub block_return_base: f64,
    #[serde(default = "FieldGoalsConfig::default_block_return_skill_span")]
    pub block_return_skill_span: f64,
    #[serde(default = "FieldGoalsConfig::default_block_return_noise")]
    pub block_return_noise: NoiseRange,
    #[serde(default = "FieldGoalsConfig::default_block_return_bounds")]
    pub block_return_bounds: YardRange,
}

impl FieldGoalsConfig {
    const fn default_make_base() -> f64 {
        0.95
    }

    const fn default_make_reference_distance() -> f64 {
        20.0
    }

    const fn default_make_decay_per_yard() -> f64 {
        0.015
    }

    const fn default_kicker_reference() -> f64 {
        70.0
    }

    const fn default_kicker_divisor() -> f64 {
        100.0
    }

    const fn default_make_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.10, 0.99)
    }

    const fn default_block_short_distance() -> u32 {
        30
    }

    const fn default_block_medium_distance() -> u32 {
        45
    }

    const fn default_block_long_distance() -> u32 {
        55
    }

    const fn default_block_very_short() -> f64 {
        0.015
    }

    const fn default_block_short() -> f64 {
        0.025
    }

    const fn default_block_medium() -> f64 {
        0.04
    }

    const fn default_block_long() -> f64 {
        0.065
    }

    const fn default_bad_snap_multiplier() -> f64 {
        10.0
    }

    const fn default_block_defender_factor() -> f64 {
        0.003
    }

    const fn default_block_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.005, 0.25)
    }

    const fn default_block_return_base() -> f64 {
        5.0
    }

    const fn default_block_return_skill_span() -> f64 {
        20.0
    }

    const fn default_block_return_noise() -> NoiseRange {
        NoiseRange::new(-50.0, 50.0)
    }

    const fn default_block_return_bounds() -> YardRange {
        YardRange::new(-5, 100)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_probability("field_goals.make_base", self.make_base)?;
        check_probability("field_goals.make_decay_per_yard", self.make_decay_per_yard)?;
        check_rating("field_goals.kicker_reference", self.kicker_reference)?;
        check_positive("field_goals.kicker_divisor", self.kicker_divisor)?;
        self.make_bounds.validate("field_goals.make_bounds")?;
        if self.block_short_distance > self.block_medium_distance
            || self.block_medium_distance > self.block_long_distance
        {
            return Err(ConfigError::ClampBoundsInverted {
                field: "field_goals.block_distances",
                min: f64::from(self.block_short_distance),
                max: f64::from(self.block_long_distance),
            });
        }
        check_probability("field_goals.block_very_short", self.block_very_short)?;
        check_probability("field_goals.block_short", self.block_short)?;
        check_probability("field_goals.block_medium", self.block_medium)?;
        check_probability("field_goals.block_long", self.block_long)?;
        check_positive("field_goals.bad_snap_multiplier", self.bad_snap_multiplier)?;
        check_probability("field_goals.block_defender_factor", self.block_defender_factor)?;
        self.block_bounds.validate("field_goals.block_bounds")?;
        self.block_return_noise.validate("field_goals.block_return_noise")?;
        self.block_return_bounds.validate("field_goals.block_return_bounds")?;
        Ok(())
    }
}

impl Default for FieldGoalsConfig {
    fn default() -> Self {
        Self {
            make_base: Self::default_make_base(),
            make_reference_distance: Self::default_make_reference_distance(),
            make_decay_per_yard: Self::default_make_decay_per_yard(),
            kicker_reference: Self::default_kicker_reference(),
            kicker_divisor: Self::default_kicker_divisor(),
            make_bounds: Self::default_make_bounds(),
            block_short_distance: Self::default_block_short_distance(),
            block_medium_distance: Self::default_block_medium_distance(),
            block_long_distance: Self::default_block_long_distance(),
            block_very_short: Self::default_block_very_short(),
            block_short: Self::default_block_short(),
            block_medium: Self::default_block_medium(),
            block_long: Self::default_block_long(),
            bad_snap_multiplier: Self::default_bad_snap_multiplier(),
            block_defender_factor: Self::default_block_defender_factor(),
            block_bounds: Self::default_block_bounds(),
            block_return_base: Self::default_block_return_base(),
            block_return_skill_span: Self::default_block_return_skill_span(),
            block_return_noise: Self::default_block_return_noise(),
            block_return_bounds: Self::default_block_return_bounds(),
        }
    }
}

/// Kickoff distance, return, muff, and onside tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KickoffsConfig {
    /// Distance is `distance_base + kicking / 100 * distance_kicking_span` plus noise.
    #[serde(default = "KickoffsConfig::default_distance_base")]
    pub distance_base: f64,
    #[serde(default = "KickoffsConfig::default_distance_kicking_span")]
    pub distance_kicking_span: f64,
    #[serde(default = "KickoffsConfig::default_distance_noise")]
    pub distance_noise: NoiseRange,
    #[serde(default = "KickoffsConfig::default_distance_bounds")]
    pub distance_bounds: YardRange,
    #[serde(default = "KickoffsConfig::default_hang_time_base")]
    pub hang_time_base: f64,
    #[serde(default = "KickoffsConfig::default_hang_time_per_yard")]
    pub hang_time_per_yard: f64,
    #[serde(default = "KickoffsConfig::default_out_of_bounds_probability")]
    pub out_of_bounds_probability: f64,
    /// Out-of-bounds odds for kicks landing inside `out_of_bounds_danger_zone`.
    #[serde(default = "KickoffsConfig::default_out_of_bounds_danger_probability")]
    pub out_of_bounds_danger_probability: f64,
    /// Landing spots, from the kicking team's goal line, near the sideline-prone corners.
    #[serde(default = "KickoffsConfig::default_out_of_bounds_danger_zone")]
    pub out_of_bounds_danger_zone: YardRange,
    /// Receiving team's spot after a kick out of bounds.
    #[serde(default = "KickoffsConfig::default_out_of_bounds_spot")]
    pub out_of_bounds_spot: u8,
    #[serde(default = "KickoffsConfig::default_fair_catch")]
    pub fair_catch: FairCatchConfig,
    #[serde(default = "KickoffsConfig::default_muff_base")]
    pub muff_base: f64,
    /// Muff odds for kicks landing short of `muff_short_landing`.
    #[serde(default = "KickoffsConfig::default_muff_short")]
    pub muff_short: f64,
    #[serde(default = "KickoffsConfig::default_muff_short_landing")]
    pub muff_short_landing: i32,
    /// Returner awareness plus agility, halved, is divided by this to shrink muff odds.
    #[serde(default = "KickoffsConfig::default_muff_skill_divisor")]
    pub muff_skill_divisor: f64,
    #[serde(default = "KickoffsConfig::default_muff_bounds")]
    pub muff_bounds: ProbabilityBounds,
    #[serde(default = "KickoffsConfig::default_muff_receiving_recovery")]
    pub muff_receiving_recovery: f64,
    #[serde(default = "KickoffsConfig::default_muff_recovery_yards")]
    pub muff_recovery_yards: YardRange,
    #[serde(default = "KickoffsConfig::default_return_base")]
    pub return_base: f64,
    #[serde(default = "KickoffsConfig::default_return_speed_divisor")]
    pub return_speed_divisor: f64,
    #[serde(default = "KickoffsConfig::default_return_noise")]
    pub return_noise: NoiseRange,
    #[serde(default = "KickoffsConfig::default_return_bounds")]
    pub return_bounds: YardRange,
    #[serde(default = "KickoffsConfig::default_big_return_probability")]
    pub big_return_probability: f64,
    #[serde(default = "KickoffsConfig::default_big_return_speed_threshold")]
    pub big_return_speed_threshold: f64,
    #[serde(default = "KickoffsConfig::default_big_return_bonus")]
    pub big_return_bonus: YardRange,
    #[serde(default = "KickoffsConfig::default_onside_attempt_probability")]
    pub onside_attempt_probability: f64,
    /// Minimum deficit before the kicking team considers an onside kick.
    #[serde(default = "KickoffsConfig::default_onside_deficit")]
    pub onside_deficit: u16,
    #[serde(default = "KickoffsConfig::default_onside_recovery_base")]
    pub onside_recovery_base: f64,
    #[serde(default = "KickoffsConfig::default_onside_skill_bonus")]
    pub onside_skill_bonus: f64,
    #[serde(default = "KickoffsConfig::default_onside_skill_divisor")]
    pub onside_skill_divisor: f64,
}

impl KickoffsConfig {
    const fn default_distance_base() -> f64 {
        40.0
    }

    const fn default_distance_kicking_span() -> f64 {
        30.0
    }

    const fn default_distance_noise() -> NoiseRange {
        NoiseRange::new(-10.0, 10.0)
    }

    const fn default_distance_bounds() -> YardRange {
        YardRange::new(30, 80)
    }

    const fn default_hang_time_base() -> f64 {
        3.5
    }

    const fn default_hang_time_per_yard() -> f64 {
        0.05
    }

    const fn default_out_of_bounds_probability() -> f64 {
        0.03
    }

    const fn default_out_of_bounds_danger_probability() -> f64 {
        0.10
    }

    const fn default_out_of_bounds_danger_zone() -> YardRange {
        YardRange::new(65, 95)
    }

    const fn default_out_of_bounds_spot() -> u8 {
        40
    }

    fn default_fair_catch() -> FairCatchConfig {
        FairCatchConfig {
            base: 0.10,
            hang: Vec::new(),
            zone: vec![ZoneBonus::new(10, 0.10)],
            bounds: ProbabilityBounds::new(0.0, 0.50),
        }
    }

    const fn default_muff_base() -> f64 {
        0.015
    }

    const fn default_muff_short() -> f64 {
        0.04
    }

    const fn default_muff_short_landing() -> i32 {
        50
    }

    const fn default_muff_skill_divisor() -> f64 {
        150.0
    }

    const fn default_muff_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.0, 0.10)
    }

    const fn default_muff_receiving_recovery() -> f64 {
        0.6
    }

    const fn default_muff_recovery_yards() -> YardRange {
        YardRange::new(-5, 5)
    }

    const fn default_return_base() -> f64 {
        20.0
    }

    const fn default_return_speed_divisor() -> f64 {
        10.0
    }

    const fn default_return_noise() -> NoiseRange {
        NoiseRange::new(-6.0, 6.0)
    }

    const fn default_return_bounds() -> YardRange {
        YardRange::new(0, 100)
    }

    const fn default_big_return_probability() -> f64 {
        0.03
    }

    const fn default_big_return_speed_threshold() -> f64 {
        85.0
    }

    const fn default_big_return_bonus() -> YardRange {
        YardRange::new(30, 80)
    }

    const fn default_onside_attempt_probability() -> f64 {
        0.05
    }

    const fn default_onside_deficit() -> u16 {
        7
    }

    const fn default_onside_recovery_base() -> f64 {
        0.20
    }

    const fn default_onside_skill_bonus() -> f64 {
        0.10
    }

    const fn default_onside_skill_divisor() -> f64 {
        100.0
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        self.distance_noise.validate("kickoffs.distance_noise")?;
        self.distance_bounds.validate("kickoffs.distance_bounds")?;
        if self.distance_bounds.min < 0 {
            return Err(ConfigError::RangeViolation {
                field: "kickoffs.distance_bounds",
                min: 0.0,
                max: 100.0,
                value: f64::from(self.distance_bounds.min),
            });
        }
        check_positive("kickoffs.hang_time_base", self.hang_time_base)?;
        check_probability(
            "kickoffs.out_of_bounds_probability",
            self.out_of_bounds_probability,
        )?;
        check_probability(
            "kickoffs.out_of_bounds_danger_probability",
            self.out_of_bounds_danger_probability,
        )?;
        self.out_of_bounds_danger_zone
            .validate("kickoffs.out_of_bounds_danger_zone")?;
        if !(1..=99).contains(&self.out_of_bounds_spot) {
            return Err(ConfigError::RangeViolation {
                field: "kickoffs.out_of_bounds_spot",
                min: 1.0,
                max: 99.0,
                value: f64::from(self.out_of_bounds_spot),
            });
        }
        self.fair_catch.validate("kickoffs.fair_catch")?;
        check_probability("kickoffs.muff_base", self.muff_base)?;
        check_probability("kickoffs.muff_short", self.muff_short)?;
        check_positive("kickoffs.muff_skill_divisor", self.muff_skill_divisor)?;
        self.muff_bounds.validate("kickoffs.muff_bounds")?;
        check_probability(
            "kickoffs.muff_receiving_recovery",
            self.muff_receiving_recovery,
        )?;
        self.muff_recovery_yards.validate("kickoffs.muff_recovery_yards")?;
        check_positive("kickoffs.return_speed_divisor", self.return_speed_divisor)?;
        self.return_noise.validate("kickoffs.return_noise")?;
        self.return_bounds.validate("kickoffs.return_bounds")?;
        check_probability("kickoffs.big_return_probability", self.big_return_probability)?;
        check_rating(
            "kickoffs.big_return_speed_threshold",
            self.big_return_speed_threshold,
        )?;
        self.big_return_bonus.validate("kickoffs.big_return_bonus")?;
        check_probability(
            "kickoffs.onside_attempt_probability",
            self.onside_attempt_probability,
        )?;
        check_probability("kickoffs.onside_recovery_base", self.onside_recovery_base)?;
        check_probability("kickoffs.onside_skill_bonus", self.onside_skill_bonus)?;
        check_positive("kickoffs.onside_skill_divisor", self.onside_skill_divisor)?;
        Ok(())
    }
}

impl Default for KickoffsConfig {
    fn default() -> Self {
        Self {
            distance_base: Self::default_distance_base(),
            distance_kicking_span: Self::default_distance_kicking_span(),
            distance_noise: Self::default_distance_noise(),
            distance_bounds: Self::default_distance_bounds(),
            hang_time_base: Self::default_hang_time_base(),
            hang_time_per_yard: Self::default_hang_time_per_yard(),
            out_of_bounds_probability: Self::default_out_of_bounds_probability(),
            out_of_bounds_danger_probability: Self::default_out_of_bounds_danger_probability(),
            out_of_bounds_danger_zone: Self::default_out_of_bounds_danger_zone(),
            out_of_bounds_spot: Self::default_out_of_bounds_spot(),
            fair_catch: Self::default_fair_catch(),
            muff_base: Self::default_muff_base(),
            muff_short: Self::default_muff_short(),
            muff_short_landing: Self::default_muff_short_landing(),
            muff_skill_divisor: Self::default_muff_skill_divisor(),
            muff_bounds: Self::default_muff_bounds(),
            muff_receiving_recovery: Self::default_muff_receiving_recovery(),
            muff_recovery_yards: Self::default_muff_recovery_yards(),
            return_base: Self::default_return_base(),
            return_speed_divisor: Self::default_return_speed_divisor(),
            return_noise: Self::default_return_noise(),
            return_bounds: Self::default_return_bounds(),
            big_return_probability: Self::default_big_return_probability(),
            big_return_speed_threshold: Self::default_big_return_speed_threshold(),
            big_return_bonus: Self::default_big_return_bonus(),
            onside_attempt_probability: Self::default_onside_attempt_probability(),
            onside_deficit: Self::default_onside_deficit(),
            onside_recovery_base: Self::default_onside_recovery_base(),
            onside_skill_bonus: Self::default_onside_skill_bonus(),
            onside_skill_divisor: Self::default_onside_skill_divisor(),
        }
    }
}

/// Punt flight, coverage, return, and block tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuntsConfig {
    #[serde(default = "PuntsConfig::default_distance_base")]
    pub distance_base: f64,
    #[serde(default = "PuntsConfig::default_kicking_divisor")]
    pub kicking_divisor: f64,
    #[serde(default = "PuntsConfig::default_distance_noise")]
    pub distance_noise: NoiseRange,
    #[serde(default = "PuntsConfig::default_distance_bounds")]
    pub distance_bounds: YardRange,
    /// Distance used when no punter is on the field.
    #[serde(default = "PuntsConfig::default_fallback_distance")]
    pub fallback_distance: i32,
    /// Hang time is `distance * hang_time_per_yard` plus noise, floored at `hang_time_min`.
    #[serde(default = "PuntsConfig::default_hang_time_per_yard")]
    pub hang_time_per_yard: f64,
    #[serde(default = "PuntsConfig::default_hang_time_noise")]
    pub hang_time_noise: NoiseRange,
    #[serde(default = "PuntsConfig::default_hang_time_min")]
    pub hang_time_min: f64,
    #[serde(default = "PuntsConfig::default_out_of_bounds_base")]
    pub out_of_bounds_base: f64,
    #[serde(default = "PuntsConfig::default_out_of_bounds_zone")]
    pub out_of_bounds_zone: Vec<ZoneBonus>,
    #[serde(default = "PuntsConfig::default_out_of_bounds_bounds")]
    pub out_of_bounds_bounds: ProbabilityBounds,
    #[serde(default = "PuntsConfig::default_downed_base")]
    pub downed_base: f64,
    #[serde(default = "PuntsConfig::default_downed_zone")]
    pub downed_zone: Vec<ZoneBonus>,
    #[serde(default = "PuntsConfig::default_downed_hang")]
    pub downed_hang: Vec<HangBonus>,
    #[serde(default = "PuntsConfig::default_downed_bounds")]
    pub downed_bounds: ProbabilityBounds,
    #[serde(default = "PuntsConfig::default_fair_catch")]
    pub fair_catch: FairCatchConfig,
    #[serde(default = "PuntsConfig::default_muff_base")]
    pub muff_base: f64,
    /// Muff odds shed per point of the returner's catching, over 100.
    #[serde(default = "PuntsConfig::default_muff_catching_factor")]
    pub muff_catching_factor: f64,
    #[serde(default = "PuntsConfig::default_muff_hang")]
    pub muff_hang: Vec<HangBonus>,
    #[serde(default = "PuntsConfig::default_muff_bounds")]
    pub muff_bounds: ProbabilityBounds,
    #[serde(default = "PuntsConfig::default_muff_receiving_recovery")]
    pub muff_receiving_recovery: f64,
    #[serde(default = "PuntsConfig::default_muff_recovery_yards")]
    pub muff_recovery_yards: YardRange,
    #[serde(default = "PuntsConfig::default_return_base")]
    pub return_base: f64,
    #[serde(default = "PuntsConfig::default_return_speed_divisor")]
    pub return_speed_divisor: f64,
    #[serde(default = "PuntsConfig::default_return_noise")]
    pub return_noise: NoiseRange,
    /// Yards the coverage takes off a return at `return_hang_reference` seconds of hang.
    #[serde(default = "PuntsConfig::default_return_hang_penalty")]
    pub return_hang_penalty: f64,
    #[serde(default = "PuntsConfig::default_return_hang_reference")]
    pub return_hang_reference: f64,
    #[serde(default = "PuntsConfig::default_return_bounds")]
    pub return_bounds: YardRange,
    #[serde(default = "PuntsConfig::default_big_return_probability")]
    pub big_return_probability: f64,
    #[serde(default = "PuntsConfig::default_big_return_speed_threshold")]
    pub big_return_speed_threshold: f64,
    #[serde(default = "PuntsConfig::default_big_return_bonus")]
    pub big_return_bonus: YardRange,
    #[serde(default = "PuntsConfig::default_block_good_snap")]
    pub block_good_snap: f64,
    #[serde(default = "PuntsConfig::default_block_bad_snap")]
    pub block_bad_snap: f64,
    /// Block adjustment per ten points of rush-minus-protection power.
    #[serde(default = "PuntsConfig::default_block_defender_factor")]
    pub block_defender_factor: f64,
    #[serde(default = "PuntsConfig::default_block_bounds")]
    pub block_bounds: ProbabilityBounds,
}

impl PuntsConfig {
    const fn default_distance_base() -> f64 {
        35.0
    }

    const fn default_kicking_divisor() -> f64 {
        5.0
    }

    const fn default_distance_noise() -> NoiseRange {
        NoiseRange::new(-5.0, 5.0)
    }

    const fn default_distance_bounds() -> YardRange {
        YardRange::new(20, 65)
    }

    const fn default_fallback_distance() -> i32 {
        35
    }

    const fn default_hang_time_per_yard() -> f64 {
        0.08
    }

    const fn default_hang_time_noise() -> NoiseRange {
        NoiseRange::new(-0.5, 0.5)
    }

    const fn default_hang_time_min() -> f64 {
        2.0
    }

    const fn default_out_of_bounds_base() -> f64 {
        0.12
    }

    fn default_out_of_bounds_zone() -> Vec<ZoneBonus> {
        vec![ZoneBonus::new(10, 0.08), ZoneBonus::new(15, 0.05)]
    }

    const fn default_out_of_bounds_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.0, 0.50)
    }

    const fn default_downed_base() -> f64 {
        0.15
    }

    fn default_downed_zone() -> Vec<ZoneBonus> {
        vec![
            ZoneBonus::new(5, 0.40),
            ZoneBonus::new(10, 0.25),
            ZoneBonus::new(15, 0.15),
        ]
    }

    fn default_downed_hang() -> Vec<HangBonus> {
        vec![HangBonus::new(4.5, 0.10), HangBonus::new(4.0, 0.05)]
    }

    const fn default_downed_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.0, 0.90)
    }

    fn default_fair_catch() -> FairCatchConfig {
        FairCatchConfig {
            base: 0.25,
            hang: vec![HangBonus::new(4.5, 0.15), HangBonus::new(4.0, 0.10)],
            zone: vec![ZoneBonus::new(10, 0.20), ZoneBonus::new(20, 0.10)],
            bounds: FairCatchConfig::default_bounds(),
        }
    }

    const fn default_muff_base() -> f64 {
        0.05
    }

    const fn default_muff_catching_factor() -> f64 {
        0.04
    }

    fn default_muff_hang() -> Vec<HangBonus> {
        vec![HangBonus::new(4.5, 0.02), HangBonus::new(4.0, 0.01)]
    }

    const fn default_muff_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.0, 0.15)
    }

    const fn default_muff_receiving_recovery() -> f64 {
        0.6
    }

    const fn default_muff_recovery_yards() -> YardRange {
        YardRange::new(-5, 5)
    }

    const fn default_return_hang_penalty() -> f64 {
        2.0
    }

    const fn default_return_hang_reference() -> f64 {
        5.0
    }

    const fn default_return_base() -> f64 {
        5.0
    }

    const fn default_return_speed_divisor() -> f64 {
        15.0
    }

    const fn default_return_noise() -> NoiseRange {
        NoiseRange::new(-5.0, 5.0)
    }

    const fn default_return_bounds() -> YardRange {
        YardRange::new(-5, 50)
    }

    const fn default_big_return_probability() -> f64 {
        0.02
    }

    const fn default_big_return_speed_threshold() -> f64 {
        85.0
    }

    const fn default_big_return_bonus() -> YardRange {
        YardRange::new(30, 70)
    }

    const fn default_block_good_snap() -> f64 {
        0.01
    }

    const fn default_block_bad_snap() -> f64 {
        0.20
    }

    const fn default_block_defender_factor() -> f64 {
        0.005
    }

    const fn default_block_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.002, 0.30)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_positive("punts.kicking_divisor", self.kicking_divisor)?;
        self.distance_noise.validate("punts.distance_noise")?;
        self.distance_bounds.validate("punts.distance_bounds")?;
        if self.distance_bounds.min < 0 {
            return Err(ConfigError::RangeViolation {
                field: "punts.distance_bounds",
                min: 0.0,
                max: 100.0,
                value: f64::from(self.distance_bounds.min),
            });
        }
        check_positive("punts.hang_time_per_yard", self.hang_time_per_yard)?;
        self.hang_time_noise.validate("punts.hang_time_noise")?;
        check_positive("punts.hang_time_min", self.hang_time_min)?;
        check_probability("punts.out_of_bounds_base", self.out_of_bounds_base)?;
        check_tiers("punts.out_of_bounds_zone", &[], &self.out_of_bounds_zone)?;
        self.out_of_bounds_bounds.validate("punts.out_of_bounds_bounds")?;
        check_probability("punts.downed_base", self.downed_base)?;
        check_tiers("punts.downed", &self.downed_hang, &self.downed_zone)?;
        self.downed_bounds.validate("punts.downed_bounds")?;
        self.fair_catch.validate("punts.fair_catch")?;
        check_probability("punts.muff_base", self.muff_base)?;
        check_probability("punts.muff_catching_factor", self.muff_catching_factor)?;
        check_tiers("punts.muff_hang", &self.muff_hang, &[])?;
        self.muff_bounds.validate("punts.muff_bounds")?;
        check_probability("punts.muff_receiving_recovery", self.muff_receiving_recovery)?;
        self.muff_recovery_yards.validate("punts.muff_recovery_yards")?;
        check_positive("punts.return_hang_reference", self.return_hang_reference)?;
        check_positive("punts.return_speed_divisor", self.return_speed_divisor)?;
        self.return_noise.validate("punts.return_noise")?;
        self.return_bounds.validate("punts.return_bounds")?;
        check_probability("punts.big_return_probability", self.big_return_probability)?;
        check_rating(
            "punts.big_return_speed_threshold",
            self.big_return_speed_threshold,
        )?;
        self.big_return_bonus.validate("punts.big_return_bonus")?;
        check_probability("punts.block_good_snap", self.block_good_snap)?;
        check_probability("punts.block_bad_snap", self.block_bad_snap)?;
        check_probability("punts.block_defender_factor", self.block_defender_factor)?;
        self.block_bounds.validate("punts.block_bounds")?;
        Ok(())
    }
}

impl Default for PuntsConfig {
    fn default() -> Self {
        Self {
            distance_base: Self::default_distance_base(),
            kicking_divisor: Self::default_kicking_divisor(),
            distance_noise: Self::default_distance_noise(),
            distance_bounds: Self::default_distance_bounds(),
            fallback_distance: Self::default_fallback_distance(),
            hang_time_per_yard: Self::default_hang_time_per_yard(),
            hang_time_noise: Self::default_hang_time_noise(),
            hang_time_min: Self::default_hang_time_min(),
            out_of_bounds_base: Self::default_out_of_bounds_base(),
            out_of_bounds_zone: Self::default_out_of_bounds_zone(),
            out_of_bounds_bounds: Self::default_out_of_bounds_bounds(),
            downed_base: Self::default_downed_base(),
            downed_zone: Self::default_downed_zone(),
            downed_hang: Self::default_downed_hang(),
            downed_bounds: Self::default_downed_bounds(),
            fair_catch: Self::default_fair_catch(),
            muff_base: Self::default_muff_base(),
            muff_catching_factor: Self::default_muff_catching_factor(),
            muff_hang: Self::default_muff_hang(),
            muff_bounds: Self::default_muff_bounds(),
            muff_receiving_recovery: Self::default_muff_receiving_recovery(),
            muff_recovery_yards: Self::default_muff_recovery_yards(),
            return_base: Self::default_return_base(),
            return_speed_divisor: Self::default_return_speed_divisor(),
            return_noise: Self::default_return_noise(),
            return_hang_penalty: Self::default_return_hang_penalty(),
            return_hang_reference: Self::default_return_hang_reference(),
            return_bounds: Self::default_return_bounds(),
            big_return_probability: Self::default_big_return_probability(),
            big_return_speed_threshold: Self::default_big_return_speed_threshold(),
            big_return_bonus: Self::default_big_return_bonus(),
            block_good_snap: Self::default_block_good_snap(),
            block_bad_snap: Self::default_block_bad_snap(),
            block_defender_factor: Self::default_block_defender_factor(),
            block_bounds: Self::default_block_bounds(),
        }
    }
}
