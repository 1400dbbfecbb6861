use serde::{Deserialize, Serialize};

use super::{
    ConfigError, NoiseRange, ProbabilityBounds, YardRange, check_positive, check_probability,
    check_rating,
};

/// Run yardage, breakaway, scramble, and tackle-break tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushingConfig {
    #[serde(default = "RushingConfig::default_base_yards")]
    pub base_yards: f64,
    #[serde(default = "RushingConfig::default_skill_divisor")]
    pub skill_divisor: f64,
    #[serde(default = "RushingConfig::default_yards_noise")]
    pub yards_noise: NoiseRange,
    /// Largest loss a run can produce, as a positive number of yards.
    #[serde(default = "RushingConfig::default_max_loss")]
    pub max_loss: i32,
    #[serde(default = "RushingConfig::default_breakaway_probability")]
    pub breakaway_probability: f64,
    #[serde(default = "RushingConfig::default_breakaway_speed_threshold")]
    pub breakaway_speed_threshold: f64,
    #[serde(default = "RushingConfig::default_breakaway_bonus")]
    pub breakaway_bonus: YardRange,
    #[serde(default = "RushingConfig::default_tackle_break_base")]
    pub tackle_break_base: f64,
    #[serde(default = "RushingConfig::default_tackle_break_denominator")]
    pub tackle_break_denominator: f64,
    #[serde(default = "RushingConfig::default_tackle_break_bounds")]
    pub tackle_break_bounds: ProbabilityBounds,
    #[serde(default = "RushingConfig::default_qb_scramble_probability")]
    pub qb_scramble_probability: f64,
}

impl RushingConfig {
    const fn default_base_yards() -> f64 {
        3.0
    }

    const fn default_skill_divisor() -> f64 {
        20.0
    }

    const fn default_yards_noise() -> NoiseRange {
        NoiseRange::new(-3.0, 8.0)
    }

    const fn default_max_loss() -> i32 {
        5
    }

    const fn default_breakaway_probability() -> f64 {
        0.10
    }

    const fn default_breakaway_speed_threshold() -> f64 {
        75.0
    }

    const fn default_breakaway_bonus() -> YardRange {
        YardRange::new(10, 40)
    }

    const fn default_tackle_break_base() -> f64 {
        0.25
    }

    const fn default_tackle_break_denominator() -> f64 {
        250.0
    }

    const fn default_tackle_break_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.05, 0.50)
    }

    const fn default_qb_scramble_probability() -> f64 {
        0.10
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_positive("rushing.skill_divisor", self.skill_divisor)?;
        self.yards_noise.validate("rushing.yards_noise")?;
        if self.max_loss < 0 {
            return Err(ConfigError::RangeViolation {
                field: "rushing.max_loss",
                min: 0.0,
                max: 100.0,
                value: f64::from(self.max_loss),
            });
        }
        check_probability("rushing.breakaway_probability", self.breakaway_probability)?;
        check_rating(
            "rushing.breakaway_speed_threshold",
            self.breakaway_speed_threshold,
        )?;
        self.breakaway_bonus.validate("rushing.breakaway_bonus")?;
        check_probability("rushing.tackle_break_base", self.tackle_break_base)?;
        check_positive(
            "rushing.tackle_break_denominator",
            self.tackle_break_denominator,
        )?;
        self.tackle_break_bounds
            .validate("rushing.tackle_break_bounds")?;
        check_probability(
            "rushing.qb_scramble_probability",
            self.qb_scramble_probability,
        )?;
        Ok(())
    }
}

impl Default for RushingConfig {
    fn default() -> Self {
        Self {
            base_yards: Self::default_base_yards(),
            skill_divisor: Self::default_skill_divisor(),
            yards_noise: Self::default_yards_noise(),
            max_loss: Self::default_max_loss(),
            breakaway_probability: Self::default_breakaway_probability(),
            breakaway_speed_threshold: Self::default_breakaway_speed_threshold(),
            breakaway_bonus: Self::default_breakaway_bonus(),
            tackle_break_base: Self::default_tackle_break_base(),
            tackle_break_denominator: Self::default_tackle_break_denominator(),
            tackle_break_bounds: Self::default_tackle_break_bounds(),
            qb_scramble_probability: Self::default_qb_scramble_probability(),
        }
    }
}
