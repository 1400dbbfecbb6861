use serde::{Deserialize, Serialize};

use super::{
    ConfigError, NoiseRange, ProbabilityBounds, YardRange, check_positive, check_probability,
    check_rating,
};

/// Pressure, protection, completion, and interception tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingConfig {
    #[serde(default = "PassingConfig::default_qb_pressure_base")]
    pub qb_pressure_base: f64,
    #[serde(default = "PassingConfig::default_qb_pressure_denominator")]
    pub qb_pressure_denominator: f64,
    #[serde(default = "PassingConfig::default_qb_pressure_bounds")]
    pub qb_pressure_bounds: ProbabilityBounds,
    #[serde(default = "PassingConfig::default_protection_base")]
    pub protection_base: f64,
    #[serde(default = "PassingConfig::default_protection_denominator")]
    pub protection_denominator: f64,
    #[serde(default = "PassingConfig::default_protection_bounds")]
    pub protection_bounds: ProbabilityBounds,
    #[serde(default = "PassingConfig::default_completion_base")]
    pub completion_base: f64,
    #[serde(default = "PassingConfig::default_completion_denominator")]
    pub completion_denominator: f64,
    #[serde(default = "PassingConfig::default_completion_bounds")]
    pub completion_bounds: ProbabilityBounds,
    #[serde(default = "PassingConfig::default_completion_pressure_penalty")]
    pub completion_pressure_penalty: f64,
    #[serde(default = "PassingConfig::default_interception_base")]
    pub interception_base: f64,
    #[serde(default = "PassingConfig::default_interception_pressure_bonus")]
    pub interception_pressure_bonus: f64,
    #[serde(default = "PassingConfig::default_interception_denominator")]
    pub interception_denominator: f64,
    #[serde(default = "PassingConfig::default_interception_bounds")]
    pub interception_bounds: ProbabilityBounds,
    #[serde(default = "PassingConfig::default_base_yards")]
    pub base_yards: f64,
    #[serde(default = "PassingConfig::default_skill_divisor")]
    pub skill_divisor: f64,
    #[serde(default = "PassingConfig::default_yards_noise")]
    pub yards_noise: NoiseRange,
    #[serde(default = "PassingConfig::default_deep_ball_probability")]
    pub deep_ball_probability: f64,
    #[serde(default = "PassingConfig::default_deep_ball_speed_threshold")]
    pub deep_ball_speed_threshold: f64,
    #[serde(default = "PassingConfig::default_deep_ball_catching_threshold")]
    pub deep_ball_catching_threshold: f64,
    #[serde(default = "PassingConfig::default_deep_ball_bonus")]
    pub deep_ball_bonus: YardRange,
    #[serde(default = "PassingConfig::default_interception_return_base")]
    pub interception_return_base: f64,
    #[serde(default = "PassingConfig::default_interception_return_speed_divisor")]
    pub interception_return_speed_divisor: f64,
    #[serde(default = "PassingConfig::default_interception_return_noise")]
    pub interception_return_noise: NoiseRange,
}

impl PassingConfig {
    const fn default_qb_pressure_base() -> f64 {
        0.30
    }

    const fn default_qb_pressure_denominator() -> f64 {
        250.0
    }

    const fn default_qb_pressure_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.10, 0.60)
    }

    const fn default_protection_base() -> f64 {
        0.75
    }

    const fn default_protection_denominator() -> f64 {
        200.0
    }

    const fn default_protection_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.40, 0.95)
    }

    const fn default_completion_base() -> f64 {
        0.60
    }

    const fn default_completion_denominator() -> f64 {
        200.0
    }

    const fn default_completion_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.30, 0.85)
    }

    const fn default_completion_pressure_penalty() -> f64 {
        0.20
    }

    const fn default_interception_base() -> f64 {
        0.035
    }

    const fn default_interception_pressure_bonus() -> f64 {
        0.02
    }

    const fn default_interception_denominator() -> f64 {
        500.0
    }

    const fn default_interception_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.01, 0.15)
    }

    const fn default_base_yards() -> f64 {
        7.0
    }

    const fn default_skill_divisor() -> f64 {
        50.0
    }

    const fn default_yards_noise() -> NoiseRange {
        NoiseRange::new(-2.0, 12.0)
    }

    const fn default_deep_ball_probability() -> f64 {
        0.05
    }

    const fn default_deep_ball_speed_threshold() -> f64 {
        80.0
    }

    const fn default_deep_ball_catching_threshold() -> f64 {
        75.0
    }

    const fn default_deep_ball_bonus() -> YardRange {
        YardRange::new(20, 60)
    }

    const fn default_interception_return_base() -> f64 {
        5.0
    }

    const fn default_interception_return_speed_divisor() -> f64 {
        20.0
    }

    const fn default_interception_return_noise() -> NoiseRange {
        NoiseRange::new(-5.0, 15.0)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_probability("passing.qb_pressure_base", self.qb_pressure_base)?;
        check_positive("passing.qb_pressure_denominator", self.qb_pressure_denominator)?;
        self.qb_pressure_bounds.validate("passing.qb_pressure_bounds")?;
        check_probability("passing.protection_base", self.protection_base)?;
        check_positive("passing.protection_denominator", self.protection_denominator)?;
        self.protection_bounds.validate("passing.protection_bounds")?;
        check_probability("passing.completion_base", self.completion_base)?;
        check_positive("passing.completion_denominator", self.completion_denominator)?;
        self.completion_bounds.validate("passing.completion_bounds")?;
        check_probability(
            "passing.completion_pressure_penalty",
            self.completion_pressure_penalty,
        )?;
        check_probability("passing.interception_base", self.interception_base)?;
        check_probability(
            "passing.interception_pressure_bonus",
            self.interception_pressure_bonus,
        )?;
        check_positive("passing.interception_denominator", self.interception_denominator)?;
        self.interception_bounds.validate("passing.interception_bounds")?;
        check_positive("passing.skill_divisor", self.skill_divisor)?;
        self.yards_noise.validate("passing.yards_noise")?;
        check_probability("passing.deep_ball_probability", self.deep_ball_probability)?;
        check_rating("passing.deep_ball_speed_threshold", self.deep_ball_speed_threshold)?;
        check_rating(
            "passing.deep_ball_catching_threshold",
            self.deep_ball_catching_threshold,
        )?;
        self.deep_ball_bonus.validate("passing.deep_ball_bonus")?;
        check_positive(
            "passing.interception_return_speed_divisor",
            self.interception_return_speed_divisor,
        )?;
        self.interception_return_noise
            .validate("passing.interception_return_noise")?;
        Ok(())
    }
}

impl Default for PassingConfig {
    fn default() -> Self {
        Self {
            qb_pressure_base: Self::default_qb_pressure_base(),
            qb_pressure_denominator: Self::default_qb_pressure_denominator(),
            qb_pressure_bounds: Self::default_qb_pressure_bounds(),
            protection_base: Self::default_protection_base(),
            protection_denominator: Self::default_protection_denominator(),
            protection_bounds: Self::default_protection_bounds(),
            completion_base: Self::default_completion_base(),
            completion_denominator: Self::default_completion_denominator(),
            completion_bounds: Self::default_completion_bounds(),
            completion_pressure_penalty: Self::default_completion_pressure_penalty(),
            interception_base: Self::default_interception_base(),
            interception_pressure_bonus: Self::default_interception_pressure_bonus(),
            interception_denominator: Self::default_interception_denominator(),
            interception_bounds: Self::default_interception_bounds(),
            base_yards: Self::default_base_yards(),
            skill_divisor: Self::default_skill_divisor(),
            yards_noise: Self::default_yards_noise(),
            deep_ball_probability: Self::default_deep_ball_probability(),
            deep_ball_speed_threshold: Self::default_deep_ball_speed_threshold(),
            deep_ball_catching_threshold: Self::default_deep_ball_catching_threshold(),
            deep_ball_bonus: Self::default_deep_ball_bonus(),
            interception_return_base: Self::default_interception_return_base(),
            interception_return_speed_divisor: Self::default_interception_return_speed_divisor(),
            interception_return_noise: Self::default_interception_return_noise(),
        }
    }
}
