//! Tunable probability tables grouped by game domain.
//!
//! Every value carries a serde default, so a configuration file only needs
//! the fields it overrides. Loading always validates; a rejected file never
//! reaches a game.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::model::{PenaltyTiming, PlayType};
use crate::penalty::PenaltyName;

mod decisions;
mod injuries;
mod kicking;
mod passing;
mod rushing;
mod turnovers;

pub use decisions::GameDecisionsConfig;
pub use injuries::InjuriesConfig;
pub use kicking::{
    FairCatchConfig, FieldGoalsConfig, HangBonus, KickoffsConfig, PuntsConfig, ZoneBonus,
};
pub use passing::PassingConfig;
pub use rushing::RushingConfig;
pub use turnovers::TurnoversConfig;

/// Root configuration handed by reference to every calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub passing: PassingConfig,
    #[serde(default)]
    pub rushing: RushingConfig,
    #[serde(default)]
    pub turnovers: TurnoversConfig,
    #[serde(default)]
    pub field_goals: FieldGoalsConfig,
    #[serde(default)]
    pub kickoffs: KickoffsConfig,
    #[serde(default)]
    pub punts: PuntsConfig,
    #[serde(default)]
    pub decisions: GameDecisionsConfig,
    #[serde(default)]
    pub injuries: InjuriesConfig,
    /// Runaway guard: a game that logs more plays than this is aborted.
    #[serde(default = "SimulationConfig::default_max_plays")]
    pub max_plays: u32,
}

impl SimulationConfig {
    #[must_use]
    pub const fn default_max_plays() -> u32 {
        400
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation
    /// error for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`SimulationConfig::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
        Self::from_json(&raw)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.passing.validate()?;
        self.rushing.validate()?;
        self.turnovers.validate()?;
        self.field_goals.validate()?;
        self.kickoffs.validate()?;
        self.punts.validate()?;
        self.decisions.validate()?;
        self.injuries.validate()?;
        if self.max_plays == 0 {
            return Err(ConfigError::NonPositive {
                field: "max_plays",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            passing: PassingConfig::default(),
            rushing: RushingConfig::default(),
            turnovers: TurnoversConfig::default(),
            field_goals: FieldGoalsConfig::default(),
            kickoffs: KickoffsConfig::default(),
            punts: PuntsConfig::default(),
            decisions: GameDecisionsConfig::default(),
            injuries: InjuriesConfig::default(),
            max_plays: Self::default_max_plays(),
        }
    }
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a probability in [0, 1] (got {value})")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("{field} clamp is inverted (min {min} > max {max})")]
    ClampBoundsInverted {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("penalty check {timing:?} {play_type:?} names {name}, which the catalog lacks")]
    UnknownPenalty {
        timing: PenaltyTiming,
        play_type: PlayType,
        name: PenaltyName,
    },
    #[error("configuration parse failed: {0}")]
    Parse(String),
    #[error("configuration read failed: {0}")]
    Io(String),
}

/// Inclusive clamp applied to a computed probability before it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityBounds {
    pub min: f64,
    pub max: f64,
}

impl ProbabilityBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the bounds; NaN collapses to `min`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        crate::numbers::clamp_probability(value, self.min, self.max)
    }

    /// Whether `value` sits inside the bounds.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        check_probability(field, self.min)?;
        check_probability(field, self.max)?;
        if self.min > self.max {
            return Err(ConfigError::ClampBoundsInverted {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Continuous noise window sampled uniformly as `min + roll * (max - min)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseRange {
    pub min: f64,
    pub max: f64,
}

impl NoiseRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit roll onto the window.
    #[must_use]
    pub fn sample(self, roll: f64) -> f64 {
        self.min + roll * (self.max - self.min)
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::ClampBoundsInverted {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inclusive integer yardage window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardRange {
    pub min: i32,
    pub max: i32,
}

impl YardRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(self, yards: i32) -> i32 {
        yards.clamp(self.min, self.max)
    }

    fn validate(self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::ClampBoundsInverted {
                field,
                min: f64::from(self.min),
                max: f64::from(self.max),
            });
        }
        Ok(())
    }
}

pub(crate) fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn check_rating(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::RangeViolation {
            field,
            min: 0.0,
            max: 100.0,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SimulationConfig::default().validate().expect("defaults valid");
    }

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = SimulationConfig::from_json("{}").expect("empty config parses");
        assert_eq!(cfg, SimulationConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SimulationConfig::from_json(
            r#"{ "passing": { "completion_base": 0.7 }, "max_plays": 250 }"#,
        )
        .expect("override parses");
        assert!((cfg.passing.completion_base - 0.7).abs() < f64::EPSILON);
        assert_eq!(cfg.max_plays, 250);
        assert_eq!(cfg.rushing, RushingConfig::default());
    }

    #[test]
    fn kick_tiers_override_and_validate() {
        let cfg = SimulationConfig::from_json(
            r#"{ "punts": { "fair_catch": { "base": 0.5, "zone": [{ "inside": 10, "bonus": 0.3 }] } } }"#,
        )
        .expect("tiers parse");
        assert!((cfg.punts.fair_catch.base - 0.5).abs() < f64::EPSILON);
        assert!(cfg.punts.fair_catch.hang.is_empty());
        assert_eq!(cfg.punts.downed_zone, PuntsConfig::default().downed_zone);

        let err = SimulationConfig::from_json(
            r#"{ "punts": { "downed_zone": [{ "inside": 5, "bonus": 1.4 }] } }"#,
        )
        .expect_err("bonus above one");
        assert!(matches!(
            err,
            ConfigError::ProbabilityOutOfRange {
                field: "punts.downed",
                ..
            }
        ));
    }

    #[test]
    fn tier_bonuses_take_the_largest_match() {
        let zone = [
            ZoneBonus::new(5, 0.40),
            ZoneBonus::new(10, 0.25),
            ZoneBonus::new(15, 0.15),
        ];
        assert!((ZoneBonus::pick(&zone, 3) - 0.40).abs() < 1e-12);
        assert!((ZoneBonus::pick(&zone, 12) - 0.15).abs() < 1e-12);
        assert!(ZoneBonus::pick(&zone, 15).abs() < 1e-12);
        let hang = [HangBonus::new(4.5, 0.10), HangBonus::new(4.0, 0.05)];
        assert!((HangBonus::pick(&hang, 4.8) - 0.10).abs() < 1e-12);
        assert!((HangBonus::pick(&hang, 4.2) - 0.05).abs() < 1e-12);
        assert!(HangBonus::pick(&hang, 4.0).abs() < 1e-12);
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected() {
        let err = SimulationConfig::from_json(r#"{ "rushing": { "breakaway_probability": 1.5 } }"#)
            .expect_err("out of range");
        assert!(matches!(
            err,
            ConfigError::ProbabilityOutOfRange {
                field: "rushing.breakaway_probability",
                ..
            }
        ));
    }

    #[test]
    fn inverted_clamp_is_rejected() {
        let err = SimulationConfig::from_json(
            r#"{ "passing": { "completion_bounds": { "min": 0.9, "max": 0.2 } } }"#,
        )
        .expect_err("inverted clamp");
        assert!(matches!(err, ConfigError::ClampBoundsInverted { .. }));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let err = SimulationConfig::from_json(
            r#"{ "passing": { "completion_denominator": 0.0 } }"#,
        )
        .expect_err("zero denominator");
        assert!(matches!(err, ConfigError::NonPositive { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json("{ nope").expect_err("bad json");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SimulationConfig::from_path(Path::new("/definitely/not/here.json"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn ranges_sample_and_clamp() {
        let noise = NoiseRange::new(-3.0, 8.0);
        assert!((noise.sample(0.0) + 3.0).abs() < f64::EPSILON);
        assert!((noise.sample(1.0) - 8.0).abs() < f64::EPSILON);
        assert_eq!(YardRange::new(-5, 50).clamp(80), 50);
        assert!(ProbabilityBounds::new(0.1, 0.6).contains(0.3));
        assert!((ProbabilityBounds::new(0.1, 0.6).clamp(2.0) - 0.6).abs() < f64::EPSILON);
    }
}
