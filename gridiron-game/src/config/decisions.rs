use serde::{Deserialize, Serialize};

use super::{ConfigError, check_probability};

/// Fixed-probability play-calling heuristics and overtime policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDecisionsConfig {
    /// A scrimmage draw at or below this value calls a run.
    #[serde(default = "GameDecisionsConfig::default_run_probability")]
    pub run_probability: f64,
    #[serde(default = "GameDecisionsConfig::default_field_goal_max_distance")]
    pub field_goal_max_distance: u32,
    #[serde(default = "GameDecisionsConfig::default_fourth_down_go_max_yards")]
    pub fourth_down_go_max_yards: u8,
    #[serde(default = "GameDecisionsConfig::default_fourth_down_go_min_field_position")]
    pub fourth_down_go_min_field_position: u8,
    #[serde(default = "GameDecisionsConfig::default_two_point_attempt_probability")]
    pub two_point_attempt_probability: f64,
    #[serde(default = "GameDecisionsConfig::default_two_point_run_probability")]
    pub two_point_run_probability: f64,
    #[serde(default = "GameDecisionsConfig::default_two_point_success_probability")]
    pub two_point_success_probability: f64,
    #[serde(default = "GameDecisionsConfig::default_overtime_enabled")]
    pub overtime_enabled: bool,
    #[serde(default = "GameDecisionsConfig::default_overtime_seconds")]
    pub overtime_seconds: u32,
}

impl GameDecisionsConfig {
    const fn default_run_probability() -> f64 {
        0.5
    }

    const fn default_field_goal_max_distance() -> u32 {
        55
    }

    const fn default_fourth_down_go_max_yards() -> u8 {
        2
    }

    const fn default_fourth_down_go_min_field_position() -> u8 {
        55
    }

    const fn default_two_point_attempt_probability() -> f64 {
        0.10
    }

    const fn default_two_point_run_probability() -> f64 {
        0.5
    }

    const fn default_two_point_success_probability() -> f64 {
        0.48
    }

    const fn default_overtime_enabled() -> bool {
        true
    }

    const fn default_overtime_seconds() -> u32 {
        600
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_probability("decisions.run_probability", self.run_probability)?;
        check_probability(
            "decisions.two_point_attempt_probability",
            self.two_point_attempt_probability,
        )?;
        check_probability(
            "decisions.two_point_run_probability",
            self.two_point_run_probability,
        )?;
        check_probability(
            "decisions.two_point_success_probability",
            self.two_point_success_probability,
        )?;
        if self.fourth_down_go_min_field_position > 100 {
            return Err(ConfigError::RangeViolation {
                field: "decisions.fourth_down_go_min_field_position",
                min: 0.0,
                max: 100.0,
                value: f64::from(self.fourth_down_go_min_field_position),
            });
        }
        if self.overtime_enabled && self.overtime_seconds == 0 {
            return Err(ConfigError::NonPositive {
                field: "decisions.overtime_seconds",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for GameDecisionsConfig {
    fn default() -> Self {
        Self {
            run_probability: Self::default_run_probability(),
            field_goal_max_distance: Self::default_field_goal_max_distance(),
            fourth_down_go_max_yards: Self::default_fourth_down_go_max_yards(),
            fourth_down_go_min_field_position: Self::default_fourth_down_go_min_field_position(),
            two_point_attempt_probability: Self::default_two_point_attempt_probability(),
            two_point_run_probability: Self::default_two_point_run_probability(),
            two_point_success_probability: Self::default_two_point_success_probability(),
            overtime_enabled: Self::default_overtime_enabled(),
            overtime_seconds: Self::default_overtime_seconds(),
        }
    }
}
