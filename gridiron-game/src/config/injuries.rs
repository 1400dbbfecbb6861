use serde::{Deserialize, Serialize};

use super::{ConfigError, check_positive, check_probability};

/// Injury occurrence and severity tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuriesConfig {
    #[serde(default = "InjuriesConfig::default_run_base")]
    pub run_base: f64,
    #[serde(default = "InjuriesConfig::default_pass_base")]
    pub pass_base: f64,
    #[serde(default = "InjuriesConfig::default_sack_base")]
    pub sack_base: f64,
    #[serde(default = "InjuriesConfig::default_kickoff_base")]
    pub kickoff_base: f64,
    #[serde(default = "InjuriesConfig::default_punt_base")]
    pub punt_base: f64,
    #[serde(default = "InjuriesConfig::default_field_goal_base")]
    pub field_goal_base: f64,
    /// Fragility factor is `fragility_floor + fragility / fragility_divisor`.
    #[serde(default = "InjuriesConfig::default_fragility_floor")]
    pub fragility_floor: f64,
    #[serde(default = "InjuriesConfig::default_fragility_divisor")]
    pub fragility_divisor: f64,
    #[serde(default = "InjuriesConfig::default_gang_tackle_multiplier")]
    pub gang_tackle_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_big_play_multiplier")]
    pub big_play_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_high_contact_multiplier")]
    pub high_contact_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_quarterback_multiplier")]
    pub quarterback_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_specialist_multiplier")]
    pub specialist_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_qb_sack_multiplier")]
    pub qb_sack_multiplier: f64,
    #[serde(default = "InjuriesConfig::default_minor_probability")]
    pub minor_probability: f64,
    #[serde(default = "InjuriesConfig::default_moderate_probability")]
    pub moderate_probability: f64,
}

impl InjuriesConfig {
    const fn default_run_base() -> f64 {
        0.03
    }

    const fn default_pass_base() -> f64 {
        0.03
    }

    const fn default_sack_base() -> f64 {
        0.06
    }

    const fn default_kickoff_base() -> f64 {
        0.05
    }

    const fn default_punt_base() -> f64 {
        0.04
    }

    const fn default_field_goal_base() -> f64 {
        0.001
    }

    const fn default_fragility_floor() -> f64 {
        0.5
    }

    const fn default_fragility_divisor() -> f64 {
        100.0
    }

    const fn default_gang_tackle_multiplier() -> f64 {
        1.4
    }

    const fn default_big_play_multiplier() -> f64 {
        1.2
    }

    const fn default_high_contact_multiplier() -> f64 {
        1.2
    }

    const fn default_quarterback_multiplier() -> f64 {
        0.7
    }

    const fn default_specialist_multiplier() -> f64 {
        0.3
    }

    const fn default_qb_sack_multiplier() -> f64 {
        2.0
    }

    const fn default_minor_probability() -> f64 {
        0.60
    }

    const fn default_moderate_probability() -> f64 {
        0.30
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_probability("injuries.run_base", self.run_base)?;
        check_probability("injuries.pass_base", self.pass_base)?;
        check_probability("injuries.sack_base", self.sack_base)?;
        check_probability("injuries.kickoff_base", self.kickoff_base)?;
        check_probability("injuries.punt_base", self.punt_base)?;
        check_probability("injuries.field_goal_base", self.field_goal_base)?;
        check_positive("injuries.fragility_divisor", self.fragility_divisor)?;
        for (field, value) in [
            ("injuries.fragility_floor", self.fragility_floor),
            ("injuries.gang_tackle_multiplier", self.gang_tackle_multiplier),
            ("injuries.big_play_multiplier", self.big_play_multiplier),
            ("injuries.high_contact_multiplier", self.high_contact_multiplier),
            ("injuries.quarterback_multiplier", self.quarterback_multiplier),
            ("injuries.specialist_multiplier", self.specialist_multiplier),
            ("injuries.qb_sack_multiplier", self.qb_sack_multiplier),
        ] {
            check_positive(field, value)?;
        }
        check_probability("injuries.minor_probability", self.minor_probability)?;
        check_probability("injuries.moderate_probability", self.moderate_probability)?;
        let combined = self.minor_probability + self.moderate_probability;
        if combined > 1.0 {
            return Err(ConfigError::ProbabilityOutOfRange {
                field: "injuries.minor_probability + injuries.moderate_probability",
                value: combined,
            });
        }
        Ok(())
    }
}

impl Default for InjuriesConfig {
    fn default() -> Self {
        Self {
            run_base: Self::default_run_base(),
            pass_base: Self::default_pass_base(),
            sack_base: Self::default_sack_base(),
            kickoff_base: Self::default_kickoff_base(),
            punt_base: Self::default_punt_base(),
            field_goal_base: Self::default_field_goal_base(),
            fragility_floor: Self::default_fragility_floor(),
            fragility_divisor: Self::default_fragility_divisor(),
            gang_tackle_multiplier: Self::default_gang_tackle_multiplier(),
            big_play_multiplier: Self::default_big_play_multiplier(),
            high_contact_multiplier: Self::default_high_contact_multiplier(),
            quarterback_multiplier: Self::default_quarterback_multiplier(),
            specialist_multiplier: Self::default_specialist_multiplier(),
            qb_sack_multiplier: Self::default_qb_sack_multiplier(),
            minor_probability: Self::default_minor_probability(),
            moderate_probability: Self::default_moderate_probability(),
        }
    }
}
