use serde::{Deserialize, Serialize};

use super::{ConfigError, ProbabilityBounds, check_positive, check_probability};

/// Fumble, recovery, snap, and blocked-kick tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoversConfig {
    #[serde(default = "TurnoversConfig::default_fumble_normal")]
    pub fumble_normal: f64,
    #[serde(default = "TurnoversConfig::default_fumble_return")]
    pub fumble_return: f64,
    #[serde(default = "TurnoversConfig::default_fumble_sack")]
    pub fumble_sack: f64,
    #[serde(default = "TurnoversConfig::default_fumble_denominator")]
    pub fumble_denominator: f64,
    #[serde(default = "TurnoversConfig::default_fumble_bounds")]
    pub fumble_bounds: ProbabilityBounds,
    #[serde(default = "TurnoversConfig::default_gang_tackle_multiplier")]
    pub gang_tackle_multiplier: f64,
    #[serde(default = "TurnoversConfig::default_two_tackler_multiplier")]
    pub two_tackler_multiplier: f64,
    #[serde(default = "TurnoversConfig::default_out_of_bounds_probability")]
    pub out_of_bounds_probability: f64,
    /// Bounce rolls below this go backward.
    #[serde(default = "TurnoversConfig::default_backward_bounce_threshold")]
    pub backward_bounce_threshold: f64,
    /// Bounce rolls at or above this go forward; rolls between the two
    /// thresholds squirt sideways.
    #[serde(default = "TurnoversConfig::default_forward_bounce_threshold")]
    pub forward_bounce_threshold: f64,
    /// Base chance the fumbling side recovers, by bounce direction.
    #[serde(default = "TurnoversConfig::default_recovery_backward")]
    pub recovery_backward: f64,
    #[serde(default = "TurnoversConfig::default_recovery_forward")]
    pub recovery_forward: f64,
    #[serde(default = "TurnoversConfig::default_recovery_sideways")]
    pub recovery_sideways: f64,
    #[serde(default = "TurnoversConfig::default_recovery_awareness_factor")]
    pub recovery_awareness_factor: f64,
    #[serde(default = "TurnoversConfig::default_recovery_bounds")]
    pub recovery_bounds: ProbabilityBounds,
    #[serde(default = "TurnoversConfig::default_muffed_snap_probability")]
    pub muffed_snap_probability: f64,
    #[serde(default = "TurnoversConfig::default_blocked_kick_defense_recovery")]
    pub blocked_kick_defense_recovery: f64,
}

impl TurnoversConfig {
    const fn default_fumble_normal() -> f64 {
        0.015
    }

    const fn default_fumble_return() -> f64 {
        0.025
    }

    const fn default_fumble_sack() -> f64 {
        0.12
    }

    const fn default_fumble_denominator() -> f64 {
        400.0
    }

    const fn default_fumble_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.003, 0.25)
    }

    const fn default_gang_tackle_multiplier() -> f64 {
        1.3
    }

    const fn default_two_tackler_multiplier() -> f64 {
        1.15
    }

    const fn default_out_of_bounds_probability() -> f64 {
        0.12
    }

    const fn default_backward_bounce_threshold() -> f64 {
        0.4
    }

    const fn default_forward_bounce_threshold() -> f64 {
        0.7
    }

    const fn default_recovery_backward() -> f64 {
        0.50
    }

    const fn default_recovery_forward() -> f64 {
        0.70
    }

    const fn default_recovery_sideways() -> f64 {
        0.60
    }

    const fn default_recovery_awareness_factor() -> f64 {
        0.15
    }

    const fn default_recovery_bounds() -> ProbabilityBounds {
        ProbabilityBounds::new(0.3, 0.8)
    }

    const fn default_muffed_snap_probability() -> f64 {
        0.01
    }

    const fn default_blocked_kick_defense_recovery() -> f64 {
        0.5
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check_probability("turnovers.fumble_normal", self.fumble_normal)?;
        check_probability("turnovers.fumble_return", self.fumble_return)?;
        check_probability("turnovers.fumble_sack", self.fumble_sack)?;
        check_positive("turnovers.fumble_denominator", self.fumble_denominator)?;
        self.fumble_bounds.validate("turnovers.fumble_bounds")?;
        check_positive("turnovers.gang_tackle_multiplier", self.gang_tackle_multiplier)?;
        check_positive(
            "turnovers.two_tackler_multiplier",
            self.two_tackler_multiplier,
        )?;
        check_probability(
            "turnovers.out_of_bounds_probability",
            self.out_of_bounds_probability,
        )?;
        check_probability(
            "turnovers.backward_bounce_threshold",
            self.backward_bounce_threshold,
        )?;
        check_probability(
            "turnovers.forward_bounce_threshold",
            self.forward_bounce_threshold,
        )?;
        if self.backward_bounce_threshold > self.forward_bounce_threshold {
            return Err(ConfigError::ClampBoundsInverted {
                field: "turnovers.bounce_thresholds",
                min: self.backward_bounce_threshold,
                max: self.forward_bounce_threshold,
            });
        }
        check_probability("turnovers.recovery_backward", self.recovery_backward)?;
        check_probability("turnovers.recovery_forward", self.recovery_forward)?;
        check_probability("turnovers.recovery_sideways", self.recovery_sideways)?;
        check_probability(
            "turnovers.recovery_awareness_factor",
            self.recovery_awareness_factor,
        )?;
        self.recovery_bounds.validate("turnovers.recovery_bounds")?;
        check_probability(
            "turnovers.muffed_snap_probability",
            self.muffed_snap_probability,
        )?;
        check_probability(
            "turnovers.blocked_kick_defense_recovery",
            self.blocked_kick_defense_recovery,
        )?;
        Ok(())
    }
}

impl Default for TurnoversConfig {
    fn default() -> Self {
        Self {
            fumble_normal: Self::default_fumble_normal(),
            fumble_return: Self::default_fumble_return(),
            fumble_sack: Self::default_fumble_sack(),
            fumble_denominator: Self::default_fumble_denominator(),
            fumble_bounds: Self::default_fumble_bounds(),
            gang_tackle_multiplier: Self::default_gang_tackle_multiplier(),
            two_tackler_multiplier: Self::default_two_tackler_multiplier(),
            out_of_bounds_probability: Self::default_out_of_bounds_probability(),
            backward_bounce_threshold: Self::default_backward_bounce_threshold(),
            forward_bounce_threshold: Self::default_forward_bounce_threshold(),
            recovery_backward: Self::default_recovery_backward(),
            recovery_forward: Self::default_recovery_forward(),
            recovery_sideways: Self::default_recovery_sideways(),
            recovery_awareness_factor: Self::default_recovery_awareness_factor(),
            recovery_bounds: Self::default_recovery_bounds(),
            muffed_snap_probability: Self::default_muffed_snap_probability(),
            blocked_kick_defense_recovery: Self::default_blocked_kick_defense_recovery(),
        }
    }
}
