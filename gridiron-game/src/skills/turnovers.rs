use rand::RngCore;

use crate::config::TurnoversConfig;
use crate::model::{FumbleContext, PlayType};
use crate::rng::Roll;

/// Chance the ball comes loose when the carrier is hit.
#[must_use]
pub fn fumble_chance(
    cfg: &TurnoversConfig,
    context: FumbleContext,
    tackling_power: f64,
    ball_security: f64,
    tacklers: usize,
) -> f64 {
    let base = match context {
        FumbleContext::Normal => cfg.fumble_normal,
        FumbleContext::Return => cfg.fumble_return,
        FumbleContext::Sack => cfg.fumble_sack,
    };
    let multiplier = match tacklers {
        0 | 1 => 1.0,
        2 => cfg.two_tackler_multiplier,
        _ => cfg.gang_tackle_multiplier,
    };
    cfg.fumble_bounds
        .clamp((base + (tackling_power - ball_security) / cfg.fumble_denominator) * multiplier)
}

/// Direction a loose ball takes off the turf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    Backward,
    Sideways,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FumbleRecovery {
    pub out_of_bounds: bool,
    pub bounce: Option<Bounce>,
    /// The team that put the ball on the ground keeps it.
    pub fumbling_side_recovers: bool,
}

/// Chance the fumbling side falls on the ball after `bounce`.
#[must_use]
pub fn recovery_chance(
    cfg: &TurnoversConfig,
    bounce: Bounce,
    fumbling_awareness: f64,
    opposing_awareness: f64,
) -> f64 {
    let base = match bounce {
        Bounce::Backward => cfg.recovery_backward,
        Bounce::Sideways => cfg.recovery_sideways,
        Bounce::Forward => cfg.recovery_forward,
    };
    let awareness = (fumbling_awareness - opposing_awareness) / 100.0;
    cfg.recovery_bounds
        .clamp(base + awareness * cfg.recovery_awareness_factor)
}

/// Resolve who ends up with a loose ball.
///
/// Draw order: out-of-bounds, bounce direction, recovery.
pub fn fumble_recovery<R: RngCore>(
    cfg: &TurnoversConfig,
    fumbling_awareness: f64,
    opposing_awareness: f64,
    rng: &mut R,
) -> FumbleRecovery {
    if rng.roll() < cfg.out_of_bounds_probability {
        return FumbleRecovery {
            out_of_bounds: true,
            bounce: None,
            fumbling_side_recovers: true,
        };
    }
    let bounce_roll = rng.roll();
    let bounce = if bounce_roll < cfg.backward_bounce_threshold {
        Bounce::Backward
    } else if bounce_roll < cfg.forward_bounce_threshold {
        Bounce::Sideways
    } else {
        Bounce::Forward
    };
    let chance = recovery_chance(cfg, bounce, fumbling_awareness, opposing_awareness);
    FumbleRecovery {
        out_of_bounds: false,
        bounce: Some(bounce),
        fumbling_side_recovers: rng.roll() < chance,
    }
}

/// Snap-quality check. Kickoffs have no snap and never draw.
pub fn snap_is_good<R: RngCore>(cfg: &TurnoversConfig, play_type: PlayType, rng: &mut R) -> bool {
    if play_type == PlayType::Kickoff {
        return true;
    }
    rng.roll() >= cfg.muffed_snap_probability
}
