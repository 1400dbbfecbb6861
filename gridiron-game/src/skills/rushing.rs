use crate::config::RushingConfig;
use crate::model::Player;

/// Chance the carrier shrugs off the first tackler.
#[must_use]
pub fn tackle_break_chance(cfg: &RushingConfig, carrier: &Player, tackling_power: f64) -> f64 {
    let carrier_power = (f64::from(carrier.rushing) + f64::from(carrier.strength)) / 2.0;
    cfg.tackle_break_bounds.clamp(
        cfg.tackle_break_base + (carrier_power - tackling_power) / cfg.tackle_break_denominator,
    )
}

#[must_use]
pub fn breakaway_eligible(cfg: &RushingConfig, carrier: &Player) -> bool {
    f64::from(carrier.speed) > cfg.breakaway_speed_threshold
}
