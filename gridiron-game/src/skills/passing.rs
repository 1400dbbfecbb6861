use crate::config::PassingConfig;
use crate::model::Player;

/// Chance the rush gets home before the quarterback can set.
#[must_use]
pub fn qb_pressure_chance(
    cfg: &PassingConfig,
    rush_power: f64,
    block_power: f64,
    pressure_factor: f64,
) -> f64 {
    let base = cfg.qb_pressure_base + (rush_power - block_power) / cfg.qb_pressure_denominator;
    cfg.qb_pressure_bounds.clamp(base * pressure_factor)
}

/// Chance the line holds long enough once pressure arrives; a miss is a sack.
#[must_use]
pub fn protection_chance(cfg: &PassingConfig, block_power: f64, rush_power: f64) -> f64 {
    cfg.protection_bounds
        .clamp(cfg.protection_base + (block_power - rush_power) / cfg.protection_denominator)
}

#[must_use]
pub fn completion_chance(
    cfg: &PassingConfig,
    offense_power: f64,
    coverage_power: f64,
    pressured: bool,
) -> f64 {
    let mut chance =
        cfg.completion_base + (offense_power - coverage_power) / cfg.completion_denominator;
    if pressured {
        chance -= cfg.completion_pressure_penalty;
    }
    cfg.completion_bounds.clamp(chance)
}

#[must_use]
pub fn interception_chance(
    cfg: &PassingConfig,
    coverage_power: f64,
    passing: f64,
    pressured: bool,
) -> f64 {
    let pressure = if pressured {
        cfg.interception_pressure_bonus
    } else {
        0.0
    };
    cfg.interception_bounds.clamp(
        cfg.interception_base + pressure + (coverage_power - passing) / cfg.interception_denominator,
    )
}

/// Only fast, sure-handed receivers can take the top off a defense.
#[must_use]
pub fn deep_ball_eligible(cfg: &PassingConfig, receiver: &Player) -> bool {
    f64::from(receiver.speed) > cfg.deep_ball_speed_threshold
        && f64::from(receiver.catching) > cfg.deep_ball_catching_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    #[test]
    fn even_matchup_uses_base_rates() {
        let cfg = PassingConfig::default();
        assert!((completion_chance(&cfg, 60.0, 60.0, false) - 0.60).abs() < 1e-9);
        assert!((completion_chance(&cfg, 60.0, 60.0, true) - 0.40).abs() < 1e-9);
        assert!((qb_pressure_chance(&cfg, 50.0, 50.0, 1.0) - 0.30).abs() < 1e-9);
        assert!((protection_chance(&cfg, 50.0, 50.0) - 0.75).abs() < 1e-9);
        assert!((interception_chance(&cfg, 50.0, 50.0, true) - 0.055).abs() < 1e-9);
    }

    #[test]
    fn differential_sweep_stays_in_bounds() {
        let cfg = PassingConfig::default();
        for diff in -1000..=1000 {
            let diff = f64::from(diff);
            for pressured in [false, true] {
                assert!(cfg.completion_bounds.contains(completion_chance(&cfg, diff, 0.0, pressured)));
                assert!(cfg.interception_bounds.contains(interception_chance(&cfg, diff, 0.0, pressured)));
            }
            assert!(cfg.qb_pressure_bounds.contains(qb_pressure_chance(&cfg, diff, 0.0, 2.5)));
            assert!(cfg.protection_bounds.contains(protection_chance(&cfg, diff, 0.0)));
        }
    }

    #[test]
    fn deep_ball_needs_speed_and_hands() {
        let cfg = PassingConfig::default();
        let mut receiver = Player::new("Burner", 11, Position::WR);
        receiver.speed = 95;
        receiver.catching = 70;
        assert!(!deep_ball_eligible(&cfg, &receiver));
        receiver.catching = 80;
        assert!(deep_ball_eligible(&cfg, &receiver));
    }
}
