//! Defensive pressure factor from the battle at the line of scrimmage.
use crate::model::Player;
use crate::numbers::usize_to_f64;
use crate::power;

const BASE_PRESSURE: f64 = 1.0;
const MIN_PRESSURE: f64 = 0.0;
const MAX_PRESSURE: f64 = 2.5;
const STANDARD_RUSHERS: f64 = 4.0;
const PRESSURE_PER_EXTRA_RUSHER: f64 = 0.15;
const SKILL_SCALE: f64 = 100.0;

/// Multiplier describing how much the defense disrupts the play.
///
/// Around `1.0` for an even four-man rush, below that for a soft rush, and
/// up to `2.5` for a dominant blitz.
#[must_use]
pub fn pressure_factor(offense: &[&Player], defense: &[&Player], pass_play: bool) -> f64 {
    let (blocking, rushing) = if pass_play {
        (
            power::pass_blocking_power(offense),
            power::pass_rush_power(defense),
        )
    } else {
        (
            power::run_blocking_power(offense),
            power::run_defense_power(defense),
        )
    };
    let rushers = usize_to_f64(
        defense
            .iter()
            .filter(|player| player.position.is_front_seven())
            .count(),
    );
    let skill_impact = (rushing - blocking) / SKILL_SCALE;
    let rusher_impact = (rushers - STANDARD_RUSHERS) * PRESSURE_PER_EXTRA_RUSHER;
    (BASE_PRESSURE + skill_impact + rusher_impact).clamp(MIN_PRESSURE, MAX_PRESSURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn unit(positions: &[Position], rating: u8) -> Vec<Player> {
        positions
            .iter()
            .map(|&position| {
                let mut player = Player::new("Test", 1, position);
                player.blocking = rating;
                player.tackling = rating;
                player.speed = rating;
                player.strength = rating;
                player
            })
            .collect()
    }

    #[test]
    fn even_four_man_rush_is_neutral() {
        let offense = unit(&[Position::C, Position::G, Position::G, Position::T, Position::T], 60);
        let defense = unit(&[Position::DE, Position::DE, Position::DT, Position::DT], 60);
        let offense: Vec<&Player> = offense.iter().collect();
        let defense: Vec<&Player> = defense.iter().collect();
        assert!((pressure_factor(&offense, &defense, true) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn blitz_and_mismatch_raise_pressure_within_bounds() {
        let offense = unit(&[Position::C, Position::G], 0);
        let defense = unit(
            &[
                Position::DE,
                Position::DE,
                Position::DT,
                Position::DT,
                Position::LB,
                Position::LB,
                Position::LB,
                Position::OLB,
            ],
            100,
        );
        let offense: Vec<&Player> = offense.iter().collect();
        let defense: Vec<&Player> = defense.iter().collect();
        let factor = pressure_factor(&offense, &defense, true);
        assert!((factor - MAX_PRESSURE).abs() < f64::EPSILON);
        let soft = pressure_factor(&defense, &[], false);
        assert!((MIN_PRESSURE..=MAX_PRESSURE).contains(&soft));
    }
}
