//! Team power ratings: averages of the skills that decide a matchup.
//!
//! Every calculator filters the players on the field by position group and
//! averages a skill composite. An empty group rates as league average so a
//! thin roster degrades gracefully instead of failing.
use crate::constants::DEFAULT_RATING;
use crate::model::{Player, Position};
use crate::numbers::usize_to_f64;

fn average<F>(players: &[&Player], include: fn(Position) -> bool, rating: F) -> f64
where
    F: Fn(&Player) -> f64,
{
    let (total, count) = players
        .iter()
        .filter(|player| include(player.position))
        .fold((0.0, 0_usize), |(total, count), player| {
            (total + rating(player), count + 1)
        });
    if count == 0 {
        DEFAULT_RATING
    } else {
        total / usize_to_f64(count)
    }
}

const fn is_pass_blocker(position: Position) -> bool {
    position.is_offensive_line()
        || matches!(position, Position::TE | Position::RB | Position::FB)
}

const fn is_run_blocker(position: Position) -> bool {
    position.is_offensive_line() || matches!(position, Position::TE | Position::FB)
}

const fn is_cover_player(position: Position) -> bool {
    position.is_defensive_back() || matches!(position, Position::LB)
}

fn front_seven_composite(player: &Player) -> f64 {
    (f64::from(player.tackling) + f64::from(player.speed) + f64::from(player.strength)) / 3.0
}

#[must_use]
pub fn pass_blocking_power(offense: &[&Player]) -> f64 {
    average(offense, is_pass_blocker, |player| f64::from(player.blocking))
}

#[must_use]
pub fn pass_rush_power(defense: &[&Player]) -> f64 {
    average(defense, Position::is_front_seven, front_seven_composite)
}

#[must_use]
pub fn run_blocking_power(offense: &[&Player]) -> f64 {
    average(offense, is_run_blocker, |player| f64::from(player.blocking))
}

#[must_use]
pub fn run_defense_power(defense: &[&Player]) -> f64 {
    average(defense, Position::is_front_seven, front_seven_composite)
}

#[must_use]
pub fn coverage_power(defense: &[&Player]) -> f64 {
    average(defense, is_cover_player, |player| {
        (f64::from(player.coverage) + f64::from(player.speed) + f64::from(player.awareness)) / 3.0
    })
}

/// Tackling-only average of the players who can make a stop.
#[must_use]
pub fn tackling_power(defense: &[&Player]) -> f64 {
    average(
        defense,
        |position| position.is_front_seven() || position.is_defensive_back(),
        |player| f64::from(player.tackling),
    )
}

/// Ball carrier composite weighted toward rushing skill.
#[must_use]
pub fn carrier_power(carrier: &Player) -> f64 {
    (f64::from(carrier.rushing) * 2.0 + f64::from(carrier.speed) + f64::from(carrier.agility))
        / 4.0
}

/// Run offense: blockers and ball carrier weighted evenly.
#[must_use]
pub fn run_offense_power(offense: &[&Player], carrier: &Player) -> f64 {
    (run_blocking_power(offense) + carrier_power(carrier)) / 2.0
}

/// Pass offense: quarterback accuracy and receiver separation weighted evenly.
#[must_use]
pub fn pass_offense_power(passer: &Player, receiver: &Player) -> f64 {
    let passing = (f64::from(passer.passing) * 2.0 + f64::from(passer.awareness)) / 3.0;
    let receiving =
        (f64::from(receiver.catching) + f64::from(receiver.speed) + f64::from(receiver.agility))
            / 3.0;
    (passing + receiving) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(position: Position, rating: u8) -> Player {
        let mut player = Player::new("Test", 1, position);
        player.blocking = rating;
        player.tackling = rating;
        player.speed = rating;
        player.strength = rating;
        player.coverage = rating;
        player.awareness = rating;
        player
    }

    #[test]
    fn empty_groups_rate_as_average() {
        let kicker = player(Position::K, 99);
        let field = [&kicker];
        assert!((pass_blocking_power(&field) - DEFAULT_RATING).abs() < f64::EPSILON);
        assert!((run_defense_power(&[]) - DEFAULT_RATING).abs() < f64::EPSILON);
        assert!((coverage_power(&field) - DEFAULT_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn groups_filter_by_position() {
        let center = player(Position::C, 80);
        let back = player(Position::RB, 40);
        let offense = [&center, &back];
        assert!((pass_blocking_power(&offense) - 60.0).abs() < f64::EPSILON);
        assert!((run_blocking_power(&offense) - 80.0).abs() < f64::EPSILON);

        let end = player(Position::DE, 90);
        let corner = player(Position::CB, 30);
        let defense = [&end, &corner];
        assert!((pass_rush_power(&defense) - 90.0).abs() < f64::EPSILON);
        assert!((coverage_power(&defense) - 30.0).abs() < f64::EPSILON);
        assert!((tackling_power(&defense) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn composites_weight_primary_skill() {
        let mut back = Player::new("Back", 22, Position::RB);
        back.rushing = 100;
        back.speed = 60;
        back.agility = 40;
        assert!((carrier_power(&back) - 75.0).abs() < f64::EPSILON);

        let mut passer = Player::new("Passer", 12, Position::QB);
        passer.passing = 90;
        passer.awareness = 60;
        let mut receiver = Player::new("Catcher", 80, Position::WR);
        receiver.catching = 90;
        receiver.speed = 90;
        receiver.agility = 60;
        assert!((pass_offense_power(&passer, &receiver) - 80.0).abs() < 1e-9);
    }
}
