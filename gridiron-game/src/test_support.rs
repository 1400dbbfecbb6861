//! Shared fixtures for unit tests.
use crate::actions::Rules;
use crate::config::SimulationConfig;
use crate::model::{Game, Player, Position, Team};
use crate::penalty::PenaltyCatalog;

const DEPTH_CHART: [Position; 33] = [
    Position::QB,
    Position::QB,
    Position::RB,
    Position::RB,
    Position::FB,
    Position::WR,
    Position::WR,
    Position::WR,
    Position::WR,
    Position::TE,
    Position::TE,
    Position::C,
    Position::G,
    Position::G,
    Position::T,
    Position::T,
    Position::DE,
    Position::DE,
    Position::DT,
    Position::DT,
    Position::LB,
    Position::LB,
    Position::LB,
    Position::LB,
    Position::OLB,
    Position::CB,
    Position::CB,
    Position::S,
    Position::FS,
    Position::K,
    Position::P,
    Position::LS,
    Position::H,
];

/// A full, league-average roster.
pub(crate) fn roster(prefix: &str) -> Vec<Player> {
    DEPTH_CHART
        .iter()
        .enumerate()
        .map(|(slot, &position)| {
            let number = u8::try_from(slot + 1).unwrap_or(99);
            Player::new(format!("{prefix}{slot}"), number, position)
        })
        .collect()
}

pub(crate) fn game() -> Game {
    Game::new(
        Team::new("Home", "Hosts", roster("H")),
        Team::new("Away", "Visitors", roster("A")),
        0,
    )
}

/// Rules with an empty penalty table, so no flags ever fly.
pub(crate) fn quiet_rules(config: &SimulationConfig) -> Rules<'_> {
    static EMPTY: PenaltyCatalog = PenaltyCatalog {
        penalties: Vec::new(),
        checks: Vec::new(),
    };
    Rules::new(config, &EMPTY)
}
