#![allow(dead_code)]

use gridiron_game::{Player, Position, Team};

pub const DEPTH_CHART: [Position; 33] = [
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

pub fn roster(prefix: &str) -> Vec<Player> {
    DEPTH_CHART
        .iter()
        .zip(1_u8..)
        .map(|(&position, number)| Player::new(format!("{prefix} {number}"), number, position))
        .collect()
}

pub fn teams() -> (Team, Team) {
    (
        Team::new("Home", "Hosts", roster("Home")),
        Team::new("Away", "Visitors", roster("Away")),
    )
}
