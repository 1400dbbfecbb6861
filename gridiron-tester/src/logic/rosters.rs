use gridiron_game::{Player, Position, RosterSource, Team};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::io;
use std::path::PathBuf;

/// Seed for the built-in fixture rosters; fixed so every game sees the same players.
const FIXTURE_SEED: u64 = 0x00F0_07BA_11;

const DEPTH_CHART: &[(Position, usize)] = &[
    (Position::QB, 2),
    (Position::RB, 3),
    (Position::FB, 1),
    (Position::WR, 5),
    (Position::TE, 2),
    (Position::C, 2),
    (Position::G, 3),
    (Position::T, 3),
    (Position::DE, 3),
    (Position::DT, 3),
    (Position::LB, 4),
    (Position::OLB, 2),
    (Position::CB, 4),
    (Position::S, 2),
    (Position::FS, 1),
    (Position::K, 1),
    (Position::P, 1),
    (Position::LS, 1),
    (Position::H, 1),
];

#[derive(Debug, Deserialize)]
struct TeamsFile {
    home: Team,
    away: Team,
}

/// Where the tester gets its two teams.
#[derive(Debug, Clone)]
pub enum Rosters {
    Fixture,
    File(PathBuf),
}

impl RosterSource for Rosters {
    type Error = io::Error;

    fn load_teams(&self) -> Result<(Team, Team), Self::Error> {
        match self {
            Self::Fixture => Ok(fixture_teams()),
            Self::File(path) => {
                let raw = std::fs::read_to_string(path)?;
                let teams: TeamsFile = serde_json::from_str(&raw).map_err(io::Error::other)?;
                Ok((teams.home, teams.away))
            }
        }
    }
}

pub fn fixture_teams() -> (Team, Team) {
    let mut rng = ChaCha8Rng::seed_from_u64(FIXTURE_SEED);
    (
        Team::new("Capital", "Ironclads", fixture_roster("Ironclad", &mut rng)),
        Team::new("Harbor", "Gulls", fixture_roster("Gull", &mut rng)),
    )
}

fn fixture_roster(label: &str, rng: &mut ChaCha8Rng) -> Vec<Player> {
    let mut players = Vec::new();
    let mut number = 1_u8;
    for &(position, depth) in DEPTH_CHART {
        for _ in 0..depth {
            let mut player = Player::new(format!("{label} {number}"), number, position);
            player.speed = rng.gen_range(40..=95);
            player.strength = rng.gen_range(40..=95);
            player.agility = rng.gen_range(40..=95);
            player.awareness = rng.gen_range(40..=95);
            player.passing = rng.gen_range(20..=95);
            player.catching = rng.gen_range(20..=95);
            player.rushing = rng.gen_range(20..=95);
            player.blocking = rng.gen_range(20..=95);
            player.tackling = rng.gen_range(20..=95);
            player.coverage = rng.gen_range(20..=95);
            player.kicking = rng.gen_range(20..=95);
            player.fragility = rng.gen_range(20..=80);
            player.discipline = rng.gen_range(30..=90);
            players.push(player);
            number = number.saturating_add(1);
        }
    }
    players
}
