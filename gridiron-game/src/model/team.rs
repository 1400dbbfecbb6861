use serde::{Deserialize, Serialize};

use super::player::{Player, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u16,
    pub losses: u16,
    pub ties: u16,
}

/// A franchise and its ordered roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub city: String,
    pub name: String,
    #[serde(default)]
    pub record: TeamRecord,
    #[serde(default)]
    pub budget: u32,
    #[serde(default)]
    pub fan_support: u8,
    #[serde(default)]
    pub chemistry: u8,
    pub players: Vec<Player>,
}

impl Team {
    #[must_use]
    pub fn new(city: impl Into<String>, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            city: city.into(),
            name: name.into(),
            record: TeamRecord::default(),
            budget: 0,
            fan_support: 0,
            chemistry: 0,
            players,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }

    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Roster indices of healthy players at `position`, in depth-chart order.
    pub fn available_at(&self, position: Position) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(_, player)| player.position == position && player.is_available())
            .map(|(index, _)| index)
    }
}
