use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster position tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    C,
    G,
    T,
    DE,
    DT,
    LB,
    OLB,
    CB,
    S,
    FS,
    K,
    P,
    LS,
    H,
}

impl Position {
    /// Interior and edge linemen who block on every snap.
    #[must_use]
    pub const fn is_offensive_line(self) -> bool {
        matches!(self, Self::C | Self::G | Self::T)
    }

    /// Linemen and linebackers who rush the passer and fill run lanes.
    #[must_use]
    pub const fn is_front_seven(self) -> bool {
        matches!(self, Self::DT | Self::DE | Self::LB | Self::OLB)
    }

    #[must_use]
    pub const fn is_defensive_back(self) -> bool {
        matches!(self, Self::CB | Self::S | Self::FS)
    }

    /// Eligible pass catchers.
    #[must_use]
    pub const fn is_receiver(self) -> bool {
        matches!(self, Self::WR | Self::TE | Self::RB)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::QB => "QB",
            Self::RB => "RB",
            Self::FB => "FB",
            Self::WR => "WR",
            Self::TE => "TE",
            Self::C => "C",
            Self::G => "G",
            Self::T => "T",
            Self::DE => "DE",
            Self::DT => "DT",
            Self::LB => "LB",
            Self::OLB => "OLB",
            Self::CB => "CB",
            Self::S => "S",
            Self::FS => "FS",
            Self::K => "K",
            Self::P => "P",
            Self::LS => "LS",
            Self::H => "H",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryKind {
    Ankle,
    Knee,
    Shoulder,
    Concussion,
    Hamstring,
}

impl fmt::Display for InjuryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ankle => "ankle",
            Self::Knee => "knee",
            Self::Shoulder => "shoulder",
            Self::Concussion => "concussion",
            Self::Hamstring => "hamstring",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjurySeverity {
    Minor,
    Moderate,
    GameEnding,
}

/// When an injured player becomes available again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recovery {
    /// Back after this many more plays.
    Plays(u8),
    /// Back once possession changes hands.
    NextPossession,
    OutForGame,
}

/// Runtime injury state; never part of roster input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    pub kind: InjuryKind,
    pub severity: InjurySeverity,
    pub recovery: Recovery,
}

/// A rostered player with 0-100 skill ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub number: u8,
    pub position: Position,
    #[serde(default = "Player::default_rating")]
    pub speed: u8,
    #[serde(default = "Player::default_rating")]
    pub strength: u8,
    #[serde(default = "Player::default_rating")]
    pub agility: u8,
    #[serde(default = "Player::default_rating")]
    pub awareness: u8,
    #[serde(default = "Player::default_rating")]
    pub passing: u8,
    #[serde(default = "Player::default_rating")]
    pub catching: u8,
    #[serde(default = "Player::default_rating")]
    pub rushing: u8,
    #[serde(default = "Player::default_rating")]
    pub blocking: u8,
    #[serde(default = "Player::default_rating")]
    pub tackling: u8,
    #[serde(default = "Player::default_rating")]
    pub coverage: u8,
    #[serde(default = "Player::default_rating")]
    pub kicking: u8,
    #[serde(default = "Player::default_health")]
    pub health: u8,
    #[serde(default = "Player::default_rating")]
    pub fragility: u8,
    #[serde(default = "Player::default_rating")]
    pub morale: u8,
    #[serde(default = "Player::default_rating")]
    pub discipline: u8,
    #[serde(default)]
    pub current_injury: Option<Injury>,
}

impl Player {
    const fn default_rating() -> u8 {
        50
    }

    const fn default_health() -> u8 {
        100
    }

    /// A league-average player at `position`.
    #[must_use]
    pub fn new(name: impl Into<String>, number: u8, position: Position) -> Self {
        let avg = Self::default_rating();
        Self {
            name: name.into(),
            number,
            position,
            speed: avg,
            strength: avg,
            agility: avg,
            awareness: avg,
            passing: avg,
            catching: avg,
            rushing: avg,
            blocking: avg,
            tackling: avg,
            coverage: avg,
            kicking: avg,
            health: Self::default_health(),
            fragility: avg,
            morale: avg,
            discipline: avg,
            current_injury: None,
        }
    }

    /// Healthy enough to be selected for the next snap.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.current_injury.is_none()
    }

    /// How securely the player carries the ball.
    #[must_use]
    pub fn ball_security(&self) -> f64 {
        (f64::from(self.strength) + f64::from(self.awareness)) / 2.0
    }

    /// Short label for narration, e.g. `#22 J. Doe`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("#{} {}", self.number, self.name)
    }
}
