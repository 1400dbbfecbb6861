use serde::{Deserialize, Serialize};
use std::fmt;

use super::play::{Down, Play, PlayerRef};
use super::player::Player;
use super::team::Team;
use crate::constants::{FIRST_DOWN_DISTANCE, QUARTER_SECONDS};
use crate::error::SimulationError;

/// Which side controls the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Possession {
    Home,
    Away,
}

impl Possession {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl fmt::Display for Possession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "Home",
            Self::Away => "Away",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuarterType {
    First,
    Second,
    Third,
    Fourth,
    Overtime,
    GameOver,
}

impl fmt::Display for QuarterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Overtime => "overtime",
            Self::GameOver => "final",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalfType {
    First,
    Second,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quarter {
    pub quarter_type: QuarterType,
    /// Whole seconds left on the quarter clock.
    pub time_remaining: u32,
}

impl Quarter {
    #[must_use]
    pub const fn new(quarter_type: QuarterType) -> Self {
        Self {
            quarter_type,
            time_remaining: QUARTER_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Half {
    pub half_type: HalfType,
    pub quarters: [Quarter; 2],
}

/// Address of one of the four quarter records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterRef {
    pub half: usize,
    pub quarter: usize,
}

/// Mutable root of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub home_team: Team,
    pub away_team: Team,
    pub possession: Possession,
    pub won_coin_toss: Possession,
    pub deferred_possession: bool,
    /// Offense's distance from its own goal line, 0-100.
    pub field_position: u8,
    pub down: Down,
    pub yards_to_go: u8,
    pub halves: [Half; 2],
    /// Index into `halves`.
    pub current_half: usize,
    pub current_quarter: QuarterRef,
    pub current_play: Option<Play>,
    pub plays: Vec<Play>,
    pub home_score: u16,
    pub away_score: u16,
    /// Kicking team of the next free kick, if one is owed.
    pub pending_kickoff: Option<Possession>,
    /// Team that received the opening kickoff.
    pub opening_receiver: Possession,
    pub seed: u64,
}

impl Game {
    /// Assemble a fresh game before the coin toss.
    #[must_use]
    pub fn new(home_team: Team, away_team: Team, seed: u64) -> Self {
        Self {
            home_team,
            away_team,
            possession: Possession::Home,
            won_coin_toss: Possession::Home,
            deferred_possession: false,
            field_position: 0,
            down: Down::None,
            yards_to_go: FIRST_DOWN_DISTANCE,
            halves: [
                Half {
                    half_type: HalfType::First,
                    quarters: [
                        Quarter::new(QuarterType::First),
                        Quarter::new(QuarterType::Second),
                    ],
                },
                Half {
                    half_type: HalfType::Second,
                    quarters: [
                        Quarter::new(QuarterType::Third),
                        Quarter::new(QuarterType::Fourth),
                    ],
                },
            ],
            current_half: 0,
            current_quarter: QuarterRef {
                half: 0,
                quarter: 0,
            },
            current_play: None,
            plays: Vec::new(),
            home_score: 0,
            away_score: 0,
            pending_kickoff: None,
            opening_receiver: Possession::Home,
            seed,
        }
    }

    #[must_use]
    pub const fn team(&self, side: Possession) -> &Team {
        match side {
            Possession::Home => &self.home_team,
            Possession::Away => &self.away_team,
        }
    }

    pub const fn team_mut(&mut self, side: Possession) -> &mut Team {
        match side {
            Possession::Home => &mut self.home_team,
            Possession::Away => &mut self.away_team,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerRef) -> Option<&Player> {
        self.team(player.side).player(player.index)
    }

    pub fn player_mut(&mut self, player: PlayerRef) -> Option<&mut Player> {
        self.team_mut(player.side).players.get_mut(player.index)
    }

    /// Resolve a set of player references, skipping stale slots.
    #[must_use]
    pub fn resolve(&self, players: &[PlayerRef]) -> Vec<&Player> {
        players
            .iter()
            .filter_map(|&player| self.player(player))
            .collect()
    }

    /// Narration label for a player reference.
    #[must_use]
    pub fn player_tag(&self, player: PlayerRef) -> String {
        self.player(player)
            .map_or_else(|| format!("{} player", player.side), Player::tag)
    }

    #[must_use]
    pub const fn half(&self) -> &Half {
        &self.halves[self.current_half]
    }

    #[must_use]
    pub const fn quarter(&self) -> &Quarter {
        &self.halves[self.current_quarter.half].quarters[self.current_quarter.quarter]
    }

    pub const fn quarter_mut(&mut self) -> &mut Quarter {
        &mut self.halves[self.current_quarter.half].quarters[self.current_quarter.quarter]
    }

    #[must_use]
    pub const fn score(&self, side: Possession) -> u16 {
        match side {
            Possession::Home => self.home_score,
            Possession::Away => self.away_score,
        }
    }

    pub const fn add_points(&mut self, side: Possession, points: u16) {
        match side {
            Possession::Home => self.home_score = self.home_score.saturating_add(points),
            Possession::Away => self.away_score = self.away_score.saturating_add(points),
        }
    }

    /// Points `side` trails by; zero or negative when level or ahead.
    #[must_use]
    pub fn deficit(&self, side: Possession) -> i32 {
        i32::from(self.score(side.opponent())) - i32::from(self.score(side))
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.home_score == self.away_score
    }

    /// Whether the final whistle has blown.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.quarter().quarter_type == QuarterType::GameOver
    }

    /// Yards between the line of scrimmage and the opponent's goal line.
    #[must_use]
    pub fn yards_to_goal(&self) -> i32 {
        100 - i32::from(self.field_position)
    }

    /// Hand the current play to `action` with the rest of the game mutable.
    ///
    /// The play is detached for the duration of the call so the action can
    /// read rosters and move the ball without aliasing.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NoActivePlay`] when no play is in progress.
    pub fn with_current_play<T>(
        &mut self,
        action: impl FnOnce(&mut Self, &mut Play) -> T,
    ) -> Result<T, SimulationError> {
        let mut play = self
            .current_play
            .take()
            .ok_or(SimulationError::NoActivePlay)?;
        let out = action(self, &mut play);
        self.current_play = Some(play);
        Ok(out)
    }

    /// Reset down and distance for a fresh possession at the current spot.
    pub fn first_and_ten(&mut self) {
        self.down = Down::First;
        let to_goal = u8::try_from(self.yards_to_goal().max(1)).unwrap_or(FIRST_DOWN_DISTANCE);
        self.yards_to_go = FIRST_DOWN_DISTANCE.min(to_goal);
    }

    /// Give the ball to the other side, mirroring the spot onto their end.
    pub fn turn_over(&mut self) {
        self.possession = self.possession.opponent();
        self.field_position = 100_u8.saturating_sub(self.field_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(
            Team::new("Home", "Side", Vec::new()),
            Team::new("Away", "Side", Vec::new()),
            1,
        )
    }

    #[test]
    fn new_game_starts_in_first_quarter() {
        let game = game();
        assert_eq!(game.quarter().quarter_type, QuarterType::First);
        assert_eq!(game.quarter().time_remaining, QUARTER_SECONDS);
        assert_eq!(game.half().half_type, HalfType::First);
        assert_eq!(game.halves[1].quarters[1].quarter_type, QuarterType::Fourth);
        assert!(!game.is_over());
    }

    #[test]
    fn turnover_mirrors_field_position() {
        let mut game = game();
        game.possession = Possession::Home;
        game.field_position = 70;
        game.turn_over();
        assert_eq!(game.possession, Possession::Away);
        assert_eq!(game.field_position, 30);
    }

    #[test]
    fn first_and_goal_inside_the_ten() {
        let mut game = game();
        game.field_position = 96;
        game.first_and_ten();
        assert_eq!(game.down, Down::First);
        assert_eq!(game.yards_to_go, 4);
    }

    #[test]
    fn scoring_and_deficit() {
        let mut game = game();
        game.add_points(Possession::Away, 7);
        assert_eq!(game.deficit(Possession::Home), 7);
        assert_eq!(game.deficit(Possession::Away), -7);
        assert!(!game.is_tied());
    }

    #[test]
    fn detached_play_is_restored() {
        let mut game = game();
        assert!(matches!(
            game.with_current_play(|_, _| ()),
            Err(SimulationError::NoActivePlay)
        ));
        game.current_play = Some(Play::new(
            1,
            crate::model::PlayType::Kickoff,
            Possession::Home,
            QuarterType::First,
            900,
            35,
        ));
        game.with_current_play(|game, play| {
            assert!(game.current_play.is_none());
            play.narrate("detached");
        })
        .expect("play present");
        assert_eq!(
            game.current_play.as_ref().map(|play| play.result.len()),
            Some(1)
        );
    }
}
