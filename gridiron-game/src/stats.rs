//! Box score derived from a finished (or in-progress) game log.
//!
//! Nothing here feeds back into the simulation; the numbers are a pure fold
//! over `Game::plays` for reporting collaborators.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{
    Game, PenaltyEnforcement, Play, PlayDetail, PlayerRef, Position, Possession,
};

/// Team totals for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLine {
    pub points: u16,
    /// Offensive snaps (runs, passes, and scrambles).
    pub plays: u32,
    pub first_downs: u32,
    pub rushing_yards: i32,
    pub passing_yards: i32,
    /// Sacks recorded by this side's defense.
    pub sacks: u32,
    /// Interceptions thrown plus fumbles lost.
    pub turnovers: u32,
    pub penalties: u32,
    pub penalty_yards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub player: PlayerRef,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub carries: u32,
    pub rushing_yards: i32,
    pub completions: u32,
    pub attempts: u32,
    pub passing_yards: i32,
    pub receptions: u32,
    pub receiving_yards: i32,
    pub tackles: u32,
    pub interceptions: u32,
    pub fumbles_lost: u32,
    pub injuries: u32,
}

impl PlayerLine {
    fn blank(game: &Game, player: PlayerRef) -> Self {
        let (name, number, position) = game.player(player).map_or_else(
            || (format!("{} player", player.side), 0, Position::QB),
            |p| (p.name.clone(), p.number, p.position),
        );
        Self {
            player,
            name,
            number,
            position,
            carries: 0,
            rushing_yards: 0,
            completions: 0,
            attempts: 0,
            passing_yards: 0,
            receptions: 0,
            receiving_yards: 0,
            tackles: 0,
            interceptions: 0,
            fumbles_lost: 0,
            injuries: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScore {
    pub home: TeamLine,
    pub away: TeamLine,
    /// Players with at least one recorded stat, home side first, roster order.
    pub players: Vec<PlayerLine>,
}

impl BoxScore {
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let mut tally = Tally::new(game);
        for play in &game.plays {
            tally.play(play);
        }
        tally.finish()
    }

    #[must_use]
    pub const fn team(&self, side: Possession) -> &TeamLine {
        match side {
            Possession::Home => &self.home,
            Possession::Away => &self.away,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerRef) -> Option<&PlayerLine> {
        self.players.iter().find(|line| line.player == player)
    }
}

struct Tally<'g> {
    game: &'g Game,
    home: TeamLine,
    away: TeamLine,
    players: HashMap<PlayerRef, PlayerLine>,
}

impl<'g> Tally<'g> {
    fn new(game: &'g Game) -> Self {
        Self {
            game,
            home: TeamLine {
                points: game.home_score,
                ..TeamLine::default()
            },
            away: TeamLine {
                points: game.away_score,
                ..TeamLine::default()
            },
            players: HashMap::new(),
        }
    }

    const fn team(&mut self, side: Possession) -> &mut TeamLine {
        match side {
            Possession::Home => &mut self.home,
            Possession::Away => &mut self.away,
        }
    }

    fn line(&mut self, player: PlayerRef) -> &mut PlayerLine {
        let game = self.game;
        self.players
            .entry(player)
            .or_insert_with(|| PlayerLine::blank(game, player))
    }

    fn play(&mut self, play: &Play) {
        for foul in &play.penalties {
            if let PenaltyEnforcement::Enforced { yards } = foul.enforcement {
                let team = self.team(foul.called_on);
                team.penalties += 1;
                team.penalty_yards += yards.unsigned_abs();
            }
        }
        for injury in &play.injuries {
            self.line(injury.player).injuries += 1;
        }
        if play.has_pre_snap_foul() {
            return;
        }

        let offense = play.possession;
        if play.first_down {
            self.team(offense).first_downs += 1;
        }
        for fumble in play.fumbles.iter().filter(|fumble| fumble.lost) {
            self.team(fumble.fumbler.side).turnovers += 1;
            self.line(fumble.fumbler).fumbles_lost += 1;
        }
        for &tackler in &play.tacklers {
            self.line(tackler).tackles += 1;
        }

        match &play.detail {
            PlayDetail::Run(detail) => {
                let team = self.team(offense);
                team.plays += 1;
                team.rushing_yards += detail.yards;
                if let Some(carrier) = detail.carrier {
                    let line = self.line(carrier);
                    line.carries += 1;
                    line.rushing_yards += detail.yards;
                }
            }
            PlayDetail::Pass(detail) => {
                self.team(offense).plays += 1;
                if detail.sacked {
                    self.team(offense.opponent()).sacks += 1;
                    return;
                }
                let thrown = play.good_snap && detail.receiver.is_some();
                if let Some(passer) = detail.passer.filter(|_| thrown) {
                    let line = self.line(passer);
                    line.attempts += 1;
                    if detail.complete {
                        line.completions += 1;
                        line.passing_yards += detail.yards;
                    }
                }
                if detail.complete {
                    self.team(offense).passing_yards += detail.yards;
                    if let Some(receiver) = detail.receiver {
                        let line = self.line(receiver);
                        line.receptions += 1;
                        line.receiving_yards += detail.yards;
                    }
                }
                if detail.intercepted {
                    self.team(offense).turnovers += 1;
                    if let Some(interceptor) = detail.interceptor {
                        self.line(interceptor).interceptions += 1;
                    }
                }
            }
            PlayDetail::Kickoff(_) | PlayDetail::Punt(_) | PlayDetail::FieldGoal(_) => {}
        }
    }

    fn finish(self) -> BoxScore {
        let mut players: Vec<PlayerLine> = self.players.into_values().collect();
        players.sort_by_key(|line| (line.player.side, line.player.index));
        BoxScore {
            home: self.home,
            away: self.away,
            players,
        }
    }
}
