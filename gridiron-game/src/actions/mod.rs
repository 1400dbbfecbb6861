//! Play and bookend actions: everything that mutates a game or a play.
//!
//! Pre-play builds the play, one action per play type resolves it, and the
//! post-play checks fold it back into the game. Actions borrow the single
//! game stream and never keep references past their own call.
use crate::config::SimulationConfig;
use crate::model::{Game, Play, PlayerRef, Position};
use crate::penalty::PenaltyCatalog;

mod clock;
mod enforcement;
mod injuries;
mod plays;
mod post_play;
mod pre_play;
mod result;
mod scoring;
mod substitution;
mod turnovers;

pub use clock::{half_expire_check, halftime, quarter_expire_check};
pub use enforcement::{DownState, apply_penalties};
pub use injuries::injury_check;
pub use plays::execute_play;
pub use post_play::{advance_down, post_play};
pub use pre_play::{choose_play_type, coin_toss, pre_play};
pub use result::finalize_result;
pub use scoring::score_check;
pub use substitution::personnel;
pub use turnovers::{blocked_kick, fumble_return, interception_return};

/// Read-only tables every action consults.
#[derive(Debug, Clone, Copy)]
pub struct Rules<'a> {
    pub config: &'a SimulationConfig,
    pub penalties: &'a PenaltyCatalog,
}

impl<'a> Rules<'a> {
    #[must_use]
    pub const fn new(config: &'a SimulationConfig, penalties: &'a PenaltyCatalog) -> Self {
        Self { config, penalties }
    }
}

/// First player at `position` in a unit.
fn first_at(game: &Game, unit: &[PlayerRef], position: Position) -> Option<PlayerRef> {
    unit.iter()
        .copied()
        .find(|&player| game.player(player).is_some_and(|p| p.position == position))
}

/// The unit `side` put on the field for this play.
fn unit_of(play: &Play, side: crate::model::Possession) -> &[PlayerRef] {
    if side == play.possession {
        &play.offense_on_field
    } else {
        &play.defense_on_field
    }
}

/// Average awareness of a unit, used for loose-ball scrambles.
fn awareness(game: &Game, unit: &[PlayerRef]) -> f64 {
    let players = game.resolve(unit);
    if players.is_empty() {
        return crate::constants::DEFAULT_RATING;
    }
    let total: f64 = players.iter().map(|p| f64::from(p.awareness)).sum();
    total / crate::numbers::usize_to_f64(players.len())
}
