use rand::RngCore;

use crate::model::{Game, PlayerRef, Position, Possession, TacklerSet};
use crate::rng::Roll;

const MAX_TACKLERS: i32 = 3;

/// Outcome of the opening (or overtime) toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinToss {
    pub winner: Possession,
    /// The winner chose to defer, giving the other side the first possession.
    pub deferred: bool,
}

impl CoinToss {
    /// Team that receives the first kickoff.
    #[must_use]
    pub const fn receiver(self) -> Possession {
        if self.deferred {
            self.winner.opponent()
        } else {
            self.winner
        }
    }
}

/// Two draws: the toss, then the winner's defer decision.
pub fn coin_toss<R: RngCore>(rng: &mut R) -> CoinToss {
    let winner = if rng.roll() < 0.5 {
        Possession::Home
    } else {
        Possession::Away
    };
    CoinToss {
        winner,
        deferred: rng.roll() < 0.5,
    }
}

fn first_at(game: &Game, unit: &[PlayerRef], position: Position) -> Option<PlayerRef> {
    unit.iter()
        .copied()
        .find(|&player| game.player(player).is_some_and(|p| p.position == position))
}

/// Running back takes the handoff; the quarterback keeps it without one.
#[must_use]
pub fn ball_carrier(game: &Game, offense: &[PlayerRef]) -> Option<PlayerRef> {
    first_at(game, offense, Position::RB).or_else(|| first_at(game, offense, Position::QB))
}

/// Uniform pick among the eligible receivers on the field.
pub fn pass_target<R: RngCore>(
    game: &Game,
    offense: &[PlayerRef],
    rng: &mut R,
) -> Option<PlayerRef> {
    let receivers: Vec<PlayerRef> = offense
        .iter()
        .copied()
        .filter(|&player| {
            game.player(player)
                .is_some_and(|p| p.position.is_receiver())
        })
        .collect();
    rng.pick(receivers.len()).map(|index| receivers[index])
}

/// Fastest player at one of `positions` in the return unit.
#[must_use]
pub fn returner(game: &Game, unit: &[PlayerRef], positions: &[Position]) -> Option<PlayerRef> {
    unit.iter()
        .copied()
        .filter_map(|player| game.player(player).map(|p| (player, p)))
        .filter(|(_, p)| positions.contains(&p.position))
        .max_by_key(|(_, p)| p.speed)
        .map(|(player, _)| player)
}

/// Credit one to three of the defense's best tacklers with the stop.
pub fn tacklers<R: RngCore>(game: &Game, defense: &[PlayerRef], rng: &mut R) -> TacklerSet {
    let count = usize::try_from(rng.between(1, MAX_TACKLERS)).unwrap_or(1);
    let mut candidates: Vec<(PlayerRef, u16)> = defense
        .iter()
        .copied()
        .filter_map(|player| {
            game.player(player).map(|p| (player, u16::from(p.tackling) + u16::from(p.speed)))
        })
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates
        .into_iter()
        .take(count)
        .map(|(player, _)| player)
        .collect()
}
