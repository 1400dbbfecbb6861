use crate::constants::MAX_PLAYERS_ON_FIELD;
use crate::model::{Game, PlayType, PlayerRef, Position, Possession};

/// A personnel grouping: required slots, then positions used to fill out eleven.
struct Package {
    core: &'static [(Position, usize)],
    fill: &'static [Position],
}

const RUN_OFFENSE: Package = Package {
    core: &[
        (Position::QB, 1),
        (Position::RB, 1),
        (Position::FB, 1),
        (Position::C, 1),
        (Position::G, 2),
        (Position::T, 2),
        (Position::WR, 2),
        (Position::TE, 1),
    ],
    fill: &[Position::TE, Position::WR, Position::RB],
};

const RUN_DEFENSE: Package = Package {
    core: &[(Position::DE, 2), (Position::DT, 2), (Position::LB, 3)],
    fill: &[
        Position::CB,
        Position::S,
        Position::FS,
        Position::CB,
        Position::OLB,
        Position::LB,
    ],
};

const PASS_OFFENSE: Package = Package {
    core: &[
        (Position::QB, 1),
        (Position::RB, 1),
        (Position::FB, 1),
        (Position::C, 1),
        (Position::G, 2),
        (Position::T, 2),
        (Position::WR, 3),
    ],
    fill: &[Position::TE, Position::WR, Position::RB],
};

const PASS_DEFENSE: Package = Package {
    core: &[(Position::DE, 1), (Position::DT, 2), (Position::LB, 4)],
    fill: &[
        Position::CB,
        Position::S,
        Position::FS,
        Position::CB,
        Position::OLB,
        Position::DE,
    ],
};

const KICKOFF_COVERAGE: Package = Package {
    core: &[(Position::K, 1)],
    fill: &[
        Position::LB,
        Position::OLB,
        Position::S,
        Position::CB,
        Position::FS,
        Position::WR,
        Position::RB,
        Position::TE,
    ],
};

const KICKOFF_RETURN: Package = Package {
    core: &[(Position::WR, 2), (Position::RB, 1)],
    fill: &[
        Position::TE,
        Position::FB,
        Position::LB,
        Position::CB,
        Position::S,
        Position::FS,
        Position::G,
        Position::T,
    ],
};

const PUNT_COVERAGE: Package = Package {
    core: &[
        (Position::P, 1),
        (Position::LS, 1),
        (Position::G, 2),
        (Position::T, 2),
    ],
    fill: &[
        Position::TE,
        Position::FB,
        Position::LB,
        Position::S,
        Position::CB,
        Position::WR,
    ],
};

const PUNT_RETURN: Package = Package {
    core: &[(Position::WR, 1), (Position::CB, 2)],
    fill: &[
        Position::LB,
        Position::DE,
        Position::DT,
        Position::S,
        Position::FS,
        Position::OLB,
        Position::RB,
    ],
};

const FIELD_GOAL_UNIT: Package = Package {
    core: &[
        (Position::K, 1),
        (Position::H, 1),
        (Position::LS, 1),
        (Position::G, 2),
        (Position::T, 2),
        (Position::TE, 2),
    ],
    fill: &[Position::C, Position::FB, Position::LB, Position::DE],
};

const FIELD_GOAL_BLOCK: Package = Package {
    core: &[(Position::DE, 2), (Position::DT, 2), (Position::LB, 3)],
    fill: &[Position::OLB, Position::CB, Position::S, Position::FS],
};

const fn packages(play_type: PlayType) -> (&'static Package, &'static Package) {
    match play_type {
        PlayType::Run => (&RUN_OFFENSE, &RUN_DEFENSE),
        PlayType::Pass => (&PASS_OFFENSE, &PASS_DEFENSE),
        PlayType::Kickoff => (&KICKOFF_COVERAGE, &KICKOFF_RETURN),
        PlayType::Punt => (&PUNT_COVERAGE, &PUNT_RETURN),
        PlayType::FieldGoal => (&FIELD_GOAL_UNIT, &FIELD_GOAL_BLOCK),
    }
}

fn select(game: &Game, side: Possession, package: &Package) -> Vec<PlayerRef> {
    let team = game.team(side);
    let mut chosen: Vec<usize> = Vec::with_capacity(MAX_PLAYERS_ON_FIELD);
    for &(position, count) in package.core {
        let picks: Vec<usize> = team
            .available_at(position)
            .filter(|index| !chosen.contains(index))
            .take(count)
            .collect();
        chosen.extend(picks);
    }
    for &position in package.fill {
        if chosen.len() >= MAX_PLAYERS_ON_FIELD {
            break;
        }
        if let Some(index) = team
            .available_at(position)
            .find(|index| !chosen.contains(index))
        {
            chosen.push(index);
        }
    }
    chosen.truncate(MAX_PLAYERS_ON_FIELD);
    chosen
        .into_iter()
        .map(|index| PlayerRef::new(side, index))
        .collect()
}

/// Healthy units for both sides: `(offense, defense)` relative to `offense`.
#[must_use]
pub fn personnel(
    game: &Game,
    play_type: PlayType,
    offense: Possession,
) -> (Vec<PlayerRef>, Vec<PlayerRef>) {
    let (offense_package, defense_package) = packages(play_type);
    (
        select(game, offense, offense_package),
        select(game, offense.opponent(), defense_package),
    )
}
