use rand::RngCore;

use crate::config::InjuriesConfig;
use crate::constants::{MINOR_INJURY_MAX_PLAYS, MINOR_INJURY_MIN_PLAYS};
use crate::model::{Injury, InjuryKind, InjurySeverity, PlayType, Position, Recovery};
use crate::rng::Roll;

const GANG_TACKLE: usize = 3;
const KINDS: [InjuryKind; 5] = [
    InjuryKind::Ankle,
    InjuryKind::Knee,
    InjuryKind::Shoulder,
    InjuryKind::Concussion,
    InjuryKind::Hamstring,
];

/// Contact a single player took on the play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjuryExposure {
    pub play_type: PlayType,
    pub position: Position,
    pub fragility: u8,
    pub tacklers: usize,
    pub big_play: bool,
    pub sack: bool,
}

#[must_use]
pub fn injury_chance(cfg: &InjuriesConfig, exposure: &InjuryExposure) -> f64 {
    let base = match exposure.play_type {
        PlayType::Run => cfg.run_base,
        PlayType::Pass if exposure.sack => cfg.sack_base,
        PlayType::Pass => cfg.pass_base,
        PlayType::Kickoff => cfg.kickoff_base,
        PlayType::Punt => cfg.punt_base,
        PlayType::FieldGoal => cfg.field_goal_base,
    };
    let mut chance =
        base * (cfg.fragility_floor + f64::from(exposure.fragility) / cfg.fragility_divisor);
    if exposure.tacklers >= GANG_TACKLE {
        chance *= cfg.gang_tackle_multiplier;
    }
    if exposure.big_play {
        chance *= cfg.big_play_multiplier;
    }
    chance *= match exposure.position {
        Position::RB | Position::LB | Position::OLB => cfg.high_contact_multiplier,
        Position::QB => cfg.quarterback_multiplier,
        Position::K | Position::P => cfg.specialist_multiplier,
        _ => 1.0,
    };
    if exposure.sack && exposure.position == Position::QB {
        chance *= cfg.qb_sack_multiplier;
    }
    chance.clamp(0.0, 1.0)
}

pub fn injury_occurred<R: RngCore>(
    cfg: &InjuriesConfig,
    exposure: &InjuryExposure,
    rng: &mut R,
) -> bool {
    rng.roll() < injury_chance(cfg, exposure)
}

/// Weights over `KINDS` for each position group.
const fn kind_weights(position: Position) -> [u8; 5] {
    match position {
        Position::QB => [15, 15, 30, 25, 15],
        Position::RB | Position::FB => [30, 25, 15, 15, 15],
        Position::WR | Position::TE | Position::CB | Position::S | Position::FS => {
            [25, 20, 10, 15, 30]
        }
        Position::C | Position::G | Position::T => [25, 30, 25, 10, 10],
        Position::DE | Position::DT | Position::LB | Position::OLB => [20, 25, 25, 20, 10],
        Position::K | Position::P | Position::LS | Position::H => [30, 20, 10, 10, 30],
    }
}

/// Decide what kind of injury it is and how long the player sits.
///
/// Draw order: kind, severity, then (minor only) plays missed.
pub fn injury_effect<R: RngCore>(cfg: &InjuriesConfig, position: Position, rng: &mut R) -> Injury {
    let weights = kind_weights(position);
    let total: u32 = weights.iter().map(|&weight| u32::from(weight)).sum();
    let mut remaining = rng.roll() * f64::from(total);
    let mut kind = KINDS[KINDS.len() - 1];
    for (candidate, weight) in KINDS.iter().zip(weights) {
        let weight = f64::from(weight);
        if remaining < weight {
            kind = *candidate;
            break;
        }
        remaining -= weight;
    }

    let severity_roll = rng.roll();
    let (severity, recovery) = if severity_roll < cfg.minor_probability {
        let plays = rng.between(MINOR_INJURY_MIN_PLAYS, MINOR_INJURY_MAX_PLAYS);
        (
            InjurySeverity::Minor,
            Recovery::Plays(u8::try_from(plays).unwrap_or(1)),
        )
    } else if severity_roll < cfg.minor_probability + cfg.moderate_probability {
        (InjurySeverity::Moderate, Recovery::NextPossession)
    } else {
        (InjurySeverity::GameEnding, Recovery::OutForGame)
    };
    Injury {
        kind,
        severity,
        recovery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    fn exposure(position: Position) -> InjuryExposure {
        InjuryExposure {
            play_type: PlayType::Run,
            position,
            fragility: 50,
            tacklers: 1,
            big_play: false,
            sack: false,
        }
    }

    #[test]
    fn chance_applies_multipliers() {
        let cfg = InjuriesConfig::default();
        let base = injury_chance(&cfg, &exposure(Position::WR));
        assert!((base - 0.03).abs() < 1e-9);
        let back = injury_chance(&cfg, &exposure(Position::RB));
        assert!((back - 0.036).abs() < 1e-9);
        let sacked = injury_chance(
            &cfg,
            &InjuryExposure {
                play_type: PlayType::Pass,
                sack: true,
                ..exposure(Position::QB)
            },
        );
        assert!((sacked - 0.06 * 0.7 * 2.0).abs() < 1e-9);
        let kicker = injury_chance(
            &cfg,
            &InjuryExposure {
                play_type: PlayType::FieldGoal,
                ..exposure(Position::K)
            },
        );
        assert!(kicker < 0.001);
    }

    #[test]
    fn severity_distribution_matches_config() {
        let cfg = InjuriesConfig::default();
        let mut rng = GameRng::from_seed(99);
        let mut counts = [0_u32; 3];
        for _ in 0..10_000 {
            let injury = injury_effect(&cfg, Position::LB, &mut rng);
            match (injury.severity, injury.recovery) {
                (InjurySeverity::Minor, Recovery::Plays(plays)) => {
                    assert!((1..=2).contains(&plays));
                    counts[0] += 1;
                }
                (InjurySeverity::Moderate, Recovery::NextPossession) => counts[1] += 1,
                (InjurySeverity::GameEnding, Recovery::OutForGame) => counts[2] += 1,
                other => panic!("mismatched severity and recovery: {other:?}"),
            }
        }
        assert!((5_700..=6_300).contains(&counts[0]), "{counts:?}");
        assert!((2_700..=3_300).contains(&counts[1]), "{counts:?}");
        assert!((800..=1_200).contains(&counts[2]), "{counts:?}");
    }
}
