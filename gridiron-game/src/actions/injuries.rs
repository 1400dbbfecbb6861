use rand::RngCore;

use super::Rules;
use crate::constants::{
    BIG_PLAY_YARDS, HEALTH_LOSS_GAME_ENDING, HEALTH_LOSS_MINOR, HEALTH_LOSS_MODERATE,
};
use crate::model::{Game, InjuryRecord, InjurySeverity, Play, PlayDetail, Recovery};
use crate::skills::{InjuryExposure, injury_effect, injury_occurred};

/// Tick recovery clocks on every rostered player.
fn heal(game: &mut Game, possession_changed: bool) {
    let players = game
        .home_team
        .players
        .iter_mut()
        .chain(game.away_team.players.iter_mut());
    for player in players {
        let Some(injury) = player.current_injury.as_mut() else {
            continue;
        };
        let healed = match &mut injury.recovery {
            Recovery::Plays(remaining) if *remaining <= 1 => true,
            Recovery::Plays(remaining) => {
                *remaining -= 1;
                false
            }
            Recovery::NextPossession => possession_changed,
            Recovery::OutForGame => false,
        };
        if healed {
            log::debug!("{} returns from injury", player.tag());
            player.current_injury = None;
        }
    }
}

const fn health_loss(severity: InjurySeverity) -> u8 {
    match severity {
        InjurySeverity::Minor => HEALTH_LOSS_MINOR,
        InjurySeverity::Moderate => HEALTH_LOSS_MODERATE,
        InjurySeverity::GameEnding => HEALTH_LOSS_GAME_ENDING,
    }
}

/// Heal the walking wounded, then roll for the ball carrier and each tackler.
///
/// Each participant takes one exposure draw; an injury adds the kind,
/// severity and recovery draws.
pub fn injury_check<R: RngCore>(game: &mut Game, play: &mut Play, rules: Rules<'_>, rng: &mut R) {
    heal(game, play.possession_change);
    if play.has_pre_snap_foul() {
        return;
    }
    let cfg = &rules.config.injuries;
    let sack = matches!(&play.detail, PlayDetail::Pass(detail) if detail.sacked);
    let big_play = play.yards_gained.abs() >= BIG_PLAY_YARDS;
    let participants: Vec<_> = play
        .ball_carrier
        .into_iter()
        .chain(play.tacklers.iter().copied())
        .collect();
    for participant in participants {
        let Some(player) = game.player(participant) else {
            continue;
        };
        if player.current_injury.is_some() {
            continue;
        }
        let exposure = InjuryExposure {
            play_type: play.play_type,
            position: player.position,
            fragility: player.fragility,
            tacklers: play.tacklers.len(),
            big_play,
            sack,
        };
        if !injury_occurred(cfg, &exposure, rng) {
            continue;
        }
        let injury = injury_effect(cfg, exposure.position, rng);
        let Some(player) = game.player_mut(participant) else {
            continue;
        };
        player.health = player.health.saturating_sub(health_loss(injury.severity));
        player.current_injury = Some(injury);
        let line = format!(
            "{} is hurt ({} {}, {:?})",
            player.tag(),
            injury.kind,
            exposure.position,
            injury.severity
        );
        log::debug!("play {}: {line}", play.number);
        play.narrate(line);
        play.injuries.push(InjuryRecord {
            player: participant,
            injury,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::model::{
        Injury, InjuryKind, PlayType, PlayerRef, Possession, QuarterType, TacklerSet,
    };
    use crate::rng::GameRng;
    use crate::test_support::{game, quiet_rules};

    #[test]
    fn minor_injuries_heal_as_plays_pass() {
        let mut game = game();
        game.home_team.players[2].current_injury = Some(Injury {
            kind: InjuryKind::Ankle,
            severity: InjurySeverity::Minor,
            recovery: Recovery::Plays(2),
        });
        game.away_team.players[20].current_injury = Some(Injury {
            kind: InjuryKind::Knee,
            severity: InjurySeverity::Moderate,
            recovery: Recovery::NextPossession,
        });
        heal(&mut game, false);
        assert!(game.home_team.players[2].current_injury.is_some());
        assert!(game.away_team.players[20].current_injury.is_some());
        heal(&mut game, true);
        assert!(game.home_team.players[2].current_injury.is_none());
        assert!(game.away_team.players[20].current_injury.is_none());
    }

    #[test]
    fn certain_injury_hits_every_participant() {
        let mut config = SimulationConfig::default();
        config.injuries.run_base = 10.0;
        let mut game = game();
        let mut play = Play::new(1, PlayType::Run, Possession::Home, QuarterType::First, 900, 30);
        play.ball_carrier = Some(PlayerRef::new(Possession::Home, 2));
        play.tacklers = TacklerSet::from_slice(&[
            PlayerRef::new(Possession::Away, 20),
            PlayerRef::new(Possession::Away, 21),
        ]);
        let mut rng = GameRng::from_seed(77);
        injury_check(&mut game, &mut play, quiet_rules(&config), &mut rng);
        assert_eq!(play.injuries.len(), 3);
        let back = &game.home_team.players[2];
        assert!(back.current_injury.is_some());
        assert!(back.health < 100);
    }
}
