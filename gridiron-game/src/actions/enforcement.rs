use crate::constants::GOAL_LINE;
use crate::model::{
    Down, Game, PenaltyEnforcement, PenaltyRecord, PenaltyTiming, Play, PlayType, Possession,
};
use crate::numbers::{clamp_to_field, clamp_to_u8};

/// Ball, down and distance as they stood at the snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownState {
    pub possession: Possession,
    pub field_position: u8,
    pub down: Down,
    pub yards_to_go: u8,
}

impl DownState {
    #[must_use]
    pub const fn of(game: &Game) -> Self {
        Self {
            possession: game.possession,
            field_position: game.field_position,
            down: game.down,
            yards_to_go: game.yards_to_go,
        }
    }

    fn restore(self, game: &mut Game) {
        game.possession = self.possession;
        game.field_position = self.field_position;
        game.down = self.down;
        game.yards_to_go = self.yards_to_go;
    }
}

/// Put the ball back where it was snapped; a free kick is tried again.
fn replay(game: &mut Game, play: &mut Play, before: DownState) {
    before.restore(game);
    play.first_down = false;
    play.turnover_on_downs = false;
    if play.play_type == PlayType::Kickoff {
        game.pending_kickoff = Some(play.possession);
    }
}

/// Walk off a foul from the current spot, half the distance at most.
///
/// Returns the yards moved, negative when the offense loses ground.
fn walk_off(game: &mut Game, foul: &PenaltyRecord) -> i32 {
    let spot = i32::from(game.field_position);
    let yards = i32::from(foul.yards);
    let against_offense = foul.called_on == game.possession;
    let moved = if against_offense {
        -yards.min(spot / 2)
    } else {
        yards.min((GOAL_LINE - spot) / 2)
    };
    game.field_position = clamp_to_field(spot + moved);
    let to_goal = game.yards_to_goal().max(1);
    let to_go = i32::from(game.yards_to_go);
    if against_offense {
        game.yards_to_go = clamp_to_u8((to_go - moved).min(to_goal));
    } else if foul.automatic_first_down || moved >= to_go {
        game.first_and_ten();
    } else {
        game.yards_to_go = clamp_to_u8((to_go - moved).clamp(1, to_goal));
    }
    moved
}

/// The side fouled against turns the flag down when the play did better for it.
///
/// A failed fourth down already hands the defense the ball, so it never
/// accepts an offensive foul that would replay the down.
fn declined_by_victim(play: &Play, foul: &PenaltyRecord) -> bool {
    let gain = play.net_gain();
    let yards = i32::from(foul.yards);
    if foul.called_on == play.possession {
        play.turnover_on_downs || gain <= -yards
    } else {
        gain >= yards
    }
}

/// Apply every flag thrown on the play to down, distance and field position.
///
/// Runs after the down has been advanced, so `before` carries the state at
/// the snap for fouls enforced from the previous spot.
pub fn apply_penalties(game: &mut Game, play: &mut Play, before: DownState) {
    if play.penalties.is_empty() {
        return;
    }
    if play.scoring.is_some() || play.possession_change {
        for foul in play
            .penalties
            .iter_mut()
            .filter(|foul| foul.timing != PenaltyTiming::Before)
        {
            foul.enforcement = PenaltyEnforcement::Declined;
        }
    }
    let pending: Vec<usize> = play
        .penalties
        .iter()
        .enumerate()
        .filter(|(_, foul)| foul.enforcement == PenaltyEnforcement::Pending)
        .map(|(index, _)| index)
        .collect();
    if pending.is_empty() {
        play.narrate("Penalty declined");
        return;
    }

    let offense = play.possession;
    let on_offense = pending
        .iter()
        .any(|&index| play.penalties[index].called_on == offense);
    let on_defense = pending
        .iter()
        .any(|&index| play.penalties[index].called_on != offense);
    if on_offense && on_defense {
        for &index in &pending {
            play.penalties[index].enforcement = PenaltyEnforcement::Offset;
        }
        replay(game, play, before);
        play.narrate("Offsetting penalties; replay the down");
        return;
    }

    for index in pending {
        let foul = play.penalties[index].clone();
        let enforcement = match foul.timing {
            PenaltyTiming::During if declined_by_victim(play, &foul) => {
                PenaltyEnforcement::Declined
            }
            PenaltyTiming::Before | PenaltyTiming::During => {
                replay(game, play, before);
                let yards = if play.play_type == PlayType::Kickoff {
                    0
                } else {
                    walk_off(game, &foul)
                };
                PenaltyEnforcement::Enforced { yards }
            }
            PenaltyTiming::After => PenaltyEnforcement::Enforced {
                yards: walk_off(game, &foul),
            },
        };
        let verdict = match enforcement {
            PenaltyEnforcement::Enforced { yards } => format!("{} enforced, {yards} yards", foul.name),
            _ => format!("{} declined", foul.name),
        };
        log::debug!("play {}: {verdict}", play.number);
        play.narrate(verdict);
        play.penalties[index].enforcement = enforcement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuarterType;
    use crate::penalty::PenaltyName;
    use crate::test_support::game;

    fn foul(timing: PenaltyTiming, called_on: Possession, yards: u8) -> PenaltyRecord {
        PenaltyRecord {
            name: PenaltyName::OffensiveHolding,
            timing,
            odds: 0.02,
            away_odds: 0.5,
            called_on,
            yards,
            automatic_first_down: false,
            enforcement: PenaltyEnforcement::Pending,
        }
    }

    fn at_snap(game: &mut Game, spot: u8, down: Down, to_go: u8) -> DownState {
        game.possession = Possession::Home;
        game.field_position = spot;
        game.down = down;
        game.yards_to_go = to_go;
        DownState::of(game)
    }

    #[test]
    fn false_start_backs_the_offense_up_and_replays() {
        let mut game = game();
        let before = at_snap(&mut game, 30, Down::Second, 6);
        let mut play = Play::new(2, PlayType::Run, Possession::Home, QuarterType::First, 800, 30);
        play.penalties.push(foul(PenaltyTiming::Before, Possession::Home, 5));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(game.field_position, 25);
        assert_eq!(game.down, Down::Second);
        assert_eq!(game.yards_to_go, 11);
        assert_eq!(
            play.penalties[0].enforcement,
            PenaltyEnforcement::Enforced { yards: -5 }
        );
    }

    #[test]
    fn half_the_distance_near_own_goal() {
        let mut game = game();
        let before = at_snap(&mut game, 8, Down::First, 10);
        let mut play = Play::new(2, PlayType::Pass, Possession::Home, QuarterType::First, 800, 8);
        play.penalties.push(foul(PenaltyTiming::Before, Possession::Home, 10));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(game.field_position, 4);
    }

    #[test]
    fn defensive_foul_can_award_first_down() {
        let mut game = game();
        let before = at_snap(&mut game, 50, Down::Third, 4);
        let mut play = Play::new(2, PlayType::Pass, Possession::Home, QuarterType::First, 800, 50);
        play.set_ball(Possession::Home, 50);
        game.down = Down::Fourth;
        play.penalties.push(foul(PenaltyTiming::During, Possession::Away, 5));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(game.field_position, 55);
        assert_eq!(game.down, Down::First);
        assert_eq!(game.yards_to_go, 10);
    }

    #[test]
    fn big_gain_declines_defensive_foul() {
        let mut game = game();
        let before = at_snap(&mut game, 40, Down::First, 10);
        let mut play = Play::new(2, PlayType::Run, Possession::Home, QuarterType::First, 800, 40);
        play.set_ball(Possession::Home, 52);
        game.field_position = 52;
        play.penalties.push(foul(PenaltyTiming::During, Possession::Away, 5));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(play.penalties[0].enforcement, PenaltyEnforcement::Declined);
        assert_eq!(game.field_position, 52);
    }

    #[test]
    fn defense_declines_offensive_foul_after_failed_fourth_down() {
        let mut game = game();
        let before = at_snap(&mut game, 40, Down::Fourth, 5);
        let mut play = Play::new(2, PlayType::Run, Possession::Home, QuarterType::First, 800, 40);
        play.set_ball(Possession::Home, 42);
        play.turnover_on_downs = true;
        game.field_position = 42;
        game.turn_over();
        game.first_and_ten();
        play.penalties.push(foul(PenaltyTiming::During, Possession::Home, 10));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(play.penalties[0].enforcement, PenaltyEnforcement::Declined);
        assert!(play.turnover_on_downs);
        assert_eq!(game.possession, Possession::Away);
        assert_eq!(game.field_position, 58);
        assert_eq!(game.down, Down::First);
    }

    #[test]
    fn offense_accepts_defensive_foul_after_failed_fourth_down() {
        let mut game = game();
        let before = at_snap(&mut game, 40, Down::Fourth, 5);
        let mut play = Play::new(2, PlayType::Run, Possession::Home, QuarterType::First, 800, 40);
        play.set_ball(Possession::Home, 42);
        play.turnover_on_downs = true;
        game.field_position = 42;
        game.turn_over();
        game.first_and_ten();
        play.penalties.push(foul(PenaltyTiming::During, Possession::Away, 5));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(
            play.penalties[0].enforcement,
            PenaltyEnforcement::Enforced { yards: 5 }
        );
        assert!(!play.turnover_on_downs);
        assert_eq!(game.possession, Possession::Home);
        assert_eq!(game.field_position, 45);
        assert_eq!(game.down, Down::First);
    }

    #[test]
    fn fouls_on_both_sides_offset() {
        let mut game = game();
        let before = at_snap(&mut game, 40, Down::Second, 8);
        let mut play = Play::new(2, PlayType::Run, Possession::Home, QuarterType::First, 800, 40);
        play.set_ball(Possession::Home, 44);
        game.field_position = 44;
        game.down = Down::Third;
        play.penalties.push(foul(PenaltyTiming::During, Possession::Home, 10));
        play.penalties.push(foul(PenaltyTiming::After, Possession::Away, 15));
        apply_penalties(&mut game, &mut play, before);
        assert!(play
            .penalties
            .iter()
            .all(|p| p.enforcement == PenaltyEnforcement::Offset));
        assert_eq!(DownState::of(&game), before);
    }

    #[test]
    fn turnover_keeps_result_and_declines_live_ball_fouls() {
        let mut game = game();
        let before = at_snap(&mut game, 40, Down::Second, 8);
        let mut play = Play::new(2, PlayType::Pass, Possession::Home, QuarterType::First, 800, 40);
        play.set_ball(Possession::Away, 45);
        play.penalties.push(foul(PenaltyTiming::During, Possession::Home, 10));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(play.penalties[0].enforcement, PenaltyEnforcement::Declined);
    }

    #[test]
    fn kickoff_foul_rekicks() {
        let mut game = game();
        let before = at_snap(&mut game, 35, Down::None, 10);
        let mut play =
            Play::new(1, PlayType::Kickoff, Possession::Home, QuarterType::First, 900, 35);
        play.penalties.push(foul(PenaltyTiming::Before, Possession::Away, 5));
        apply_penalties(&mut game, &mut play, before);
        assert_eq!(game.pending_kickoff, Some(Possession::Home));
        assert_eq!(
            play.penalties[0].enforcement,
            PenaltyEnforcement::Enforced { yards: 0 }
        );
    }
}
