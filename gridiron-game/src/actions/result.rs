use crate::constants::GOAL_LINE;
use crate::flow::Trigger;
use crate::model::{Game, Play, PlayDetail, ScoringPlay};

/// Settle what the play produced and close its narration.
///
/// A good field goal scores for the kicking team, a ball carried to 100 is a
/// touchdown for whoever holds it, and a ball dead at 0 is a safety for the
/// other side. A play killed before the snap never scores.
pub fn finalize_result(game: &Game, play: &mut Play) -> Trigger {
    if play.has_pre_snap_foul() {
        return Trigger::PlayResult;
    }
    let spot = i32::from(play.end_field_position);
    let field_goal = matches!(&play.detail, PlayDetail::FieldGoal(detail) if detail.good);
    play.scoring = if field_goal {
        Some(ScoringPlay::FieldGoal(play.possession))
    } else if spot >= GOAL_LINE {
        Some(ScoringPlay::Touchdown(play.end_possession))
    } else if spot == 0 {
        Some(ScoringPlay::Safety(play.end_possession.opponent()))
    } else {
        None
    };

    let holder = game.team(play.end_possession).display_name();
    let line = match play.scoring {
        Some(ScoringPlay::Touchdown(team)) => {
            format!("TOUCHDOWN {}!", game.team(team).display_name())
        }
        Some(ScoringPlay::FieldGoal(team)) => {
            format!("Three points for {}", game.team(team).display_name())
        }
        Some(ScoringPlay::Safety(team)) => {
            format!("Safety! Two points for {}", game.team(team).display_name())
        }
        None if play.possession_change => {
            format!("{holder} take over at their own {spot}")
        }
        None => match &play.detail {
            PlayDetail::Run(_) | PlayDetail::Pass(_) => {
                format!("Net {} on the play; ball at the {spot}", play.net_gain())
            }
            _ => format!("Ball spotted at the {spot}"),
        },
    };
    play.narrate(line);
    Trigger::PlayResult
}
