use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::game::{Possession, QuarterType};
use super::player::Injury;
use crate::penalty::PenaltyName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    Kickoff,
    Punt,
    FieldGoal,
    Run,
    Pass,
}

impl PlayType {
    /// Run and pass plays; the offense keeps the ball unless something goes wrong.
    #[must_use]
    pub const fn is_scrimmage(self) -> bool {
        matches!(self, Self::Run | Self::Pass)
    }

    #[must_use]
    pub const fn is_kick(self) -> bool {
        matches!(self, Self::Kickoff | Self::Punt | Self::FieldGoal)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kickoff => "kickoff",
            Self::Punt => "punt",
            Self::FieldGoal => "field goal",
            Self::Run => "run",
            Self::Pass => "pass",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Down {
    /// Free kicks and conversion tries.
    None,
    First,
    Second,
    Third,
    Fourth,
}

impl Down {
    /// The following down, or `None` once fourth down is used up.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::First),
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => Some(Self::Fourth),
            Self::Fourth => None,
        }
    }
}

impl fmt::Display for Down {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "-",
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
            Self::Fourth => "4th",
        })
    }
}

/// A roster slot on one side of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    pub side: Possession,
    pub index: usize,
}

impl PlayerRef {
    #[must_use]
    pub const fn new(side: Possession, index: usize) -> Self {
        Self { side, index }
    }
}

/// Up to three tacklers are credited on a play.
pub type TacklerSet = SmallVec<[PlayerRef; 3]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyTiming {
    Before,
    During,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyEnforcement {
    Pending,
    /// Yards applied to the offense's field position, negative for losses.
    Enforced { yards: i32 },
    Offset,
    Declined,
}

/// A flag thrown on a specific play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRecord {
    pub name: PenaltyName,
    pub timing: PenaltyTiming,
    pub odds: f64,
    pub away_odds: f64,
    pub called_on: Possession,
    pub yards: u8,
    pub automatic_first_down: bool,
    pub enforcement: PenaltyEnforcement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FumbleContext {
    Normal,
    Return,
    Sack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FumbleRecord {
    pub fumbler: PlayerRef,
    pub context: FumbleContext,
    pub recovered_by: Possession,
    pub recoverer: Option<PlayerRef>,
    pub out_of_bounds: bool,
    pub lost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    pub player: PlayerRef,
    pub injury: Injury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    Touchdown,
    FieldGoal,
    Safety,
    ExtraPoint,
    TwoPoint,
}

/// Points credited to a team on a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub team: Possession,
    pub kind: ScoreKind,
    pub points: u16,
}

/// The scoring outcome a play action produced, tagged with the scoring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPlay {
    Touchdown(Possession),
    FieldGoal(Possession),
    Safety(Possession),
}

impl ScoringPlay {
    #[must_use]
    pub const fn team(self) -> Possession {
        match self {
            Self::Touchdown(team) | Self::FieldGoal(team) | Self::Safety(team) => team,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickoffDetail {
    pub kicker: Option<PlayerRef>,
    pub returner: Option<PlayerRef>,
    pub onside: bool,
    pub onside_recovered: bool,
    /// Yards in the air from the kickoff spot; zero for onside tries.
    pub distance: i32,
    pub out_of_bounds: bool,
    pub fair_catch: bool,
    pub muffed: bool,
    pub return_yards: i32,
    pub touchback: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuntDetail {
    pub punter: Option<PlayerRef>,
    pub returner: Option<PlayerRef>,
    pub distance: i32,
    /// Hang time in tenths of a second.
    pub hang_tenths: u32,
    pub out_of_bounds: bool,
    pub downed: bool,
    pub fair_catch: bool,
    pub muffed: bool,
    pub return_yards: i32,
    pub blocked: bool,
    pub touchback: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGoalDetail {
    pub kicker: Option<PlayerRef>,
    pub distance: u32,
    pub good: bool,
    pub blocked: bool,
    /// Defender who scooped up a blocked try and ran with it.
    pub returner: Option<PlayerRef>,
    pub return_yards: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDetail {
    pub carrier: Option<PlayerRef>,
    pub yards: i32,
    pub broke_tackle: bool,
    pub breakaway: bool,
    pub scramble: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassDetail {
    pub passer: Option<PlayerRef>,
    pub receiver: Option<PlayerRef>,
    pub pressured: bool,
    pub sacked: bool,
    pub complete: bool,
    pub intercepted: bool,
    pub interceptor: Option<PlayerRef>,
    pub yards: i32,
    pub deep_ball: bool,
    pub return_yards: i32,
}

/// Per-type facts recorded by the play actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayDetail {
    Kickoff(KickoffDetail),
    Punt(PuntDetail),
    FieldGoal(FieldGoalDetail),
    Run(RunDetail),
    Pass(PassDetail),
}

impl PlayDetail {
    #[must_use]
    pub fn for_type(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Kickoff => Self::Kickoff(KickoffDetail::default()),
            PlayType::Punt => Self::Punt(PuntDetail::default()),
            PlayType::FieldGoal => Self::FieldGoal(FieldGoalDetail::default()),
            PlayType::Run => Self::Run(RunDetail::default()),
            PlayType::Pass => Self::Pass(PassDetail::default()),
        }
    }
}

/// One down or kick, created by pre-play and frozen into the log by post-play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    /// 1-based position in the game log.
    pub number: u32,
    pub play_type: PlayType,
    pub down: Down,
    pub yards_to_go: u8,
    pub quarter: QuarterType,
    /// Quarter clock at the snap, in seconds.
    pub start_time: u32,
    pub elapsed_time: f64,
    /// Whole seconds taken off the quarter clock.
    pub clock_seconds: u32,
    /// Team snapping (or kicking) the ball.
    pub possession: Possession,
    pub possession_change: bool,
    /// Team holding the ball when the play is dead.
    pub end_possession: Possession,
    pub good_snap: bool,
    /// Line of scrimmage, from the snapping team's goal line.
    pub start_field_position: u8,
    /// Dead-ball spot, from `end_possession`'s goal line.
    pub end_field_position: u8,
    /// Net yards for the snapping team, before penalties.
    pub yards_gained: i32,
    pub detail: PlayDetail,
    pub result: Vec<String>,
    pub penalties: Vec<PenaltyRecord>,
    pub fumbles: Vec<FumbleRecord>,
    pub injuries: Vec<InjuryRecord>,
    pub scoring: Option<ScoringPlay>,
    pub scores: Vec<ScoreEvent>,
    pub first_down: bool,
    pub turnover_on_downs: bool,
    pub quarter_expired: bool,
    pub half_expired: bool,
    pub game_expired: bool,
    pub offense_on_field: Vec<PlayerRef>,
    pub defense_on_field: Vec<PlayerRef>,
    pub ball_carrier: Option<PlayerRef>,
    pub fumble_context: FumbleContext,
    pub tacklers: TacklerSet,
}

impl Play {
    #[must_use]
    pub fn new(
        number: u32,
        play_type: PlayType,
        possession: Possession,
        quarter: QuarterType,
        start_time: u32,
        field_position: u8,
    ) -> Self {
        Self {
            number,
            play_type,
            down: Down::None,
            yards_to_go: 0,
            quarter,
            start_time,
            elapsed_time: 0.0,
            clock_seconds: 0,
            possession,
            possession_change: false,
            end_possession: possession,
            good_snap: true,
            start_field_position: field_position,
            end_field_position: field_position,
            yards_gained: 0,
            detail: PlayDetail::for_type(play_type),
            result: Vec::new(),
            penalties: Vec::new(),
            fumbles: Vec::new(),
            injuries: Vec::new(),
            scoring: None,
            scores: Vec::new(),
            first_down: false,
            turnover_on_downs: false,
            quarter_expired: false,
            half_expired: false,
            game_expired: false,
            offense_on_field: Vec::new(),
            defense_on_field: Vec::new(),
            ball_carrier: None,
            fumble_context: FumbleContext::Normal,
            tacklers: TacklerSet::new(),
        }
    }

    /// Append a line to the play-by-play narration.
    pub fn narrate(&mut self, line: impl Into<String>) {
        self.result.push(line.into());
    }

    /// A pre-snap foul kills the play before the ball is live.
    #[must_use]
    pub fn has_pre_snap_foul(&self) -> bool {
        self.penalties
            .iter()
            .any(|penalty| penalty.timing == PenaltyTiming::Before)
    }

    #[must_use]
    pub fn points(&self, team: Possession) -> u16 {
        self.scores
            .iter()
            .filter(|event| event.team == team)
            .map(|event| event.points)
            .sum()
    }

    /// Defense that lined up against `possession` on this snap.
    #[must_use]
    pub const fn defense(&self) -> Possession {
        self.possession.opponent()
    }

    /// Place the dead ball with `team`, `spot` yards from its own goal line.
    pub fn set_ball(&mut self, team: Possession, spot: i32) {
        self.end_possession = team;
        self.end_field_position = crate::numbers::clamp_to_field(spot);
        self.possession_change = team != self.possession;
    }

    /// Net yards from the line of scrimmage while the snapping team keeps the ball.
    #[must_use]
    pub fn net_gain(&self) -> i32 {
        i32::from(self.end_field_position) - i32::from(self.start_field_position)
    }

    /// Hand the ball to the other team, mirroring the spot onto their end.
    pub fn change_possession(&mut self) {
        self.end_possession = self.end_possession.opponent();
        self.end_field_position = 100_u8.saturating_sub(self.end_field_position);
        self.possession_change = self.end_possession != self.possession;
    }
}
