//! Domain records: players, teams, the game root, and per-down plays.
mod game;
mod play;
mod player;
mod team;

pub use game::{Game, Half, HalfType, Possession, Quarter, QuarterRef, QuarterType};
pub use play::{
    Down, FieldGoalDetail, FumbleContext, FumbleRecord, InjuryRecord, KickoffDetail, PassDetail,
    PenaltyEnforcement, PenaltyRecord, PenaltyTiming, Play, PlayDetail, PlayType, PlayerRef,
    PuntDetail, RunDetail, ScoreEvent, ScoreKind, ScoringPlay, TacklerSet,
};
pub use player::{Injury, InjuryKind, InjurySeverity, Player, Position, Recovery};
pub use team::{Team, TeamRecord};
