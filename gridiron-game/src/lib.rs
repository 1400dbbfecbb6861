//! Gridiron Game Engine
//!
//! Deterministic American-football play-by-play simulation. Two rosters go
//! in; a finished [`Game`] with its ordered play log and score comes out.
//! Every random decision is drawn from one seeded stream, so a seed replays
//! the same game exactly.

pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod line_battle;
pub mod model;
pub mod numbers;
pub mod outcome;
pub mod penalty;
pub mod power;
pub mod rng;
pub mod session;
pub mod skills;
pub mod stats;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigError, FairCatchConfig, FieldGoalsConfig, GameDecisionsConfig, HangBonus,
    InjuriesConfig, KickoffsConfig, NoiseRange, PassingConfig, ProbabilityBounds, PuntsConfig,
    RushingConfig, SimulationConfig, TurnoversConfig, YardRange, ZoneBonus,
};
pub use error::{EngineError, SimulationError};
pub use flow::{FlowState, GameFlow, GuardContext, InvalidTransition, Trigger, transition};
pub use model::{
    Down, Game, Half, HalfType, Injury, InjuryKind, InjurySeverity, PenaltyEnforcement,
    PenaltyRecord, PenaltyTiming, Play, PlayDetail, PlayType, Player, PlayerRef, Position,
    Possession, Quarter, QuarterType, Recovery, ScoreEvent, ScoreKind, ScoringPlay, Team,
};
pub use penalty::{PenaltyCatalog, PenaltyDef, PenaltyName};
pub use rng::{GameRng, Roll};
pub use session::{GameSession, simulate_game};
pub use stats::{BoxScore, PlayerLine, TeamLine};

/// Trait for abstracting roster loading
/// Platform-specific implementations should provide this
pub trait RosterSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the home and away teams, in that order
    ///
    /// # Errors
    ///
    /// Returns an error if the rosters cannot be loaded.
    fn load_teams(&self) -> Result<(Team, Team), Self::Error>;
}

/// Main game engine running games from a roster source
pub struct GameEngine<S>
where
    S: RosterSource,
{
    source: S,
    config: SimulationConfig,
    penalties: PenaltyCatalog,
}

impl<S> GameEngine<S>
where
    S: RosterSource,
{
    /// Create a new engine with the provided roster source and tuning
    pub const fn new(source: S, config: SimulationConfig, penalties: PenaltyCatalog) -> Self {
        Self {
            source,
            config,
            penalties,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Start a step-wise session with freshly loaded rosters.
    ///
    /// # Errors
    ///
    /// Returns an error if the rosters cannot be loaded, the configuration or
    /// penalty catalog is invalid, or no seed was given and OS entropy is
    /// unavailable.
    pub fn create_session(&self, seed: Option<u64>) -> Result<GameSession, EngineError<S::Error>> {
        self.config.validate().map_err(SimulationError::from)?;
        self.penalties.validate().map_err(SimulationError::from)?;
        let (home, away) = self.source.load_teams().map_err(EngineError::Roster)?;
        let rng = GameRng::from_optional_seed(seed)?;
        Ok(GameSession::new(home, away, rng, self.config.clone())
            .with_penalties(self.penalties.clone()))
    }

    /// Play a whole game from the source's rosters.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`GameEngine::create_session`] and any fatal
    /// error raised while the game is driven.
    pub fn play(&self, seed: Option<u64>) -> Result<Game, EngineError<S::Error>> {
        Ok(self.create_session(seed)?.run()?)
    }
}
