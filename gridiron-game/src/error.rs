//! Fatal error taxonomy surfaced to callers of the simulation.
use thiserror::Error;

use crate::config::ConfigError;
use crate::flow::InvalidTransition;

/// Conditions that abort a simulation run.
///
/// Recoverable situations (a missing quarterback, an empty return unit) never
/// reach this type; they are narrated on the play and resolved with defaults.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error("play limit of {limit} exceeded before the game expired")]
    PlayLimitExceeded { limit: u32 },
    #[error("transition limit of {limit} exceeded; the flow is cycling")]
    TransitionLimitExceeded { limit: u64 },
    #[error("randomness source failed: {0}")]
    Entropy(String),
    #[error("game accessed before pre-game assembled it")]
    GameNotStarted,
    #[error("no play is in progress")]
    NoActivePlay,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure of a [`crate::GameEngine`] run: either the roster source or the game itself.
#[derive(Debug, Error)]
pub enum EngineError<E>
where
    E: std::error::Error + 'static,
{
    #[error("roster source failed: {0}")]
    Roster(#[source] E),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
