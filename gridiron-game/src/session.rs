//! Step-wise game driver binding the flow machine to the actions.
//!
//! A [`GameSession`] owns everything one game needs: the rosters until the
//! game is assembled, the single seeded stream, the read-only tables, and the
//! flow machine. Each [`GameSession::step`] fires one trigger and runs the
//! entry action of the state it lands in, which yields the next trigger.
use crate::actions::{
    Rules, blocked_kick, coin_toss, execute_play, finalize_result, fumble_return, halftime,
    interception_return, post_play, pre_play,
};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::flow::{FlowState, GameFlow, GuardContext, Trigger};
use crate::model::{Game, Team};
use crate::penalty::PenaltyCatalog;
use crate::rng::GameRng;

#[derive(Debug)]
pub struct GameSession {
    flow: GameFlow,
    game: Option<Game>,
    teams: Option<(Team, Team)>,
    rng: GameRng,
    config: SimulationConfig,
    penalties: PenaltyCatalog,
    pending: Option<Trigger>,
}

impl GameSession {
    /// Session for `home` against `away`, parked in `InitializeGame`.
    #[must_use]
    pub fn new(home: Team, away: Team, rng: GameRng, config: SimulationConfig) -> Self {
        Self {
            flow: GameFlow::new(config.max_plays),
            game: None,
            teams: Some((home, away)),
            rng,
            config,
            penalties: PenaltyCatalog::default_catalog().clone(),
            pending: Some(Trigger::StartGameFlow),
        }
    }

    /// Replace the embedded penalty catalog.
    ///
    /// The catalog is validated when pre-game runs; a rejected catalog
    /// stops the session before any play.
    #[must_use]
    pub fn with_penalties(mut self, penalties: PenaltyCatalog) -> Self {
        self.penalties = penalties;
        self
    }

    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.flow.state()
    }

    #[must_use]
    pub const fn flow(&self) -> &GameFlow {
        &self.flow
    }

    /// The game, once pre-game has assembled it.
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    #[must_use]
    pub const fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.pending.is_none()
    }

    /// Fire the pending trigger and run the entry action of the new state.
    ///
    /// Once `PostGame` is reached there is nothing left to fire and the
    /// state is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates invalid transitions, runaway-guard trips, and actions
    /// invoked without a game or play in progress.
    pub fn step(&mut self) -> Result<FlowState, SimulationError> {
        let Some(trigger) = self.pending.take() else {
            return Ok(self.flow.state());
        };
        let guard = GuardContext {
            play_type: self
                .game
                .as_ref()
                .and_then(|game| game.current_play.as_ref())
                .map(|play| play.play_type),
        };
        let state = self.flow.fire(trigger, guard)?;
        self.pending = self.enter(state)?;
        Ok(state)
    }

    /// Drive the session until the final whistle.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by [`GameSession::step`].
    pub fn run(mut self) -> Result<Game, SimulationError> {
        while !self.is_finished() {
            self.step()?;
        }
        self.into_game()
    }

    /// # Errors
    ///
    /// Returns [`SimulationError::GameNotStarted`] before pre-game has run.
    pub fn into_game(self) -> Result<Game, SimulationError> {
        self.game.ok_or(SimulationError::GameNotStarted)
    }

    fn enter(&mut self, state: FlowState) -> Result<Option<Trigger>, SimulationError> {
        if state == FlowState::PreGame {
            self.penalties.validate()?;
            let (home, away) = self.teams.take().ok_or(SimulationError::GameNotStarted)?;
            log::info!(
                "{} host {} (seed {})",
                home.display_name(),
                away.display_name(),
                self.rng.seed()
            );
            self.game = Some(Game::new(home, away, self.rng.seed()));
            return Ok(Some(Trigger::WarmupsCompleted));
        }

        let rules = Rules::new(&self.config, &self.penalties);
        let rng = &mut self.rng;
        let game = self.game.as_mut().ok_or(SimulationError::GameNotStarted)?;
        let next = match state {
            FlowState::InitializeGame => Trigger::StartGameFlow,
            FlowState::PreGame => Trigger::WarmupsCompleted,
            FlowState::CoinToss => {
                coin_toss(game, rng);
                Trigger::CoinTossed
            }
            FlowState::PrePlay => pre_play(game, rules, rng),
            FlowState::FieldGoal
            | FlowState::RunPlay
            | FlowState::Kickoff
            | FlowState::Punt
            | FlowState::PassPlay => {
                game.with_current_play(|game, play| execute_play(game, play, rules, rng))?
            }
            FlowState::FieldGoalBlock | FlowState::PuntBlock => {
                game.with_current_play(|game, play| blocked_kick(game, play, rules, rng))?
            }
            FlowState::InterceptionReturn => {
                game.with_current_play(|game, play| interception_return(game, play, rules, rng))?
            }
            FlowState::FumbleReturn => {
                game.with_current_play(|game, play| fumble_return(game, play, rules, rng))?
            }
            FlowState::FieldGoalResult
            | FlowState::RunPlayResult
            | FlowState::KickoffResult
            | FlowState::PuntResult
            | FlowState::PassPlayResult => {
                game.with_current_play(|game, play| finalize_result(game, play))?
            }
            FlowState::PostPlay => post_play(game, rules, rng)?,
            FlowState::QuarterExpired => {
                let half_over = game.plays.last().is_some_and(|play| play.half_expired);
                if half_over {
                    Trigger::HalfExpired
                } else {
                    Trigger::QuarterOver
                }
            }
            FlowState::Halftime => halftime(game, rng),
            FlowState::PostGame => {
                log::info!(
                    "game over after {} plays: {} - {}",
                    game.plays.len(),
                    game.home_score,
                    game.away_score
                );
                return Ok(None);
            }
        };
        Ok(Some(next))
    }
}

/// Simulate a whole game in one call.
///
/// No seed means the stream is seeded from OS entropy; the chosen seed is
/// recorded on the returned game either way.
///
/// # Errors
///
/// Rejects an invalid configuration before any play runs, and returns any
/// fatal error raised while the game is driven.
pub fn simulate_game(
    home: Team,
    away: Team,
    seed: Option<u64>,
    config: &SimulationConfig,
) -> Result<Game, SimulationError> {
    config.validate()?;
    let rng = GameRng::from_optional_seed(seed)?;
    GameSession::new(home, away, rng, config.clone()).run()
}
