//! Explicit game-flow state machine.
//!
//! States and triggers are closed enums and [`transition`] is a pure
//! function over them, so the whole table can be exercised without a game.
//! [`GameFlow`] layers the runaway guards and a transition trace on top.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::PlayType;

mod driver;

pub use driver::{GameFlow, TransitionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowState {
    InitializeGame,
    PreGame,
    CoinToss,
    PrePlay,
    FieldGoal,
    RunPlay,
    Kickoff,
    Punt,
    PassPlay,
    FieldGoalBlock,
    PuntBlock,
    InterceptionReturn,
    FumbleReturn,
    FieldGoalResult,
    RunPlayResult,
    KickoffResult,
    PuntResult,
    PassPlayResult,
    PostPlay,
    QuarterExpired,
    Halftime,
    PostGame,
}

impl FlowState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PostGame)
    }

    const fn for_play(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Kickoff => Self::Kickoff,
            PlayType::Punt => Self::Punt,
            PlayType::FieldGoal => Self::FieldGoal,
            PlayType::Run => Self::RunPlay,
            PlayType::Pass => Self::PassPlay,
        }
    }

    const fn result_for(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Kickoff => Self::KickoffResult,
            PlayType::Punt => Self::PuntResult,
            PlayType::FieldGoal => Self::FieldGoalResult,
            PlayType::Run => Self::RunPlayResult,
            PlayType::Pass => Self::PassPlayResult,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    StartGameFlow,
    WarmupsCompleted,
    CoinTossed,
    Snap,
    FieldGoalBlocked,
    PuntBlocked,
    Intercepted,
    Fumble,
    PlayResult,
    /// Carries the finished play's quarter-expired flag.
    NextPlay(bool),
    QuarterOver,
    HalfExpired,
    HalftimeOver,
    GameExpired,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Inputs the dynamic guards read. Only the current play's type matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardContext {
    pub play_type: Option<PlayType>,
}

/// A trigger fired from a state that does not permit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trigger {trigger} is not permitted from state {state}")]
pub struct InvalidTransition {
    pub state: FlowState,
    pub trigger: Trigger,
}

/// Destination of `trigger` fired from `state`.
///
/// # Errors
///
/// Returns [`InvalidTransition`] for any pair missing from the table,
/// including play-type branches fired without a current play.
pub fn transition(
    state: FlowState,
    trigger: Trigger,
    guard: GuardContext,
) -> Result<FlowState, InvalidTransition> {
    use FlowState as S;
    use Trigger as T;

    let invalid = InvalidTransition { state, trigger };
    let next = match (state, trigger) {
        (S::InitializeGame, T::StartGameFlow) => S::PreGame,
        (S::PreGame, T::WarmupsCompleted) => S::CoinToss,
        (S::CoinToss, T::CoinTossed) => S::PrePlay,
        (S::PrePlay, T::Snap) => S::for_play(guard.play_type.ok_or(invalid)?),
        (S::FieldGoal, T::FieldGoalBlocked) => S::FieldGoalBlock,
        (S::Punt, T::PuntBlocked) => S::PuntBlock,
        (S::PassPlay, T::Intercepted) => S::InterceptionReturn,
        (
            S::FieldGoal
            | S::FieldGoalBlock
            | S::Punt
            | S::PuntBlock
            | S::PassPlay
            | S::InterceptionReturn
            | S::RunPlay
            | S::Kickoff,
            T::Fumble,
        ) => S::FumbleReturn,
        (S::FumbleReturn, T::PlayResult) => S::result_for(guard.play_type.ok_or(invalid)?),
        (
            S::FieldGoalResult
            | S::RunPlayResult
            | S::KickoffResult
            | S::PuntResult
            | S::PassPlayResult,
            T::PlayResult,
        ) => S::PostPlay,
        (S::PostPlay, T::NextPlay(true)) => S::QuarterExpired,
        (S::PostPlay, T::NextPlay(false)) | (S::QuarterExpired, T::QuarterOver) => S::PrePlay,
        (S::QuarterExpired, T::HalfExpired) => S::Halftime,
        (S::Halftime, T::HalftimeOver) => S::PrePlay,
        (S::Halftime, T::GameExpired) => S::PostGame,
        _ => return Err(invalid),
    };
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [FlowState; 22] = [
        FlowState::InitializeGame,
        FlowState::PreGame,
        FlowState::CoinToss,
        FlowState::PrePlay,
        FlowState::FieldGoal,
        FlowState::RunPlay,
        FlowState::Kickoff,
        FlowState::Punt,
        FlowState::PassPlay,
        FlowState::FieldGoalBlock,
        FlowState::PuntBlock,
        FlowState::InterceptionReturn,
        FlowState::FumbleReturn,
        FlowState::FieldGoalResult,
        FlowState::RunPlayResult,
        FlowState::KickoffResult,
        FlowState::PuntResult,
        FlowState::PassPlayResult,
        FlowState::PostPlay,
        FlowState::QuarterExpired,
        FlowState::Halftime,
        FlowState::PostGame,
    ];

    const ALL_TRIGGERS: [Trigger; 15] = [
        Trigger::StartGameFlow,
        Trigger::WarmupsCompleted,
        Trigger::CoinTossed,
        Trigger::Snap,
        Trigger::FieldGoalBlocked,
        Trigger::PuntBlocked,
        Trigger::Intercepted,
        Trigger::Fumble,
        Trigger::PlayResult,
        Trigger::NextPlay(false),
        Trigger::NextPlay(true),
        Trigger::QuarterOver,
        Trigger::HalfExpired,
        Trigger::HalftimeOver,
        Trigger::GameExpired,
    ];

    fn guard(play_type: PlayType) -> GuardContext {
        GuardContext {
            play_type: Some(play_type),
        }
    }

    #[test]
    fn opening_sequence() {
        let none = GuardContext::default();
        assert_eq!(
            transition(FlowState::InitializeGame, Trigger::StartGameFlow, none),
            Ok(FlowState::PreGame)
        );
        assert_eq!(
            transition(FlowState::PreGame, Trigger::WarmupsCompleted, none),
            Ok(FlowState::CoinToss)
        );
        assert_eq!(
            transition(FlowState::CoinToss, Trigger::CoinTossed, none),
            Ok(FlowState::PrePlay)
        );
    }

    #[test]
    fn snap_and_result_branch_on_play_type() {
        let cases = [
            (PlayType::Kickoff, FlowState::Kickoff, FlowState::KickoffResult),
            (PlayType::Punt, FlowState::Punt, FlowState::PuntResult),
            (PlayType::FieldGoal, FlowState::FieldGoal, FlowState::FieldGoalResult),
            (PlayType::Run, FlowState::RunPlay, FlowState::RunPlayResult),
            (PlayType::Pass, FlowState::PassPlay, FlowState::PassPlayResult),
        ];
        for (play_type, play_state, result_state) in cases {
            assert_eq!(
                transition(FlowState::PrePlay, Trigger::Snap, guard(play_type)),
                Ok(play_state)
            );
            assert_eq!(
                transition(play_state, Trigger::Fumble, guard(play_type)),
                Ok(FlowState::FumbleReturn)
            );
            assert_eq!(
                transition(FlowState::FumbleReturn, Trigger::PlayResult, guard(play_type)),
                Ok(result_state)
            );
            assert_eq!(
                transition(result_state, Trigger::PlayResult, guard(play_type)),
                Ok(FlowState::PostPlay)
            );
        }
    }

    #[test]
    fn branch_without_play_is_invalid() {
        let err = transition(FlowState::PrePlay, Trigger::Snap, GuardContext::default())
            .expect_err("no play type");
        assert_eq!(err.state, FlowState::PrePlay);
        assert_eq!(err.trigger, Trigger::Snap);
    }

    #[test]
    fn special_branches() {
        let g = guard(PlayType::Pass);
        assert_eq!(
            transition(FlowState::PassPlay, Trigger::Intercepted, g),
            Ok(FlowState::InterceptionReturn)
        );
        assert_eq!(
            transition(FlowState::FieldGoal, Trigger::FieldGoalBlocked, g),
            Ok(FlowState::FieldGoalBlock)
        );
        assert_eq!(
            transition(FlowState::Punt, Trigger::PuntBlocked, g),
            Ok(FlowState::PuntBlock)
        );
        assert_eq!(
            transition(FlowState::PostPlay, Trigger::NextPlay(true), g),
            Ok(FlowState::QuarterExpired)
        );
        assert_eq!(
            transition(FlowState::PostPlay, Trigger::NextPlay(false), g),
            Ok(FlowState::PrePlay)
        );
        assert_eq!(
            transition(FlowState::QuarterExpired, Trigger::HalfExpired, g),
            Ok(FlowState::Halftime)
        );
        assert_eq!(
            transition(FlowState::Halftime, Trigger::GameExpired, g),
            Ok(FlowState::PostGame)
        );
        assert!(transition(FlowState::RunPlay, Trigger::Intercepted, g).is_err());
        assert!(transition(FlowState::Kickoff, Trigger::PuntBlocked, g).is_err());
    }

    #[test]
    fn post_game_accepts_nothing() {
        for state in ALL_STATES {
            for trigger in ALL_TRIGGERS {
                let result = transition(state, trigger, guard(PlayType::Run));
                if state.is_terminal() {
                    assert!(result.is_err(), "{state} accepted {trigger}");
                }
            }
        }
    }

    #[test]
    fn table_has_expected_edge_count() {
        let edges = ALL_STATES
            .iter()
            .flat_map(|&state| ALL_TRIGGERS.iter().map(move |&trigger| (state, trigger)))
            .filter(|&(state, trigger)| transition(state, trigger, guard(PlayType::Run)).is_ok())
            .count();
        assert_eq!(edges, 27);
    }
}
