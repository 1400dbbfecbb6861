use serde::{Deserialize, Serialize};

use super::{FlowState, GuardContext, Trigger, transition};
use crate::error::SimulationError;

/// Transitions allowed per logged play before the flow is declared stuck.
const TRANSITIONS_PER_PLAY: u64 = 16;

/// One fired trigger, kept for replay diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: FlowState,
    pub trigger: Trigger,
    pub to: FlowState,
}

/// Current position in the state machine plus its runaway guards.
#[derive(Debug, Clone)]
pub struct GameFlow {
    state: FlowState,
    play_limit: u32,
    transition_limit: u64,
    plays: u32,
    trace: Vec<TransitionRecord>,
}

impl GameFlow {
    /// Fresh machine in `InitializeGame`.
    ///
    /// `play_limit` bounds the number of `PostPlay` entries; the transition
    /// bound is derived from it.
    #[must_use]
    pub fn new(play_limit: u32) -> Self {
        Self {
            state: FlowState::InitializeGame,
            play_limit,
            transition_limit: u64::from(play_limit)
                .saturating_add(1)
                .saturating_mul(TRANSITIONS_PER_PLAY),
            plays: 0,
            trace: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.state
    }

    /// Number of `PostPlay` entries so far.
    #[must_use]
    pub const fn plays(&self) -> u32 {
        self.plays
    }

    #[must_use]
    pub fn trace(&self) -> &[TransitionRecord] {
        &self.trace
    }

    /// How many times the machine has entered `state`.
    #[must_use]
    pub fn entries(&self, state: FlowState) -> usize {
        let initial = usize::from(state == FlowState::InitializeGame);
        initial + self.trace.iter().filter(|record| record.to == state).count()
    }

    /// Fire `trigger` and move to the destination state.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidTransition`] when the table has no
    /// such edge, and a limit error when either runaway guard trips.
    pub fn fire(
        &mut self,
        trigger: Trigger,
        guard: GuardContext,
    ) -> Result<FlowState, SimulationError> {
        let from = self.state;
        let to = transition(from, trigger, guard)?;
        let fired = u64::try_from(self.trace.len()).unwrap_or(u64::MAX);
        if fired >= self.transition_limit {
            return Err(SimulationError::TransitionLimitExceeded {
                limit: self.transition_limit,
            });
        }
        if to == FlowState::PostPlay {
            if self.plays >= self.play_limit {
                return Err(SimulationError::PlayLimitExceeded {
                    limit: self.play_limit,
                });
            }
            self.plays += 1;
        }
        log::trace!("flow {from} --{trigger}--> {to}");
        self.trace.push(TransitionRecord { from, trigger, to });
        self.state = to;
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayType;

    fn run_one_play(flow: &mut GameFlow) -> Result<FlowState, SimulationError> {
        let guard = GuardContext {
            play_type: Some(PlayType::Run),
        };
        flow.fire(Trigger::Snap, guard)?;
        flow.fire(Trigger::Fumble, guard)?;
        flow.fire(Trigger::PlayResult, guard)?;
        flow.fire(Trigger::PlayResult, guard)?;
        flow.fire(Trigger::NextPlay(false), guard)
    }

    #[test]
    fn counts_plays_and_records_trace() {
        let mut flow = GameFlow::new(10);
        let none = GuardContext::default();
        flow.fire(Trigger::StartGameFlow, none).expect("start");
        flow.fire(Trigger::WarmupsCompleted, none).expect("warmups");
        flow.fire(Trigger::CoinTossed, none).expect("toss");
        assert_eq!(run_one_play(&mut flow).expect("play"), FlowState::PrePlay);
        assert_eq!(flow.plays(), 1);
        assert_eq!(flow.entries(FlowState::PostPlay), 1);
        assert_eq!(flow.entries(FlowState::PrePlay), 2);
        assert_eq!(flow.trace().len(), 8);
    }

    #[test]
    fn invalid_trigger_leaves_state_untouched() {
        let mut flow = GameFlow::new(10);
        let err = flow
            .fire(Trigger::Snap, GuardContext::default())
            .expect_err("snap before start");
        assert!(matches!(err, SimulationError::InvalidTransition(_)));
        assert_eq!(flow.state(), FlowState::InitializeGame);
        assert!(flow.trace().is_empty());
    }

    #[test]
    fn play_limit_is_fatal() {
        let mut flow = GameFlow::new(2);
        let none = GuardContext::default();
        flow.fire(Trigger::StartGameFlow, none).expect("start");
        flow.fire(Trigger::WarmupsCompleted, none).expect("warmups");
        flow.fire(Trigger::CoinTossed, none).expect("toss");
        run_one_play(&mut flow).expect("first");
        run_one_play(&mut flow).expect("second");
        let err = run_one_play(&mut flow).expect_err("third exceeds limit");
        assert!(matches!(err, SimulationError::PlayLimitExceeded { limit: 2 }));
    }
}
