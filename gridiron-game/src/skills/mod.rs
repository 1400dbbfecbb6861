//! Skills checks: probabilistic evaluators deciding whether discrete events happen.
//!
//! Each check is split into a pure `*_chance` function and a draw. The
//! chance functions follow one rule: start from a configured base rate, add
//! a power differential scaled by a configured denominator, then clamp to
//! the configured bounds. Draws take exactly one roll per decision from the
//! game stream so replays stay in lockstep.
use rand::RngCore;

use crate::rng::Roll;

mod injuries;
mod kicking;
mod passing;
mod penalties;
mod rushing;
mod selection;
mod turnovers;

pub use injuries::{InjuryExposure, injury_chance, injury_effect, injury_occurred};
pub use kicking::{
    fair_catch_chance, field_goal_block_chance, kickoff_muff_chance, kickoff_out_of_bounds_chance,
    onside_attempt, onside_recovery_chance, punt_block_chance, punt_downed_chance,
    punt_muff_chance, punt_out_of_bounds_chance,
};
pub use passing::{
    completion_chance, deep_ball_eligible, interception_chance, protection_chance,
    qb_pressure_chance,
};
pub use penalties::penalty_check;
pub use rushing::{breakaway_eligible, tackle_break_chance};
pub use selection::{
    CoinToss, ball_carrier, coin_toss, pass_target, returner, tacklers,
};
pub use turnovers::{
    Bounce, FumbleRecovery, fumble_chance, fumble_recovery, recovery_chance, snap_is_good,
};

/// Draw once against `chance`; true when the event happens.
pub fn occurs<R: RngCore>(chance: f64, rng: &mut R) -> bool {
    rng.roll() < chance
}
