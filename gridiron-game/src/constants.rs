//! Fixed rule and clock constants for the simulation.
//!
//! Probability tuning lives in [`crate::config`] so it can be reloaded
//! without a rebuild; the values here are rules of the game itself.

// Field ---------------------------------------------------------------------
pub(crate) const GOAL_LINE: i32 = 100;
pub(crate) const TOUCHBACK_SPOT: u8 = 20;
pub(crate) const KICKOFF_SPOT: u8 = 35;
pub(crate) const FIRST_DOWN_DISTANCE: u8 = 10;
pub(crate) const ONSIDE_RECOVERY_SPOT: u8 = 45;
pub(crate) const EXTRA_POINT_SPOT: u8 = 98;
pub(crate) const FIELD_GOAL_SNAP_OFFSET: u32 = 17;
pub(crate) const BIG_PLAY_YARDS: i32 = 20;
pub(crate) const MAX_PLAYERS_ON_FIELD: usize = 11;
pub(crate) const DEFAULT_RATING: f64 = 50.0;

// Clock ---------------------------------------------------------------------
pub(crate) const QUARTER_SECONDS: u32 = 900;
pub(crate) const HUDDLE_SECONDS: f64 = 1.5;
pub(crate) const PLAY_CLOCK_RUNOFF_SECONDS: f64 = 20.0;
pub(crate) const GOOD_SNAP_SECONDS: f64 = 0.2;
pub(crate) const MUFFED_SNAP_SECONDS: f64 = 0.5;
pub(crate) const RUN_PLAY_BASE_SECONDS: f64 = 5.0;
pub(crate) const RUN_PLAY_SPREAD_SECONDS: f64 = 3.0;
pub(crate) const PASS_COMPLETE_BASE_SECONDS: f64 = 5.0;
pub(crate) const PASS_INCOMPLETE_SECONDS: f64 = 3.0;
pub(crate) const SACK_SECONDS: f64 = 4.0;
pub(crate) const KICKOFF_BASE_SECONDS: f64 = 4.0;
pub(crate) const PUNT_BASE_SECONDS: f64 = 5.0;
pub(crate) const RETURN_SECONDS_PER_YARD: f64 = 0.1;
pub(crate) const FIELD_GOAL_SECONDS: f64 = 5.0;
pub(crate) const FUMBLE_SECONDS: f64 = 0.5;
pub(crate) const INTERCEPTION_RETURN_SECONDS: f64 = 3.0;

// Scoring -------------------------------------------------------------------
pub(crate) const TOUCHDOWN_POINTS: u16 = 6;
pub(crate) const FIELD_GOAL_POINTS: u16 = 3;
pub(crate) const SAFETY_POINTS: u16 = 2;
pub(crate) const EXTRA_POINT_POINTS: u16 = 1;
pub(crate) const TWO_POINT_POINTS: u16 = 2;

// Yardage windows -----------------------------------------------------------
pub(crate) const SACK_LOSS_MIN: i32 = 2;
pub(crate) const SACK_LOSS_MAX: i32 = 10;
pub(crate) const MUFFED_SNAP_LOSS_MIN: i32 = 1;
pub(crate) const MUFFED_SNAP_LOSS_MAX: i32 = 5;
pub(crate) const TACKLE_BREAK_MIN_YARDS: i32 = 3;
pub(crate) const TACKLE_BREAK_MAX_YARDS: i32 = 8;
pub(crate) const INTERCEPTION_DEPTH_MIN: i32 = 5;
pub(crate) const INTERCEPTION_DEPTH_MAX: i32 = 20;
pub(crate) const BLOCKED_KICK_LOSS_MIN: i32 = 3;
pub(crate) const BLOCKED_KICK_LOSS_MAX: i32 = 10;
pub(crate) const FUMBLE_RETURN_MAX: i32 = 15;

// Injuries ------------------------------------------------------------------
pub(crate) const HEALTH_LOSS_MINOR: u8 = 10;
pub(crate) const HEALTH_LOSS_MODERATE: u8 = 25;
pub(crate) const HEALTH_LOSS_GAME_ENDING: u8 = 50;
pub(crate) const MINOR_INJURY_MIN_PLAYS: i32 = 1;
pub(crate) const MINOR_INJURY_MAX_PLAYS: i32 = 2;
