use gridiron_game::{FlowState, Game, PlayType, QuarterType};

/// Everything a check may inspect about one simulated game.
#[derive(Debug, Clone)]
pub struct GameRun {
    pub seed: u64,
    pub game: Game,
    /// Second run of the same seed.
    pub replay: Game,
    pub final_state: FlowState,
    pub post_play_entries: usize,
    pub post_game_entries: usize,
}

pub type CheckFn = fn(&GameRun) -> Result<(), String>;

pub struct Check {
    pub key: &'static str,
    pub description: &'static str,
    pub run: CheckFn,
}

pub const CHECKS: &[Check] = &[
    Check {
        key: "determinism",
        description: "Replaying a seed reproduces the game exactly",
        run: determinism,
    },
    Check {
        key: "clock-conservation",
        description: "Each regulation quarter consumes exactly 900 seconds",
        run: clock_conservation,
    },
    Check {
        key: "field-bounds",
        description: "Every spot stays within the 0-100 field",
        run: field_bounds,
    },
    Check {
        key: "possession",
        description: "The ball changes hands only through recorded changes",
        run: possession,
    },
    Check {
        key: "terminal-state",
        description: "The flow ends in PostGame exactly once with the game over",
        run: terminal_state,
    },
    Check {
        key: "play-log",
        description: "One logged play per PostPlay entry, numbered in order",
        run: play_log,
    },
];

pub fn list_checks() -> impl Iterator<Item = (&'static str, &'static str)> {
    CHECKS.iter().map(|check| (check.key, check.description))
}

fn determinism(run: &GameRun) -> Result<(), String> {
    if run.game != run.replay {
        let diverged = run
            .game
            .plays
            .iter()
            .zip(&run.replay.plays)
            .find(|(a, b)| a != b)
            .map_or(run.game.plays.len().min(run.replay.plays.len()) + 1, |(a, _)| {
                usize::try_from(a.number).unwrap_or(usize::MAX)
            });
        return Err(format!("seed {} diverged at play {diverged}", run.seed));
    }
    Ok(())
}

fn clock_conservation(run: &GameRun) -> Result<(), String> {
    for quarter in [
        QuarterType::First,
        QuarterType::Second,
        QuarterType::Third,
        QuarterType::Fourth,
    ] {
        let used: u32 = run
            .game
            .plays
            .iter()
            .filter(|play| play.quarter == quarter)
            .map(|play| play.clock_seconds)
            .sum();
        if used != 900 {
            return Err(format!("{quarter} quarter consumed {used} seconds"));
        }
    }
    if let Some(play) = run
        .game
        .plays
        .iter()
        .find(|play| play.clock_seconds > play.start_time)
    {
        return Err(format!(
            "play {} took {}s with {}s left",
            play.number, play.clock_seconds, play.start_time
        ));
    }
    Ok(())
}

fn field_bounds(run: &GameRun) -> Result<(), String> {
    if run.game.field_position > 100 {
        return Err(format!("final spot {}", run.game.field_position));
    }
    match run
        .game
        .plays
        .iter()
        .find(|play| play.start_field_position > 100 || play.end_field_position > 100)
    {
        Some(play) => Err(format!(
            "play {} moved from {} to {}",
            play.number, play.start_field_position, play.end_field_position
        )),
        None => Ok(()),
    }
}

fn possession(run: &GameRun) -> Result<(), String> {
    for play in &run.game.plays {
        if play.possession_change != (play.end_possession != play.possession) {
            return Err(format!("play {} flags a change it did not make", play.number));
        }
    }
    for pair in run.game.plays.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.play_type == PlayType::Kickoff || prev.turnover_on_downs {
            continue;
        }
        if next.possession != prev.end_possession {
            return Err(format!(
                "play {} ended with {} but play {} snapped for {}",
                prev.number, prev.end_possession, next.number, next.possession
            ));
        }
    }
    Ok(())
}

fn terminal_state(run: &GameRun) -> Result<(), String> {
    if run.final_state != FlowState::PostGame {
        return Err(format!("flow stopped in {}", run.final_state));
    }
    if run.post_game_entries != 1 {
        return Err(format!("PostGame entered {} times", run.post_game_entries));
    }
    if !run.game.is_over() {
        return Err(String::from("game clock never expired"));
    }
    Ok(())
}

fn play_log(run: &GameRun) -> Result<(), String> {
    if run.game.plays.len() != run.post_play_entries {
        return Err(format!(
            "{} plays logged for {} PostPlay entries",
            run.game.plays.len(),
            run.post_play_entries
        ));
    }
    for (expected, play) in (1_u32..).zip(&run.game.plays) {
        if play.number != expected {
            return Err(format!("play {} logged in slot {expected}", play.number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rosters::fixture_teams;
    use gridiron_game::{SimulationConfig, simulate_game};

    fn run(seed: u64) -> GameRun {
        let (home, away) = fixture_teams();
        let game = simulate_game(home, away, Some(seed), &SimulationConfig::default()).unwrap();
        GameRun {
            seed,
            replay: game.clone(),
            post_play_entries: game.plays.len(),
            game,
            final_state: FlowState::PostGame,
            post_game_entries: 1,
        }
    }

    #[test]
    fn a_real_game_passes_every_check() {
        let run = run(1337);
        for check in CHECKS {
            assert_eq!((check.run)(&run), Ok(()), "{}", check.key);
        }
    }

    #[test]
    fn tampered_runs_are_caught() {
        let mut broken = run(7);
        broken.replay.plays.pop();
        assert!(determinism(&broken).is_err());

        let mut broken = run(7);
        broken.final_state = FlowState::Halftime;
        assert!(terminal_state(&broken).is_err());

        let mut broken = run(7);
        broken.post_play_entries += 1;
        assert!(play_log(&broken).is_err());

        let mut broken = run(7);
        if let Some(play) = broken.game.plays.first_mut() {
            play.clock_seconds += 1;
        }
        assert!(clock_conservation(&broken).is_err());
    }

    #[test]
    fn check_keys_are_unique() {
        let keys: std::collections::HashSet<_> = list_checks().map(|(key, _)| key).collect();
        assert_eq!(keys.len(), CHECKS.len());
    }
}
