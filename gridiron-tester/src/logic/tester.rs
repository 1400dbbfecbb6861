use anyhow::{Context, Result};
use colored::Colorize;
use gridiron_game::{FlowState, GameEngine, PenaltyCatalog, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::checks::{CHECKS, GameRun};
use super::rosters::Rosters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

#[derive(Default)]
struct Tally {
    iterations_run: usize,
    successful_iterations: usize,
    failures: Vec<String>,
    durations: Vec<Duration>,
}

/// Simulates every seed and iteration once and runs all checks against it.
pub struct GameTester {
    engine: GameEngine<Rosters>,
    verbose: bool,
}

impl GameTester {
    pub const fn new(
        rosters: Rosters,
        config: SimulationConfig,
        penalties: PenaltyCatalog,
        verbose: bool,
    ) -> Self {
        Self {
            engine: GameEngine::new(rosters, config, penalties),
            verbose,
        }
    }

    /// Drive one seed through the step-wise session and replay it.
    ///
    /// # Errors
    ///
    /// Returns an error if the rosters cannot be loaded or the game aborts.
    pub fn simulate(&self, seed: u64) -> Result<GameRun> {
        let mut session = self
            .engine
            .create_session(Some(seed))
            .with_context(|| format!("seed {seed}: session setup failed"))?;
        while !session.is_finished() {
            session
                .step()
                .with_context(|| format!("seed {seed}: simulation aborted"))?;
        }
        let final_state = session.state();
        let post_play_entries = session.flow().entries(FlowState::PostPlay);
        let post_game_entries = session.flow().entries(FlowState::PostGame);
        let game = session.into_game()?;
        let replay = self
            .engine
            .play(Some(seed))
            .with_context(|| format!("seed {seed}: replay failed"))?;
        Ok(GameRun {
            seed,
            game,
            replay,
            final_state,
            post_play_entries,
            post_game_entries,
        })
    }

    pub fn run(&self, seeds: &[u64], iterations: usize) -> Vec<CheckResult> {
        let mut tallies: Vec<Tally> = CHECKS.iter().map(|_| Tally::default()).collect();

        for &seed in seeds {
            for i in 0..iterations {
                let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
                let start_time = Instant::now();
                let run = self.simulate(iteration_seed);
                let simulated = start_time.elapsed();

                for (check, tally) in CHECKS.iter().zip(&mut tallies) {
                    tally.iterations_run += 1;
                    let check_start = Instant::now();
                    let outcome = match &run {
                        Ok(run) => (check.run)(run),
                        Err(err) => Err(format!("{err:#}")),
                    };
                    let duration = simulated + check_start.elapsed();
                    match outcome {
                        Ok(()) => {
                            tally.successful_iterations += 1;
                            tally.durations.push(duration);
                        }
                        Err(err) => {
                            if self.verbose {
                                println!(
                                    "  ❌ {} seed {iteration_seed}: {}",
                                    check.key,
                                    err.clone().red()
                                );
                            }
                            tally
                                .failures
                                .push(format!("Seed {iteration_seed} (iteration {}): {err}", i + 1));
                        }
                    }
                }

                if self.verbose
                    && let Ok(run) = &run
                {
                    println!(
                        "  ✅ seed {iteration_seed}: {} plays, {} {} - {} {} ({simulated:?})",
                        run.game.plays.len(),
                        run.game.home_team.display_name(),
                        run.game.home_score,
                        run.game.away_team.display_name(),
                        run.game.away_score,
                    );
                }
            }
        }

        CHECKS
            .iter()
            .zip(tallies)
            .map(|(check, tally)| CheckResult {
                check_name: check.key.to_string(),
                passed: tally.failures.is_empty(),
                iterations_run: tally.iterations_run,
                successful_iterations: tally.successful_iterations,
                average_duration: average(&tally.durations),
                failures: tally.failures,
            })
            .collect()
    }
}

fn average(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        Duration::ZERO
    } else {
        durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tester() -> GameTester {
        GameTester::new(
            Rosters::Fixture,
            SimulationConfig::default(),
            PenaltyCatalog::default_catalog().clone(),
            false,
        )
    }

    #[test]
    fn every_check_runs_for_every_iteration() {
        let results = tester().run(&[1337, 42], 2);
        assert_eq!(results.len(), CHECKS.len());
        for result in &results {
            assert_eq!(result.iterations_run, 4);
            assert!(result.passed, "{}: {:?}", result.check_name, result.failures);
        }
    }

    #[test]
    fn broken_roster_file_fails_every_check() {
        let tester = GameTester::new(
            Rosters::File("/definitely/not/teams.json".into()),
            SimulationConfig::default(),
            PenaltyCatalog::default(),
            false,
        );
        let results = tester.run(&[1], 1);
        assert!(results.iter().all(|result| !result.passed));
        assert!(results[0].failures[0].contains("session setup failed"));
    }

    #[test]
    fn results_serialize_durations_as_millis() {
        let result = CheckResult {
            check_name: "determinism".to_string(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 12);
    }
}
