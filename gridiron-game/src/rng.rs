//! Seeded randomness shared by every probabilistic decision in a game.
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::Sha256;

use crate::error::SimulationError;

const GAME_STREAM_TAG: &[u8] = b"gridiron.game";

/// The single randomness source owned by one game simulation.
///
/// Every skills check, outcome calculator, and play action borrows this
/// stream; nothing constructs its own generator. Two games built from the
/// same seed draw identical sequences.
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    stream: CountingRng<ChaCha8Rng>,
}

impl GameRng {
    /// Deterministic stream for a user-visible seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            stream: CountingRng::new(derive_stream_seed(seed, GAME_STREAM_TAG)),
        }
    }

    /// Stream seeded from operating-system entropy.
    ///
    /// The drawn seed is retained so the game can be replayed later.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Entropy`] when the OS source fails.
    pub fn from_entropy() -> Result<Self, SimulationError> {
        let mut bytes = [0_u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| SimulationError::Entropy(err.to_string()))?;
        Ok(Self::from_seed(u64::from_le_bytes(bytes)))
    }

    /// Seeded when a seed is supplied, entropy-seeded otherwise.
    ///
    /// # Errors
    ///
    /// Propagates entropy failures from [`GameRng::from_entropy`].
    pub fn from_optional_seed(seed: Option<u64>) -> Result<Self, SimulationError> {
        seed.map_or_else(Self::from_entropy, |seed| Ok(Self::from_seed(seed)))
    }

    /// The user-visible seed this stream was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of raw draws taken so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.stream.draws()
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.stream.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.stream.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.stream.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.stream.try_fill_bytes(dest)
    }
}

/// Draw helpers layered over any [`RngCore`].
pub trait Roll: RngCore + Sized {
    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    /// Uniform integer in `[low, high]`; collapses to `low` for empty ranges.
    fn between(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }

    /// Uniform index in `[0, len)`; `None` when there is nothing to pick.
    fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_range(0..len))
    }
}

impl<R: RngCore + Sized> Roll for R {}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<ChaCha8Rng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
