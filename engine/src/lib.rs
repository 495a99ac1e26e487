use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod arena;
pub mod battle;
pub mod content;
pub mod error;
pub mod leaderboard;
pub mod meal;
pub mod service;

pub use arena::Arena;
pub use battle::{BattleOutcome, battle_score, resolve};
pub use error::BattleError;
pub use leaderboard::{LeaderboardRow, SortBy, leaderboard};
pub use meal::{Difficulty, Meal, MealId, MealStore};
pub use service::BattleService;

/// Uniform randomness consumed by battle resolution. A single draw in `[0, 1)`
/// decides each battle, so swapping the source makes outcomes reproducible.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for ChaChaRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/* ---------------- scripted sources for tests and demos ---------------- */

/// Always returns the same value.
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence, then repeats its last value.
pub struct SequenceRandom {
    values: Vec<f64>,
    idx: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, idx: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self) -> f64 {
        let v = self
            .values
            .get(self.idx)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0.0);
        if self.idx < self.values.len() {
            self.idx += 1;
        }
        v
    }
}
