//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore, so the RNG position
//!   can live inside an immutable game snapshot
//!
//! ## Usage
//!
//! ```
//! use skyjo::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Restoring the captured position replays the same sequence.
//! let saved = rng.state();
//! let a = rng.gen_index(10);
//! let mut restored = GameRng::from_state(&saved);
//! assert_eq!(a, restored.gen_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform index in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place.
    ///
    /// Fisher–Yates: walk from the last index down to 1, swapping each slot
    /// with a uniformly chosen slot at or before it. Every permutation is
    /// equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same no
/// matter how many numbers have been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl GameRngState {
    /// Position of a freshly seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        GameRng::new(seed).state()
    }
}
