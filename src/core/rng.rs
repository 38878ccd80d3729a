//! Seeded randomness for room ids and word shuffles.
//!
//! The registry owns one `GameRng` built from `SessionConfig::seed`. It
//! draws room ids from it and hands every new room a forked stream, so a
//! registry replayed from the same seed creates the same rooms with the
//! same rounds.
//!
//! ```
//! use wordclaim::core::GameRng;
//!
//! let mut registry = GameRng::new(42);
//! let mut room = registry.fork();
//!
//! let mut replay = GameRng::new(42);
//! let mut room_replay = replay.fork();
//! assert_eq!(room.gen_range_u32(0..1000), room_replay.gen_range_u32(0..1000));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Spacing between fork seeds (golden-ratio increment).
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 stream.
///
/// The registry holds one and forks a stream per room; a room's stream
/// drives its word shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Create a stream from a seed. Equal seeds give equal streams.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::seeded(seed, 0)
    }

    fn seeded(seed: u64, forks: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks,
        }
    }

    /// Split off a child stream.
    ///
    /// The n-th fork of a given seed is always the same stream, whatever
    /// was drawn from the parent in between.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Derive a named sub-stream, e.g. `"words"` for round shuffles.
    ///
    /// Only the seed and the name matter, so the result is stable across
    /// processes and toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform draw from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        self.stream.gen_range(range)
    }

    /// Unbiased in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }

    /// Snapshot the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::seeded(state.seed, state.forks);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

/// Position of a `GameRng`, independent of how much was drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub forks: u64,
}
