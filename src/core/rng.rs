//! Deterministic randomness: the seeded generator and the six-sided die.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the identical sequence
//! - **Serializable**: O(1) state capture and restore via the ChaCha word position
//! - **Injectable**: effects roll through [`RandomSource`], never a global
//!
//! ```
//! use ankh_engine::core::{Die, RandomSource};
//!
//! let mut die = Die::new(7);
//! let roll = die.roll();
//! assert!((1..=6).contains(&roll));
//!
//! die.set_cheat(Some(4));
//! assert_eq!(die.roll(), 4);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::Area;

/// Deterministic RNG used for deck shuffles and die rolls.
///
/// Serializes as its [`GameRngState`] so a restored generator continues the
/// exact same sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
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

    /// Generate a value in the inclusive range.
    pub fn gen_inclusive(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
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

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// numbers have been drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Source of die rolls consumed by effects and random events.
///
/// The game state carries a [`Die`], since it must clone with checkpoints
/// and serialize with snapshots. A game takes its die through
/// `Game::with_die`; fixed rolls come from [`Die::scripted`] or
/// [`Die::set_cheat`]. Other implementors get `roll_area` for free.
pub trait RandomSource {
    /// Roll one six-sided die: a value in `1..=6`.
    fn roll(&mut self) -> u8;

    /// Pick a board area with two rolls.
    ///
    /// The first roll selects the half of the board (1-3 low, 4-6 high),
    /// the second the area within that half. Every area is equally likely.
    /// Rolls outside `1..=6` are clamped onto the die.
    fn roll_area(&mut self) -> Area {
        let half = if self.roll().clamp(1, 6) <= 3 { 0 } else { 6 };
        let code = half + self.roll().clamp(1, 6);
        Area::ALL[usize::from(code) - 1]
    }
}

/// Mixed into a game seed so die rolls and deck shuffles never share a stream.
const DIE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// The game's die.
///
/// Rolls come from, in priority order: the scripted queue, the cheat value,
/// then the seeded generator. Cheat and script values are clamped to `1..=6`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    rng: GameRng,
    cheat: Option<u8>,
    script: VecDeque<u8>,
}

impl Die {
    /// A fair die seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            cheat: None,
            script: VecDeque::new(),
        }
    }

    /// The die of a game seeded with `seed`.
    ///
    /// Runs on its own stream, apart from the deck shuffles of the same seed.
    #[must_use]
    pub fn for_game(seed: u64) -> Self {
        Self::new(seed ^ DIE_STREAM)
    }

    /// A die that returns `rolls` in order before falling back to a seed of 0.
    #[must_use]
    pub fn scripted(rolls: impl IntoIterator<Item = u8>) -> Self {
        let mut die = Self::new(0);
        die.push_rolls(rolls);
        die
    }

    /// Force every subsequent unscripted roll to `value`; `None` restores fair rolls.
    pub fn set_cheat(&mut self, value: Option<u8>) {
        self.cheat = value.map(|v| v.clamp(1, 6));
    }

    #[must_use]
    pub fn cheat(&self) -> Option<u8> {
        self.cheat
    }

    /// Queue rolls to be returned before the cheat value or the generator.
    pub fn push_rolls(&mut self, rolls: impl IntoIterator<Item = u8>) {
        self.script.extend(rolls.into_iter().map(|v| v.clamp(1, 6)));
    }

    /// Number of queued rolls not yet consumed.
    #[must_use]
    pub fn scripted_remaining(&self) -> usize {
        self.script.len()
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for Die {
    fn roll(&mut self) -> u8 {
        if let Some(value) = self.script.pop_front() {
            return value;
        }
        if let Some(value) = self.cheat {
            return value;
        }
        self.rng.gen_inclusive(1..=6)
    }
}
