//! Card value generation.
//!
//! The engine never touches an ambient RNG. It draws every card through a
//! [`CardSource`], so callers decide where randomness comes from:
//!
//! - [`GameRng`]: seeded ChaCha8, uniform over the card range. Same seed,
//!   same cards. Its position can be captured and restored.
//! - [`ScriptedSource`]: replays a fixed list of values. Used by tests.
//!
//! ```
//! use high_low::core::{CardSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.draw(), b.draw());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::CardValue;
use super::config::{CARD_MAX, CARD_MIN};

/// Source of card values.
///
/// Each call is an independent draw. Implementations must only return
/// values inside the card range, which `CardValue` already guarantees.
pub trait CardSource {
    /// Draw the next card value.
    fn draw(&mut self) -> CardValue;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> CardValue {
        (**self).draw()
    }
}

impl<S: CardSource + ?Sized> CardSource for Box<S> {
    fn draw(&mut self) -> CardValue {
        (**self).draw()
    }
}

/// Deterministic card RNG.
///
/// Uses ChaCha8 for speed; draws are uniform over `CARD_MIN..=CARD_MAX`.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
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

impl CardSource for GameRng {
    fn draw(&mut self) -> CardValue {
        let raw = self.inner.gen_range(CARD_MIN..=CARD_MAX);
        // gen_range stays inside the card range, so this never falls back.
        CardValue::new(raw).unwrap_or(CardValue::MIN)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many cards have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of card values, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<CardValue>,
    pending: VecDeque<CardValue>,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    ///
    /// Panics if `values` is empty or holds a number outside the card range.
    pub fn new(values: &[u8]) -> Self {
        assert!(!values.is_empty(), "Script must hold at least one value");
        let script: Vec<CardValue> = values
            .iter()
            .map(|&v| CardValue::new(v))
            .collect::<Option<_>>()
            .unwrap_or_else(|| panic!("Script values must be in {CARD_MIN}..={CARD_MAX}"));

        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }

    /// Values left before the script wraps around.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> CardValue {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        // Refilled above from a non-empty script.
        self.pending.pop_front().unwrap_or(self.script[0])
    }
}
