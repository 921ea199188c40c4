//! Game configuration.
//!
//! The card range is fixed; the only tunable is the RNG seed. A missing
//! seed is resolved from OS entropy when the engine is built.

use serde::{Deserialize, Serialize};

/// Lowest value a card can show.
pub const CARD_MIN: u8 = 1;

/// Highest value a card can show.
pub const CARD_MAX: u8 = 10;

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the card RNG. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with no fixed seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or a fresh one from OS entropy.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
