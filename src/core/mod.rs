//! Core game types: card values, choices, events, state, RNG, configuration.
//!
//! Everything here is plain data. Transition logic lives in `rules`.

pub mod card;
pub mod config;
pub mod rng;
pub mod action;
pub mod state;

pub use card::{CardValue, OutOfRange};
pub use config::{GameConfig, CARD_MAX, CARD_MIN};
pub use rng::{CardSource, GameRng, GameRngState, ScriptedSource};
pub use action::{Choice, GameEvent, ParseEventError};
pub use state::{GameContext, GameState, Snapshot};
