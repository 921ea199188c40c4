//! # high-low
//!
//! A High-Low card guessing game engine.
//!
//! A round deals a left card A, the player predicts whether the right
//! card B will be higher or lower, then B is dealt and the round is won
//! or lost. Ties always lose.
//!
//! ## Design Principles
//!
//! 1. **Explicit State Machine**: Three states (`New`, `Started`,
//!    `Result`) and a pure transition function. Events a state does not
//!    accept are ignored, never errors.
//!
//! 2. **Injected Randomness**: Every card is drawn through a
//!    `CardSource`. Seeded `GameRng` for play, `ScriptedSource` for tests.
//!
//! 3. **Presentation Is Derived**: Front-ends render a `View` computed
//!    from a `Snapshot` and dispatch the events its controls carry.
//!
//! ## Modules
//!
//! - `core`: Card values, choices, events, state, RNG, configuration
//! - `rules`: Comparison rule, legal events, transitions
//! - `games`: The `GameEngine` owning one session
//! - `view`: Card faces, controls and the result banner
//!
//! ```
//! use high_low::{Choice, GameEngineBuilder, GameState, ScriptedSource, Outcome};
//!
//! let mut game = GameEngineBuilder::new().build_with(ScriptedSource::new(&[3, 7]));
//! game.start();
//! game.choose(Choice::Higher);
//!
//! assert_eq!(game.state(), GameState::Result);
//! assert_eq!(game.context().result(), Some(Outcome::Win));
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    CardValue, CardSource, GameRng, GameRngState, ScriptedSource,
    GameConfig, CARD_MIN, CARD_MAX,
    Choice, GameEvent, ParseEventError,
    GameState, GameContext, Snapshot,
};

pub use crate::rules::{compare, legal_events, transition, Outcome};

pub use crate::games::high_low::{GameEngine, GameEngineBuilder};

pub use crate::view::{CardFace, Control, View};
