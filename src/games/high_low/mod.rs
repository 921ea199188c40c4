//! The High-Low card guessing game.
//!
//! - Start: the left card shows a random number A in 1..=10
//! - Predict whether the right card B will be higher or lower
//! - B is revealed; strictly beyond A in the predicted direction wins
//! - Play again re-deals A and waits for the next prediction

mod game;

pub use game::{GameEngine, GameEngineBuilder};
