//! Player choices and game events.
//!
//! Events are what the front-end sends to the engine. Text input from a
//! terminal or form is parsed into events here, so a malformed option is
//! rejected before it ever reaches a transition.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The player's prediction for the right card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Right card will be strictly greater than the left one.
    Higher,
    /// Right card will be strictly less than the left one.
    Lower,
}

impl Choice {
    /// Both choices, in display order.
    pub const ALL: [Choice; 2] = [Choice::Higher, Choice::Lower];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Higher => "Higher",
            Choice::Lower => "Lower",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Higher => write!(f, "higher"),
            Choice::Lower => write!(f, "lower"),
        }
    }
}

impl FromStr for Choice {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseEventError::Empty);
        }
        match s.to_ascii_lowercase().as_str() {
            "higher" | "h" => Ok(Choice::Higher),
            "lower" | "l" => Ok(Choice::Lower),
            _ => Err(ParseEventError::UnknownChoice(s.to_string())),
        }
    }
}

/// An event dispatched to the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Leave the initial state and deal the first left card.
    StartGame,
    /// Commit a prediction; deals the right card.
    Choose(Choice),
    /// Play again after a result.
    Restart,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::StartGame => write!(f, "START_GAME"),
            GameEvent::Choose(choice) => write!(f, "USER_CHOOSE({choice})"),
            GameEvent::Restart => write!(f, "RESTART"),
        }
    }
}

impl FromStr for GameEvent {
    type Err = ParseEventError;

    /// Parse a terminal command: `start`, `higher`/`h`, `lower`/`l`,
    /// `again`/`restart`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseEventError::Empty);
        }
        match s.to_ascii_lowercase().as_str() {
            "start" | "s" => Ok(GameEvent::StartGame),
            "again" | "restart" | "a" => Ok(GameEvent::Restart),
            _ => match s.parse::<Choice>() {
                Ok(choice) => Ok(GameEvent::Choose(choice)),
                Err(_) => Err(ParseEventError::UnknownCommand(s.to_string())),
            },
        }
    }
}

/// Errors from parsing text input into choices or events.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("empty input")]
    Empty,
    #[error("unknown choice {0:?}, expected higher or lower")]
    UnknownChoice(String),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}
