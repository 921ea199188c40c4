//! Game state: the state tag and the round context.
//!
//! ## GameState
//!
//! Which of the three states the engine is in. There is no terminal
//! state; `Result` always leads back to `Started`.
//!
//! ## GameContext
//!
//! The values of the current round. Only the rules module mutates it, so
//! the pairing invariants hold for every context a caller can observe:
//! - `right` and `choice` are both set or both unset
//! - `result` is set exactly when the engine is in `Result`
//! - `left` is set in every state except `New`

use serde::{Deserialize, Serialize};

use super::action::Choice;
use super::card::CardValue;
use crate::rules::Outcome;

/// Engine state tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Waiting for the first start.
    #[default]
    New,
    /// Left card dealt, waiting for a choice.
    Started,
    /// Right card dealt, outcome known.
    Result,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::New => write!(f, "new"),
            GameState::Started => write!(f, "started"),
            GameState::Result => write!(f, "result"),
        }
    }
}

/// Values of the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameContext {
    left: Option<CardValue>,
    right: Option<CardValue>,
    choice: Option<Choice>,
    result: Option<Outcome>,
}

impl GameContext {
    /// Fresh round context: a new left card, everything else cleared.
    pub(crate) fn dealt(left: CardValue) -> Self {
        Self {
            left: Some(left),
            ..Self::default()
        }
    }

    /// Record the right card and the prediction, then the outcome.
    pub(crate) fn resolved(self, right: CardValue, choice: Choice) -> Self {
        let mut next = Self {
            right: Some(right),
            choice: Some(choice),
            ..self
        };
        next.result = Some(crate::rules::compare(next.left, next.right, next.choice));
        next
    }

    /// Left card (number A).
    #[must_use]
    pub fn left_value(&self) -> Option<CardValue> {
        self.left
    }

    /// Right card (number B).
    #[must_use]
    pub fn right_value(&self) -> Option<CardValue> {
        self.right
    }

    /// The prediction for this round.
    #[must_use]
    pub fn user_choice(&self) -> Option<Choice> {
        self.choice
    }

    /// Outcome of this round.
    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }
}

/// Read-only copy of the engine's state and context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub context: GameContext,
}

impl Snapshot {
    /// Check whether the engine is in `state`.
    #[must_use]
    pub fn matches(&self, state: GameState) -> bool {
        self.state == state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(v: u8) -> CardValue {
        CardValue::new(v).unwrap()
    }

    #[test]
    fn test_default_context_is_empty() {
        let ctx = GameContext::default();
        assert_eq!(ctx.left_value(), None);
        assert_eq!(ctx.right_value(), None);
        assert_eq!(ctx.user_choice(), None);
        assert_eq!(ctx.result(), None);
    }

    #[test]
    fn test_dealt_clears_round() {
        let done = GameContext::dealt(card(3)).resolved(card(7), Choice::Higher);
        assert!(done.result().is_some());

        let fresh = GameContext::dealt(card(9));
        assert_eq!(fresh.left_value(), Some(card(9)));
        assert_eq!(fresh.right_value(), None);
        assert_eq!(fresh.user_choice(), None);
        assert_eq!(fresh.result(), None);
    }

    #[test]
    fn test_resolved_sets_result_after_values() {
        let ctx = GameContext::dealt(card(8)).resolved(card(2), Choice::Lower);
        assert_eq!(ctx.left_value(), Some(card(8)));
        assert_eq!(ctx.right_value(), Some(card(2)));
        assert_eq!(ctx.user_choice(), Some(Choice::Lower));
        assert_eq!(ctx.result(), Some(Outcome::Win));
    }

    #[test]
    fn test_state_display_and_default() {
        assert_eq!(GameState::default(), GameState::New);
        assert_eq!(GameState::Started.to_string(), "started");
        assert_eq!(GameState::Result.to_string(), "result");
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = Snapshot {
            state: GameState::Result,
            context: GameContext::dealt(card(4)).resolved(card(4), Choice::Higher),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"result\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert!(back.matches(GameState::Result));
    }
}
