//! Comparison rule and state transitions.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::action::{Choice, GameEvent};
use crate::core::card::CardValue;
use crate::core::rng::CardSource;
use crate::core::state::{GameContext, GameState};

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Check if the round was won.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }

    /// Banner text for this outcome.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Outcome::Win => "WIN!",
            Outcome::Lose => "LOSE!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}

/// Decide a round.
///
/// `Higher` wins only on a strictly greater right card, `Lower` only on a
/// strictly smaller one. Ties always lose, and so does any missing input.
#[must_use]
pub fn compare(left: Option<CardValue>, right: Option<CardValue>, choice: Option<Choice>) -> Outcome {
    let (Some(left), Some(right), Some(choice)) = (left, right, choice) else {
        return Outcome::Lose;
    };

    let won = match choice {
        Choice::Higher => right > left,
        Choice::Lower => right < left,
    };

    if won {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Events accepted in `state`. Anything else is ignored.
#[must_use]
pub fn legal_events(state: GameState) -> SmallVec<[GameEvent; 2]> {
    match state {
        GameState::New => smallvec![GameEvent::StartGame],
        GameState::Started => Choice::ALL.iter().map(|&c| GameEvent::Choose(c)).collect(),
        GameState::Result => smallvec![GameEvent::Restart],
    }
}

/// Apply `event` to `(state, context)`.
///
/// Returns the next state and context, or `None` when the event is not
/// handled in `state`. Cards are drawn from `source` only when a
/// transition is taken.
pub fn transition<S: CardSource + ?Sized>(
    state: GameState,
    context: GameContext,
    event: GameEvent,
    source: &mut S,
) -> Option<(GameState, GameContext)> {
    match (state, event) {
        (GameState::New, GameEvent::StartGame) | (GameState::Result, GameEvent::Restart) => {
            Some((GameState::Started, GameContext::dealt(source.draw())))
        }
        (GameState::Started, GameEvent::Choose(choice)) => {
            let right = source.draw();
            Some((GameState::Result, context.resolved(right, choice)))
        }
        _ => None,
    }
}
