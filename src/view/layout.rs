//! Card faces, controls and the text frame.

use std::fmt;

use smallvec::SmallVec;

use crate::core::{CardValue, Choice, GameEvent, GameState, Snapshot};
use crate::rules::{legal_events, Outcome};

/// Game title.
pub const TITLE: &str = "High Low";

/// What a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    /// Not dealt yet; shows `?`.
    Hidden,
    Revealed(CardValue),
}

impl From<Option<CardValue>> for CardFace {
    fn from(value: Option<CardValue>) -> Self {
        value.map_or(CardFace::Hidden, CardFace::Revealed)
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Hidden => f.pad("?"),
            CardFace::Revealed(value) => f.pad(&value.to_string()),
        }
    }
}

/// A button offered to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StartGame,
    Choose(Choice),
    PlayAgain,
}

impl Control {
    /// The event this control dispatches.
    #[must_use]
    pub fn event(self) -> GameEvent {
        match self {
            Control::StartGame => GameEvent::StartGame,
            Control::Choose(choice) => GameEvent::Choose(choice),
            Control::PlayAgain => GameEvent::Restart,
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Control::StartGame => "Start Game",
            Control::Choose(choice) => choice.label(),
            Control::PlayAgain => "Play Again",
        }
    }

    /// Shortest command the terminal front-end accepts for this control.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Control::StartGame => "s",
            Control::Choose(Choice::Higher) => "h",
            Control::Choose(Choice::Lower) => "l",
            Control::PlayAgain => "a",
        }
    }
}

impl From<GameEvent> for Control {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::StartGame => Control::StartGame,
            GameEvent::Choose(choice) => Control::Choose(choice),
            GameEvent::Restart => Control::PlayAgain,
        }
    }
}

/// Everything a front-end renders for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub left: CardFace,
    pub right: CardFace,
    /// Controls for the current state, in display order.
    pub controls: SmallVec<[Control; 2]>,
    /// Shown only once a round is decided.
    pub banner: Option<Outcome>,
}

impl From<&Snapshot> for View {
    fn from(snapshot: &Snapshot) -> Self {
        let ctx = &snapshot.context;
        let banner = match snapshot.state {
            GameState::Result => ctx.result(),
            GameState::New | GameState::Started => None,
        };

        Self {
            left: ctx.left_value().into(),
            right: ctx.right_value().into(),
            controls: legal_events(snapshot.state).into_iter().map(Control::from).collect(),
            banner,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      {TITLE}")?;
        writeln!(f, "  +------+  +------+")?;
        writeln!(f, "  | {:^4} |  | {:^4} |", self.left, self.right)?;
        writeln!(f, "  +------+  +------+")?;

        if let Some(outcome) = self.banner {
            writeln!(f, "      {}", outcome.banner())?;
        }

        let buttons: Vec<String> = self
            .controls
            .iter()
            .map(|c| format!("[{}] {}", c.key(), c.label()))
            .collect();
        write!(f, "  {}", buttons.join("  "))
    }
}
