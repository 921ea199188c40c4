//! High-Low game engine.

use log::{debug, trace};

use crate::core::{
    CardSource, Choice, GameConfig, GameContext, GameEvent, GameRng, GameState, Snapshot,
};
use crate::rules::{legal_events, transition};

/// Owns the game state and context of one session.
///
/// Events arrive one at a time and are handled to completion. Events the
/// current state does not accept are dropped: no state change, no error.
#[derive(Clone, Debug)]
pub struct GameEngine<S = GameRng> {
    state: GameState,
    context: GameContext,
    source: S,
}

/// Builder for creating a GameEngine.
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    config: GameConfig,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Build an engine drawing cards from a seeded `GameRng`.
    ///
    /// Without a configured seed one is taken from OS entropy and logged,
    /// so the session can be replayed.
    pub fn build(self) -> GameEngine<GameRng> {
        let seed = self.config.resolve_seed();
        debug!("high-low engine seeded with {seed}");
        GameEngine::with_source(GameRng::new(seed))
    }

    /// Build an engine drawing cards from `source`.
    pub fn build_with<S: CardSource>(self, source: S) -> GameEngine<S> {
        GameEngine::with_source(source)
    }
}

impl<S: CardSource> GameEngine<S> {
    /// Create an engine in the `New` state.
    pub fn with_source(source: S) -> Self {
        Self {
            state: GameState::New,
            context: GameContext::default(),
            source,
        }
    }

    /// Dispatch an event.
    ///
    /// Returns whether the event was handled. Ignored events leave the
    /// engine untouched.
    pub fn send(&mut self, event: GameEvent) -> bool {
        match transition(self.state, self.context, event, &mut self.source) {
            Some((state, context)) => {
                trace!("{} --{}--> {}", self.state, event, state);
                self.state = state;
                self.context = context;
                true
            }
            None => {
                debug!("ignoring {} in state {}", event, self.state);
                false
            }
        }
    }

    /// Start the first round. No-op unless in `New`.
    pub fn start(&mut self) {
        self.send(GameEvent::StartGame);
    }

    /// Predict the right card. No-op unless in `Started`.
    pub fn choose(&mut self, choice: Choice) {
        self.send(GameEvent::Choose(choice));
    }

    /// Predict from raw option text, as a UI would pass it.
    ///
    /// Empty or unrecognized options are dropped before dispatch.
    pub fn choose_option(&mut self, option: &str) {
        match option.parse::<Choice>() {
            Ok(choice) => self.choose(choice),
            Err(err) => debug!("ignoring choice option: {err}"),
        }
    }

    /// Play again after a result. No-op unless in `Result`.
    pub fn restart(&mut self) {
        self.send(GameEvent::Restart);
    }

    /// Check whether `event` would be handled in the current state.
    #[must_use]
    pub fn can_send(&self, event: GameEvent) -> bool {
        legal_events(self.state).contains(&event)
    }

    /// Current state tag.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current round context.
    #[must_use]
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Copy of the current state and context.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            context: self.context,
        }
    }

    /// The card source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
