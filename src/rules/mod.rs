//! Game rules.
//!
//! - The comparison rule deciding a round
//! - Which events each state accepts
//! - The transition function
//!
//! Everything here is a plain function of its inputs. Card draws come in
//! through a `CardSource`, so the same source yields the same game.

pub mod engine;

pub use engine::{compare, legal_events, transition, Outcome};
