//! Presentation model.
//!
//! A `View` is derived from a `Snapshot` and says what a front-end shows:
//! the two card faces, which controls are offered, and the result banner.
//! It holds no state of its own.

mod layout;

pub use layout::{CardFace, Control, View, TITLE};
