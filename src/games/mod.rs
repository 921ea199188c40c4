//! Playable games built on the core types and rules.

pub mod high_low;
