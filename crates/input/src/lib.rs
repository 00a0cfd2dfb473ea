//! Terminal input module.
//!
//! Maps `crossterm` events into the few [`Control`]s the demo reacts to.
//! There is no gameplay input: the session never sees a key.

pub mod map;

pub use map::{map_event, should_quit, Control};
