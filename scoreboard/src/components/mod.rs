//! Scoreboard components
//!
//! Ownership follows one rule: state lives with the component that
//! owns it and flows down read-only; change requests flow back up
//! through callbacks.

mod counter;
mod header;
mod player;
mod scoreboard;

pub use counter::*;
pub use header::*;
pub use player::*;
pub use scoreboard::*;
