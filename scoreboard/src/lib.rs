//! Scoreboard - a player roster with per-row score counters
//!
//! The root component owns the canonical player list; each row embeds
//! a counter that owns its score alone. Built on trellis: every change
//! is requested through a callback and folded over the owner's state
//! at apply time, so no update ever reads a stale snapshot.

pub mod components;
pub mod console;
pub mod roster;

pub use components::Scoreboard;
pub use roster::{PlayerId, PlayerRecord, Roster, RosterError};
