//! Player records and roster configuration
//!
//! The roster is the seed data the scoreboard owns at creation. It
//! comes from the built-in seed or from a JSON file (an array of
//! records); ids must be pairwise distinct.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable player identity, unique within a roster, never reused
pub type PlayerId = u64;

/// One player entry. Immutable once created; there is no rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
}

/// An ordered player collection, unique by id. Insertion order is
/// display order.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate player id {0} in roster")]
    DuplicateId(PlayerId),
}

impl Roster {
    /// Validate id uniqueness, keeping the given order.
    pub fn new(players: Vec<PlayerRecord>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.id) {
                return Err(RosterError::DuplicateId(player.id));
            }
        }
        Ok(Self { players })
    }

    /// Load a roster from a JSON file: an array of `{ "id", "name" }`.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let raw = fs::read_to_string(path)?;
        let players: Vec<PlayerRecord> = serde_json::from_str(&raw)?;
        Self::new(players)
    }

    /// The built-in four-player seed.
    pub fn seed() -> Self {
        Self {
            players: vec![
                PlayerRecord {
                    id: 1,
                    name: "Alan".to_string(),
                },
                PlayerRecord {
                    id: 2,
                    name: "Ruth".to_string(),
                },
                PlayerRecord {
                    id: 3,
                    name: "Matthew".to_string(),
                },
                PlayerRecord {
                    id: 4,
                    name: "Lucy".to_string(),
                },
            ],
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }
}
