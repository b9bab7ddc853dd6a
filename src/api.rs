//! Public API surface for the flashcard backend.
//!
//! This file consolidates the typed identifiers and DTO types used by the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::models::{CardFilter, Flashcard, Quality, ReviewOutcome, ReviewState};

/// Flashcard identifier (storage primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub Uuid);

impl CardId {
    /// Generate a fresh identifier for a new card.
    pub fn generate() -> Self {
        CardId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(CardId)
    }
}
