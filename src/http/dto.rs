//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The `Flashcard` entity itself already derives Serialize/Deserialize and
//! is returned as-is where the full card is the natural payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::models::Flashcard;

/// Request body for creating a new card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    /// Source-language term
    pub front: String,
    /// Target-language term
    pub back: String,
    /// Category label (defaults to "default" when omitted)
    #[serde(default)]
    pub category: Option<String>,
}

/// Request body for submitting a review.
///
/// `quality` is deliberately a raw integer rather than [`crate::models::Quality`]:
/// an out-of-range rating must answer 400, not a deserialization failure
/// with an opaque body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Recall-quality rating, 0 (total failure) to 5 (perfect recall)
    pub quality: i64,
}

/// Response for a submitted review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// When the card comes up next (RFC 3339)
    pub next_review: DateTime<Utc>,
    /// Days until the next review
    pub interval_days: u32,
    /// Consecutive successes since the last lapse
    pub repetitions: u32,
    /// Updated easiness factor
    pub easiness: f64,
    /// Whether the last rating counted as a success
    pub known: bool,
}

impl From<crate::models::ReviewOutcome> for ReviewResponse {
    fn from(outcome: crate::models::ReviewOutcome) -> Self {
        Self {
            next_review: outcome.next_review,
            interval_days: outcome.interval_days,
            repetitions: outcome.repetitions,
            easiness: outcome.easiness,
            known: outcome.known,
        }
    }
}

/// Query parameters for listing cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListCardsQuery {
    /// When "true", list every card instead of only due ones
    #[serde(default)]
    pub all: Option<String>,
    /// Restrict to one category
    #[serde(default)]
    pub category: Option<String>,
}

impl ListCardsQuery {
    /// The `all` flag arrives as a query-string literal.
    pub fn include_all(&self) -> bool {
        self.all.as_deref() == Some("true")
    }
}

/// Request body for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request body for bulk-importing cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkImportRequest {
    /// Newline-separated `front;back` pairs
    pub data: String,
    /// Category for every imported card
    pub category: String,
}

/// Response for a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkImportResponse {
    /// Cards inserted
    pub inserted: usize,
    /// Malformed lines skipped
    pub skipped: usize,
}

/// Response for a card deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCardResponse {
    pub deleted: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub storage: String,
}

/// Card list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListResponse {
    /// Cards matching the query, ordered by next review
    pub cards: Vec<Flashcard>,
    /// Total count
    pub total: usize,
}
