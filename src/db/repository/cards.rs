//! Card repository trait.
//!
//! Defines the storage operations the flashcard backend needs: card CRUD,
//! filtered listing, the scheduling write-back after a review, and the
//! category set.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::CardId;
use crate::models::{CardFilter, Flashcard, ReviewOutcome};

/// Repository trait for flashcard storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust. Each
/// mutation must be atomic with respect to other calls on the same
/// repository; in particular [`update_scheduling`](Self::update_scheduling)
/// must fail with `NotFound` rather than reinsert a card deleted by a
/// concurrent caller.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Insert a new card.
    ///
    /// Registers the card's category as a side effect. Fails with
    /// `Conflict` if a card with the same id already exists.
    async fn insert_card(&self, card: &Flashcard) -> RepositoryResult<()>;

    /// Insert a batch of cards in one operation.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of cards inserted
    async fn insert_cards(&self, cards: &[Flashcard]) -> RepositoryResult<usize>;

    /// Fetch a card by id.
    ///
    /// # Returns
    /// * `Ok(Flashcard)` - The card
    /// * `Err(RepositoryError::NotFound)` - If no card has this id
    async fn fetch_card(&self, id: CardId) -> RepositoryResult<Flashcard>;

    /// Write a review outcome back onto a card's scheduling fields.
    ///
    /// Only scheduling fields change; `front`, `back`, `category` and
    /// `created_at` are untouched.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the card vanished since it
    ///   was fetched (concurrent delete)
    async fn update_scheduling(&self, id: CardId, outcome: &ReviewOutcome)
        -> RepositoryResult<()>;

    /// Delete a card by id.
    ///
    /// # Returns
    /// * `Ok(true)` - A card was removed
    /// * `Ok(false)` - No card had this id
    async fn delete_card(&self, id: CardId) -> RepositoryResult<bool>;

    /// List cards matching a filter, ordered by `next_review` ascending.
    async fn list_cards(&self, filter: &CardFilter) -> RepositoryResult<Vec<Flashcard>>;

    /// List all known category names, sorted and de-duplicated.
    ///
    /// Includes both explicitly created categories and categories that only
    /// exist through the cards that use them.
    async fn list_categories(&self) -> RepositoryResult<Vec<String>>;

    /// Register a category name.
    ///
    /// # Returns
    /// * `Err(RepositoryError::Conflict)` - If the category already exists
    async fn create_category(&self, name: &str) -> RepositoryResult<()>;

    /// Check that the backing store is reachable and consistent.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
