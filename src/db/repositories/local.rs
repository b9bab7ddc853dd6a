//! In-memory repository implementation.
//!
//! Used for unit testing and local development. All state lives behind a
//! single `RwLock`, so mutations are atomic with respect to each other and
//! a scheduling update racing a delete observes `NotFound` rather than
//! reinserting the card.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::store::CardStore;
use crate::api::CardId;
use crate::db::repository::{CardRepository, RepositoryResult};
use crate::models::{CardFilter, Flashcard, ReviewOutcome};

/// In-memory implementation of [`CardRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    store: RwLock<CardStore>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards currently stored. Test helper.
    pub fn card_count(&self) -> usize {
        self.store.read().card_count()
    }
}

#[async_trait]
impl CardRepository for LocalRepository {
    async fn insert_card(&self, card: &Flashcard) -> RepositoryResult<()> {
        self.store.write().insert_card(card)
    }

    async fn insert_cards(&self, cards: &[Flashcard]) -> RepositoryResult<usize> {
        self.store.write().insert_cards(cards)
    }

    async fn fetch_card(&self, id: CardId) -> RepositoryResult<Flashcard> {
        self.store.read().fetch_card(id)
    }

    async fn update_scheduling(
        &self,
        id: CardId,
        outcome: &ReviewOutcome,
    ) -> RepositoryResult<()> {
        self.store.write().update_scheduling(id, outcome)
    }

    async fn delete_card(&self, id: CardId) -> RepositoryResult<bool> {
        Ok(self.store.write().delete_card(id))
    }

    async fn list_cards(&self, filter: &CardFilter) -> RepositoryResult<Vec<Flashcard>> {
        Ok(self.store.read().list_cards(filter))
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.store.read().list_categories())
    }

    async fn create_category(&self, name: &str) -> RepositoryResult<()> {
        self.store.write().create_category(name)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
