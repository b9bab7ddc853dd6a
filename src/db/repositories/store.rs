//! Synchronous in-memory card store shared by the local and file backends.
//!
//! Both backends keep the working set in memory; the file backend
//! additionally snapshots this structure to disk after each mutation. All
//! methods here run under the owning repository's lock.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::api::CardId;
use crate::db::repository::{RepositoryError, RepositoryResult};
use crate::models::{CardFilter, Flashcard, ReviewOutcome};

/// In-memory card and category set.
///
/// Serializable so the file backend can snapshot it verbatim.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct CardStore {
    cards: HashMap<CardId, Flashcard>,
    /// Explicitly created categories. Categories that only exist through
    /// cards are derived at query time.
    categories: BTreeSet<String>,
}

impl CardStore {
    pub fn insert_card(&mut self, card: &Flashcard) -> RepositoryResult<()> {
        if self.cards.contains_key(&card.id) {
            return Err(RepositoryError::conflict(format!(
                "card {} already exists",
                card.id
            )));
        }
        self.categories.insert(card.category.clone());
        self.cards.insert(card.id, card.clone());
        Ok(())
    }

    pub fn insert_cards(&mut self, cards: &[Flashcard]) -> RepositoryResult<usize> {
        for card in cards {
            self.insert_card(card)?;
        }
        Ok(cards.len())
    }

    pub fn fetch_card(&self, id: CardId) -> RepositoryResult<Flashcard> {
        self.cards
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("card {} not found", id)))
    }

    pub fn update_scheduling(
        &mut self,
        id: CardId,
        outcome: &ReviewOutcome,
    ) -> RepositoryResult<()> {
        let card = self
            .cards
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(format!("card {} not found", id)))?;
        card.apply_outcome(outcome);
        Ok(())
    }

    pub fn delete_card(&mut self, id: CardId) -> bool {
        self.cards.remove(&id).is_some()
    }

    pub fn list_cards(&self, filter: &CardFilter) -> Vec<Flashcard> {
        let mut cards: Vec<Flashcard> = self
            .cards
            .values()
            .filter(|card| filter.matches(card))
            .cloned()
            .collect();
        cards.sort_by_key(|card| (card.next_review, card.created_at, card.id));
        cards
    }

    pub fn list_categories(&self) -> Vec<String> {
        let mut all: BTreeSet<String> = self.categories.clone();
        all.extend(self.cards.values().map(|card| card.category.clone()));
        all.into_iter().collect()
    }

    pub fn create_category(&mut self, name: &str) -> RepositoryResult<()> {
        let exists = self.categories.contains(name)
            || self.cards.values().any(|card| card.category == name);
        if exists {
            return Err(RepositoryError::conflict(format!(
                "category '{}' already exists",
                name
            )));
        }
        self.categories.insert(name.to_string());
        Ok(())
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
