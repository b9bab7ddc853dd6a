//! Service layer: business logic over any [`CardRepository`].
//!
//! These free functions orchestrate repository calls and implement the
//! behavior the HTTP handlers expose: card creation with required-field
//! checks, the fetch → schedule → persist review flow, bulk text import,
//! and category management. Handlers should call these rather than the
//! repository directly.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::CardId;
use crate::db::repository::{CardRepository, RepositoryError, RepositoryResult};
use crate::models::{CardFilter, Flashcard, Quality, ReviewOutcome, DEFAULT_CATEGORY};
use crate::scheduler;

/// Create a card from user input.
///
/// Both terms are required and must be non-blank after trimming; a missing
/// category falls back to `"default"`. The new card is due immediately.
pub async fn create_card(
    repo: &dyn CardRepository,
    front: &str,
    back: &str,
    category: Option<&str>,
    now: DateTime<Utc>,
) -> RepositoryResult<Flashcard> {
    let front = front.trim();
    let back = back.trim();
    if front.is_empty() || back.is_empty() {
        return Err(RepositoryError::validation(
            "fields 'front' and 'back' are required",
        ));
    }

    let category = match category.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_CATEGORY,
    };

    let card = Flashcard::new(front, back, category, now);
    repo.insert_card(&card).await?;
    Ok(card)
}

/// Run a review for one card: fetch its state, schedule, persist.
///
/// This is the boundary around the pure scheduler. The quality rating was
/// already validated by [`Quality`] construction, so the scheduler never
/// sees an out-of-range value. If the write-back fails (for instance the
/// card was deleted concurrently) the computed outcome is discarded and the
/// error surfaced; resubmitting the same review is safe because scheduling
/// is deterministic in the starting state.
pub async fn review_card(
    repo: &dyn CardRepository,
    id: CardId,
    quality: Quality,
    now: DateTime<Utc>,
) -> RepositoryResult<ReviewOutcome> {
    let card = repo.fetch_card(id).await?;
    let outcome = scheduler::schedule(card.review_state(), quality, now);
    repo.update_scheduling(id, &outcome).await?;
    info!(
        card_id = %id,
        quality = quality.value(),
        interval_days = outcome.interval_days,
        "card reviewed"
    );
    Ok(outcome)
}

/// Result of a bulk import: cards inserted and malformed lines skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkImportReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Import many cards from delimiter-separated text.
///
/// Each non-blank line is `front;back`; surrounding whitespace is trimmed
/// from both fields. Lines without both fields are skipped and counted.
/// Fails with a validation error when no line parses, so a wholly malformed
/// paste does not silently succeed.
pub async fn bulk_import(
    repo: &dyn CardRepository,
    text: &str,
    category: &str,
    now: DateTime<Utc>,
) -> RepositoryResult<BulkImportReport> {
    let category = category.trim();
    if category.is_empty() {
        return Err(RepositoryError::validation("a category is required"));
    }

    let mut cards = Vec::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // Fields past the second `;` are ignored.
        let mut parts = line.split(';').map(str::trim);
        match (parts.next(), parts.next()) {
            (Some(front), Some(back)) if !front.is_empty() && !back.is_empty() => {
                cards.push(Flashcard::new(front, back, category, now));
            }
            _ => {
                warn!(line, "skipping malformed bulk import line");
                skipped += 1;
            }
        }
    }

    if cards.is_empty() {
        return Err(RepositoryError::validation(
            "no valid lines to import; expected 'front;back' per line",
        ));
    }

    let inserted = repo.insert_cards(&cards).await?;
    info!(inserted, skipped, category, "bulk import finished");
    Ok(BulkImportReport { inserted, skipped })
}

/// List cards: due-only unless `include_all`, optionally per category.
pub async fn list_cards(
    repo: &dyn CardRepository,
    include_all: bool,
    category: Option<&str>,
    now: DateTime<Utc>,
) -> RepositoryResult<Vec<Flashcard>> {
    let mut filter = if include_all {
        CardFilter::all()
    } else {
        CardFilter::due_at(now)
    };
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    repo.list_cards(&filter).await
}

/// Delete a card, failing with `NotFound` when the id is unknown.
pub async fn delete_card(repo: &dyn CardRepository, id: CardId) -> RepositoryResult<()> {
    if repo.delete_card(id).await? {
        Ok(())
    } else {
        Err(RepositoryError::not_found(format!("card {} not found", id)))
    }
}

/// List all known category names.
pub async fn list_categories(repo: &dyn CardRepository) -> RepositoryResult<Vec<String>> {
    repo.list_categories().await
}

/// Create a category, failing with `Conflict` on a duplicate name.
pub async fn create_category(repo: &dyn CardRepository, name: &str) -> RepositoryResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RepositoryError::validation("a category name is required"));
    }
    repo.create_category(name).await
}

/// Check the repository is reachable.
pub async fn health_check(repo: &dyn CardRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
