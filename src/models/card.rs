//! The `Flashcard` entity and review-scheduling value types.
//!
//! A flashcard pairs a source-language term (`front`) with its translation
//! (`back`) under a category label. The scheduling fields (`repetitions`,
//! `easiness`, `interval_days`, `next_review`, `known`) are owned by the
//! review scheduler; nothing else mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::CardId;

/// Initial easiness factor for a freshly created card.
pub const INITIAL_EASINESS: f64 = 2.5;

/// Lower bound for the easiness factor. Intervals would collapse below this.
pub const MIN_EASINESS: f64 = 1.3;

/// Category assigned when a card is created without one.
pub const DEFAULT_CATEGORY: &str = "default";

/// A bilingual flashcard with its spaced-repetition scheduling state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Storage identifier, assigned on insert.
    pub id: CardId,
    /// Source-language term. Immutable after creation.
    pub front: String,
    /// Target-language term. Immutable after creation.
    pub back: String,
    /// Category label the card belongs to.
    pub category: String,
    /// Consecutive successful recalls since the last lapse.
    pub repetitions: u32,
    /// Easiness factor, always `>= 1.3`. Higher means easier.
    pub easiness: f64,
    /// Days until the next review, always `>= 1`.
    pub interval_days: u32,
    /// The card is due when this is at or before the current time.
    pub next_review: DateTime<Utc>,
    /// True when the most recent review scored quality >= 3.
    pub known: bool,
    /// Creation timestamp. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    /// Build a new card with the initial scheduling state.
    ///
    /// New cards are due immediately: `next_review` is set to `now` so they
    /// show up in the very next study session.
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        category: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Flashcard {
            id: CardId::generate(),
            front: front.into(),
            back: back.into(),
            category: category.into(),
            repetitions: 0,
            easiness: INITIAL_EASINESS,
            interval_days: 1,
            next_review: now,
            known: false,
            created_at: now,
        }
    }

    /// Current scheduling state, as consumed by the scheduler.
    pub fn review_state(&self) -> ReviewState {
        ReviewState {
            repetitions: self.repetitions,
            easiness: self.easiness,
            interval_days: self.interval_days,
        }
    }

    /// Whether the card is due for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Copy a scheduling outcome back onto the card.
    pub fn apply_outcome(&mut self, outcome: &ReviewOutcome) {
        self.repetitions = outcome.repetitions;
        self.easiness = outcome.easiness;
        self.interval_days = outcome.interval_days;
        self.next_review = outcome.next_review;
        self.known = outcome.known;
    }
}

/// The scheduling fields the scheduler reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    pub repetitions: u32,
    pub easiness: f64,
    pub interval_days: u32,
}

/// The scheduling fields the scheduler produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub repetitions: u32,
    pub easiness: f64,
    pub interval_days: u32,
    pub next_review: DateTime<Utc>,
    pub known: bool,
}

/// Error produced when a recall-quality rating is outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quality must be between 0 and 5, got {0}")]
pub struct QualityError(pub i64);

/// A validated recall-quality rating.
///
/// 0 is a total failure, 5 a perfect recall. Ratings below 3 are lapses and
/// reset the repetition streak. Construction validates the range so the
/// scheduler never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: i64) -> Result<Self, QualityError> {
        if (0..=5).contains(&value) {
            Ok(Quality(value as u8))
        } else {
            Err(QualityError(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// A rating below 3 is a lapse.
    pub fn is_lapse(&self) -> bool {
        self.0 < 3
    }
}

impl TryFrom<i64> for Quality {
    type Error = QualityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Quality::new(value)
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Quality::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Filter for listing cards.
///
/// Mirrors the study client's query surface: due-only by default, optionally
/// restricted to a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFilter {
    /// When set, only cards with `next_review <= due_before` match.
    pub due_before: Option<DateTime<Utc>>,
    /// When set, only cards in this category match.
    pub category: Option<String>,
}

impl CardFilter {
    /// Cards due at `now`, across all categories.
    pub fn due_at(now: DateTime<Utc>) -> Self {
        CardFilter {
            due_before: Some(now),
            category: None,
        }
    }

    /// All cards, across all categories.
    pub fn all() -> Self {
        CardFilter::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether `card` matches this filter.
    pub fn matches(&self, card: &Flashcard) -> bool {
        if let Some(due_before) = self.due_before {
            if card.next_review > due_before {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &card.category != category {
                return false;
            }
        }
        true
    }
}
