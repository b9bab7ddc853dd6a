//! Domain model types for the flashcard backend.

pub mod card;

pub use card::{
    CardFilter, Flashcard, Quality, QualityError, ReviewOutcome, ReviewState, DEFAULT_CATEGORY,
    INITIAL_EASINESS, MIN_EASINESS,
};
