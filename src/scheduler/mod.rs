//! Review scheduler module.
//!
//! Implements the simplified SM-2 spaced-repetition algorithm that decides
//! when a flashcard comes up for review next. The scheduler is a pure
//! function over `(state, quality, now)`; persistence of the outcome is the
//! caller's job (see [`crate::db::services::review_card`]).

pub mod sm2;

pub use sm2::schedule;

#[cfg(test)]
mod tests;
