//! Simplified SM-2 scheduling.
//!
//! Given the card's current scheduling state and a recall-quality rating,
//! compute the updated state and the next review date. The easiness update
//! applies a concave penalty: a perfect recall (quality 5) nudges easiness
//! up by 0.1, while a total failure (quality 0) drops it by 0.8, clamped at
//! the 1.3 floor.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Quality, ReviewOutcome, ReviewState, MIN_EASINESS};

/// Interval after the first successful recall, in days.
const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second consecutive successful recall, in days.
const SECOND_INTERVAL_DAYS: u32 = 6;

/// Compute the next scheduling state for a card after a review.
///
/// Deterministic and side-effect free: identical `(state, quality, now)`
/// inputs always produce identical outcomes. Guarantees that the returned
/// easiness is at least 1.3 and the returned interval at least one day.
///
/// From the third consecutive success onward the new interval is the
/// *previous* interval multiplied by the *updated* easiness, rounded to the
/// nearest day. The ordering (new easiness, old interval) matches the
/// shipped behavior and is intentional; do not swap it for the textbook
/// variant without product confirmation.
pub fn schedule(state: ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewOutcome {
    let q = f64::from(quality.value());
    let easiness = (state.easiness + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
        .max(MIN_EASINESS);

    let (repetitions, interval_days) = if quality.is_lapse() {
        // Full reset: streak back to zero, next review tomorrow.
        (0, FIRST_INTERVAL_DAYS)
    } else {
        let repetitions = state.repetitions + 1;
        let interval_days = match repetitions {
            1 => FIRST_INTERVAL_DAYS,
            2 => SECOND_INTERVAL_DAYS,
            _ => (f64::from(state.interval_days) * easiness).round().max(1.0) as u32,
        };
        (repetitions, interval_days)
    };

    ReviewOutcome {
        repetitions,
        easiness,
        interval_days,
        next_review: now + Duration::days(i64::from(interval_days)),
        known: !quality.is_lapse(),
    }
}
