use chrono::{Duration, Utc};

use super::schedule;
use crate::models::{Quality, ReviewState, MIN_EASINESS};

const EPS: f64 = 1e-9;

fn q(value: i64) -> Quality {
    Quality::new(value).unwrap()
}

fn state(repetitions: u32, easiness: f64, interval_days: u32) -> ReviewState {
    ReviewState {
        repetitions,
        easiness,
        interval_days,
    }
}

#[test]
fn first_successful_review_of_new_card() {
    // Scenario: fresh card, perfect recall.
    let now = Utc::now();
    let out = schedule(state(0, 2.5, 1), q(5), now);

    assert_eq!(out.repetitions, 1);
    assert_eq!(out.interval_days, 1);
    assert!((out.easiness - 2.6).abs() < EPS);
    assert!(out.known);
    assert_eq!(out.next_review, now + Duration::days(1));
}

#[test]
fn second_success_jumps_to_six_days() {
    let now = Utc::now();
    let out = schedule(state(1, 2.6, 1), q(5), now);

    assert_eq!(out.repetitions, 2);
    assert_eq!(out.interval_days, 6);
    assert!((out.easiness - 2.7).abs() < EPS);
    assert_eq!(out.next_review, now + Duration::days(6));
}

#[test]
fn third_success_multiplies_old_interval_by_new_easiness() {
    let now = Utc::now();
    let out = schedule(state(2, 2.6, 6), q(4), now);

    // Quality 4 leaves easiness unchanged: 0.1 - 1*(0.08 + 0.02) = 0.
    assert!((out.easiness - 2.6).abs() < EPS);
    assert_eq!(out.repetitions, 3);
    // round(6 * 2.6) = 16, computed from the interval *before* this review.
    assert_eq!(out.interval_days, 16);
}

#[test]
fn lapse_resets_streak_and_interval() {
    let now = Utc::now();
    let out = schedule(state(5, 2.0, 20), q(1), now);

    assert_eq!(out.repetitions, 0);
    assert_eq!(out.interval_days, 1);
    // 2.0 + (0.1 - 4*(0.08 + 4*0.02)) = 2.0 - 0.54 = 1.46
    assert!((out.easiness - 1.46).abs() < EPS);
    assert!(!out.known);
    assert_eq!(out.next_review, now + Duration::days(1));
}

#[test]
fn easiness_never_drops_below_floor() {
    let now = Utc::now();
    let mut current = state(0, 2.5, 1);

    // Quality 0 subtracts 0.8 each time; the floor must hold forever.
    for _ in 0..20 {
        let out = schedule(current, q(0), now);
        assert!(out.easiness >= MIN_EASINESS);
        current = state(out.repetitions, out.easiness, out.interval_days);
    }
    assert!((current.easiness - MIN_EASINESS).abs() < EPS);
}

#[test]
fn interval_is_always_at_least_one_day() {
    let now = Utc::now();
    for quality in 0..=5 {
        for reps in 0..6 {
            let out = schedule(state(reps, MIN_EASINESS, 1), q(quality), now);
            assert!(out.interval_days >= 1, "quality={} reps={}", quality, reps);
        }
    }
}

#[test]
fn repetitions_increase_by_one_per_success_until_lapse() {
    let now = Utc::now();
    let mut current = state(0, 2.5, 1);

    for expected in 1..=6 {
        let out = schedule(current, q(4), now);
        assert_eq!(out.repetitions, expected);
        current = state(out.repetitions, out.easiness, out.interval_days);
    }

    let lapsed = schedule(current, q(2), now);
    assert_eq!(lapsed.repetitions, 0);
}

#[test]
fn identical_inputs_yield_identical_outcomes() {
    let now = Utc::now();
    let s = state(3, 2.1, 12);

    let a = schedule(s, q(3), now);
    let b = schedule(s, q(3), now);
    assert_eq!(a, b);
}

#[test]
fn quality_three_is_a_success() {
    let now = Utc::now();
    let out = schedule(state(0, 2.5, 1), q(3), now);

    assert_eq!(out.repetitions, 1);
    assert!(out.known);
    // 2.5 + (0.1 - 2*(0.08 + 2*0.02)) = 2.5 - 0.14 = 2.36
    assert!((out.easiness - 2.36).abs() < EPS);
}

#[test]
fn growth_compounds_over_a_long_success_streak() {
    let now = Utc::now();
    let mut current = state(0, 2.5, 1);

    for _ in 0..8 {
        let out = schedule(current, q(5), now);
        current = state(out.repetitions, out.easiness, out.interval_days);
    }

    // Eight perfect recalls: intervals 1, 6 then ×easiness each round.
    assert_eq!(current.repetitions, 8);
    assert!(current.interval_days > 100);
    assert!(current.easiness > 3.0);
}
