//! Service-layer integration tests over the in-memory repository.

#![cfg(feature = "local-repo")]

use chrono::{Duration, Utc};
use fiszki_rust::api::CardId;
use fiszki_rust::db::repositories::LocalRepository;
use fiszki_rust::db::repository::RepositoryError;
use fiszki_rust::db::services;
use fiszki_rust::models::Quality;

fn q(value: i64) -> Quality {
    Quality::new(value).unwrap()
}

#[tokio::test]
async fn test_create_card_applies_defaults() {
    let repo = LocalRepository::new();
    let now = Utc::now();

    let card = services::create_card(&repo, "  dog ", "pies", None, now)
        .await
        .unwrap();

    assert_eq!(card.front, "dog");
    assert_eq!(card.category, "default");
    assert_eq!(card.repetitions, 0);
    assert_eq!(card.easiness, 2.5);
    assert_eq!(card.interval_days, 1);
    assert_eq!(card.next_review, now);
}

#[tokio::test]
async fn test_create_card_requires_both_terms() {
    let repo = LocalRepository::new();
    let now = Utc::now();

    let err = services::create_card(&repo, "dog", "   ", None, now)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));

    let err = services::create_card(&repo, "", "pies", None, now)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[tokio::test]
async fn test_review_flow_updates_card_and_due_list() {
    let repo = LocalRepository::new();
    let now = Utc::now();

    let card = services::create_card(&repo, "dog", "pies", Some("animals"), now)
        .await
        .unwrap();

    // The new card is due right away.
    let due = services::list_cards(&repo, false, None, now).await.unwrap();
    assert_eq!(due.len(), 1);

    let outcome = services::review_card(&repo, card.id, q(5), now).await.unwrap();
    assert_eq!(outcome.repetitions, 1);
    assert_eq!(outcome.next_review, now + Duration::days(1));

    // Reviewed a moment ago, so nothing is due until tomorrow.
    let due = services::list_cards(&repo, false, None, now).await.unwrap();
    assert!(due.is_empty());
    let all = services::list_cards(&repo, true, None, now).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].known);
}

#[tokio::test]
async fn test_review_unknown_card_is_not_found() {
    let repo = LocalRepository::new();
    let err = services::review_card(&repo, CardId::generate(), q(4), Utc::now())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_successive_reviews_follow_interval_ladder() {
    let repo = LocalRepository::new();
    let now = Utc::now();
    let card = services::create_card(&repo, "dog", "pies", Some("animals"), now)
        .await
        .unwrap();

    let first = services::review_card(&repo, card.id, q(5), now).await.unwrap();
    assert_eq!(first.interval_days, 1);

    let second = services::review_card(&repo, card.id, q(5), now).await.unwrap();
    assert_eq!(second.interval_days, 6);

    let third = services::review_card(&repo, card.id, q(5), now).await.unwrap();
    assert_eq!(third.repetitions, 3);
    // round(6 * easiness after three perfect recalls)
    assert!(third.interval_days > 6);

    let lapse = services::review_card(&repo, card.id, q(1), now).await.unwrap();
    assert_eq!(lapse.repetitions, 0);
    assert_eq!(lapse.interval_days, 1);
    assert!(!lapse.known);
}

#[tokio::test]
async fn test_delete_card_then_not_found() {
    let repo = LocalRepository::new();
    let now = Utc::now();
    let card = services::create_card(&repo, "dog", "pies", None, now)
        .await
        .unwrap();

    services::delete_card(&repo, card.id).await.unwrap();
    let err = services::delete_card(&repo, card.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_bulk_import_parses_and_skips() {
    let repo = LocalRepository::new();
    let text = "dog;pies\n\ncat ; kot \nmalformed line\nrun;biegać;extra\n;empty front\n";

    let report = services::bulk_import(&repo, text, "mixed", Utc::now())
        .await
        .unwrap();

    // dog, cat and run import; "malformed line" and ";empty front" do not.
    assert_eq!(report.inserted, 3);
    assert_eq!(report.skipped, 2);

    let all = services::list_cards(&repo, true, Some("mixed"), Utc::now())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    let cat = all.iter().find(|c| c.front == "cat").unwrap();
    assert_eq!(cat.back, "kot");
    let run = all.iter().find(|c| c.front == "run").unwrap();
    assert_eq!(run.back, "biegać");
}

#[tokio::test]
async fn test_bulk_import_rejects_fully_malformed_text() {
    let repo = LocalRepository::new();

    let err = services::bulk_import(&repo, "no delimiters here\n\n", "mixed", Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));

    let err = services::bulk_import(&repo, "dog;pies", "  ", Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[tokio::test]
async fn test_category_lifecycle() {
    let repo = LocalRepository::new();
    let now = Utc::now();

    services::create_category(&repo, "idioms").await.unwrap();
    let err = services::create_category(&repo, "idioms").await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    services::create_card(&repo, "dog", "pies", Some("animals"), now)
        .await
        .unwrap();

    let categories = services::list_categories(&repo).await.unwrap();
    assert_eq!(categories, vec!["animals".to_string(), "idioms".to_string()]);
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
