//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    BulkImportRequest, BulkImportResponse, CardListResponse, CreateCardRequest,
    CreateCategoryRequest, DeleteCardResponse, HealthResponse, ListCardsQuery, ReviewRequest,
    ReviewResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::CardId;
use crate::db::services as db_services;
use crate::models::{Flashcard, Quality};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_card_id(raw: &str) -> Result<CardId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid card id: {}", raw)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let storage = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        storage,
    }))
}

// =============================================================================
// Categories
// =============================================================================

/// GET /v1/categories
///
/// List all known category names.
pub async fn list_categories(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let categories = db_services::list_categories(state.repository.as_ref()).await?;
    Ok(Json(categories))
}

/// POST /v1/categories
///
/// Create a new category. Answers 409 when the name is already taken.
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<StatusCode, AppError> {
    db_services::create_category(state.repository.as_ref(), &request.name).await?;
    Ok(StatusCode::CREATED)
}

// =============================================================================
// Cards
// =============================================================================

/// GET /v1/cards
///
/// List cards due for review. `?all=true` lists every card; `?category=X`
/// restricts to one category.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<ListCardsQuery>,
) -> HandlerResult<CardListResponse> {
    let cards = db_services::list_cards(
        state.repository.as_ref(),
        query.include_all(),
        query.category.as_deref(),
        Utc::now(),
    )
    .await?;
    let total = cards.len();

    Ok(Json(CardListResponse { cards, total }))
}

/// POST /v1/cards
///
/// Create a card. `front` and `back` are required; `category` defaults.
pub async fn create_card(
    State(state): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Flashcard>), AppError> {
    let card = db_services::create_card(
        state.repository.as_ref(),
        &request.front,
        &request.back,
        request.category.as_deref(),
        Utc::now(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// POST /v1/cards/{id}/review
///
/// Submit a recall-quality rating for a card and reschedule it.
pub async fn review_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReviewRequest>,
) -> HandlerResult<ReviewResponse> {
    let id = parse_card_id(&id)?;
    let quality = Quality::new(request.quality)?;

    let outcome =
        db_services::review_card(state.repository.as_ref(), id, quality, Utc::now()).await?;
    Ok(Json(outcome.into()))
}

/// DELETE /v1/cards/{id}
///
/// Delete a card. Answers 404 when the id is unknown.
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DeleteCardResponse> {
    let id = parse_card_id(&id)?;
    db_services::delete_card(state.repository.as_ref(), id).await?;
    Ok(Json(DeleteCardResponse { deleted: true }))
}

/// POST /v1/cards/bulk
///
/// Import many cards from newline-separated `front;back` text.
pub async fn bulk_import(
    State(state): State<AppState>,
    Json(request): Json<BulkImportRequest>,
) -> Result<(StatusCode, Json<BulkImportResponse>), AppError> {
    let report = db_services::bulk_import(
        state.repository.as_ref(),
        &request.data,
        &request.category,
        Utc::now(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkImportResponse {
            inserted: report.inserted,
            skipped: report.skipped,
        }),
    ))
}
