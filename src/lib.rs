//! # Fiszki Rust Backend
//!
//! Spaced-repetition flashcard backend.
//!
//! This crate stores bilingual word pairs ("fiszki") grouped by category and
//! schedules their review with a simplified SM-2 algorithm. The backend
//! exposes a REST API via Axum for the single-page study client.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Typed identifiers and DTO re-exports for the HTTP API
//! - [`models`]: The `Flashcard` entity and review-scheduling value types
//! - [`scheduler`]: The SM-2 review scheduler (the algorithmic core)
//! - [`db`]: Repository pattern, storage backends, and the service layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The scheduler is a pure function over `(state, quality, now)`; everything
//! that touches storage goes through the [`db::services`] layer so the HTTP
//! handlers stay thin.

pub mod api;

pub mod db;
pub mod models;

pub mod scheduler;

#[cfg(feature = "http-server")]
pub mod http;
