//! Storage module for flashcard data.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers)                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Required-field checks                                 │
//! │  - Review orchestration (fetch → schedule → persist)     │
//! │  - Bulk import parsing                                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────┬───────────────────────┐
//!     │     Local Repository     │    File Repository    │
//!     │       (in-memory)        │    (JSON snapshot)    │
//!     └──────────────────────────┴───────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! Use the service layer rather than calling repositories directly:
//!
//! ```ignore
//! use fiszki_rust::db::{factory::RepositoryFactory, services};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let repo = RepositoryFactory::create_local();
//!     let categories = services::list_categories(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "local-repo", feature = "file-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "file-repo")]
pub use repositories::FileRepository;
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{CardRepository, RepositoryError, RepositoryResult};
