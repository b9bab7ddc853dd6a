//! Repository trait and error types for flashcard storage.

pub mod cards;
pub mod error;

pub use cards::CardRepository;
pub use error::{RepositoryError, RepositoryResult};
