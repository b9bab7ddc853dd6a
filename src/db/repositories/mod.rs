//! Repository implementations module.
//!
//! This module contains different implementations of the `CardRepository`
//! trait:
//! - `local`: In-memory implementation for unit testing and local development
//! - `file`: JSON-file implementation for single-user persistent deployments
#[cfg(feature = "file-repo")]
pub mod file;
#[cfg(feature = "local-repo")]
pub mod local;
#[cfg(any(feature = "local-repo", feature = "file-repo"))]
pub(crate) mod store;

#[cfg(feature = "file-repo")]
pub use file::FileRepository;
#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
