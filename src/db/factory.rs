//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances based
//! on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "file-repo")]
use super::repositories::FileRepository;
#[cfg(feature = "local-repo")]
use super::repositories::LocalRepository;
use super::repository::{CardRepository, RepositoryError, RepositoryResult};

/// Environment variable naming the backend to use.
pub const REPOSITORY_TYPE_VAR: &str = "REPOSITORY_TYPE";

/// Environment variable pointing at the JSON snapshot for the file backend.
pub const DATA_PATH_VAR: &str = "FISZKI_DATA_PATH";

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory repository
    Local,
    /// JSON-file repository
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the environment.
    ///
    /// Reads `REPOSITORY_TYPE`; defaults to File when a data path is
    /// configured, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(REPOSITORY_TYPE_VAR) {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var(DATA_PATH_VAR).is_ok() {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `data_path` - Snapshot path (required for the File type)
    pub fn create(
        repo_type: RepositoryType,
        data_path: Option<&str>,
    ) -> RepositoryResult<Arc<dyn CardRepository>> {
        match repo_type {
            RepositoryType::Local => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Local repository feature not enabled",
                    ))
                }
            }
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    let path = data_path.ok_or_else(|| {
                        RepositoryError::configuration(
                            "File repository requires a data path (FISZKI_DATA_PATH)",
                        )
                    })?;
                    Ok(Self::create_file(path)?)
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    let _ = data_path;
                    Err(RepositoryError::configuration(
                        "File repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create a repository from environment configuration.
    pub fn from_env() -> RepositoryResult<Arc<dyn CardRepository>> {
        let repo_type = RepositoryType::from_env();
        let data_path = std::env::var(DATA_PATH_VAR).ok();
        Self::create(repo_type, data_path.as_deref())
    }

    /// Create an in-memory repository.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Arc<dyn CardRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a file-backed repository at `path`.
    #[cfg(feature = "file-repo")]
    pub fn create_file(path: &str) -> RepositoryResult<Arc<dyn CardRepository>> {
        Ok(Arc::new(FileRepository::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert_eq!("memory".parse::<RepositoryType>(), Ok(RepositoryType::Local));
        assert_eq!("file".parse::<RepositoryType>(), Ok(RepositoryType::File));
        assert_eq!("JSON".parse::<RepositoryType>(), Ok(RepositoryType::File));
        assert!("mongo".parse::<RepositoryType>().is_err());
    }

    #[cfg(feature = "local-repo")]
    #[test]
    fn test_create_local() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None);
        assert!(repo.is_ok());
    }

    #[cfg(feature = "file-repo")]
    #[test]
    fn test_create_file_requires_path() {
        let err = RepositoryFactory::create(RepositoryType::File, None)
            .err()
            .expect("creating a file repository without a path should fail");
        assert!(matches!(err, RepositoryError::Configuration(_)));
    }
}
