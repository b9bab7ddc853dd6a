//! JSON-file repository implementation.
//!
//! Keeps the working set in memory and snapshots it to a JSON file after
//! every mutation. Intended for single-user deployments where a database
//! server is overkill; the snapshot is small (a vocabulary collection, not
//! a dataset) so rewriting it wholesale is fine.

use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::store::CardStore;
use crate::api::CardId;
use crate::db::repository::{CardRepository, RepositoryError, RepositoryResult};
use crate::models::{CardFilter, Flashcard, ReviewOutcome};

/// File-backed implementation of [`CardRepository`].
#[derive(Debug)]
pub struct FileRepository {
    store: RwLock<CardStore>,
    path: PathBuf,
}

impl FileRepository {
    /// Open a repository at `path`, loading the snapshot if one exists.
    ///
    /// A missing file starts an empty store; the file is created on the
    /// first mutation.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let store = if path.exists() {
            let file = File::open(&path)?;
            serde_json::from_reader(file).map_err(|e| {
                RepositoryError::storage(format!(
                    "snapshot {} is not readable: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            CardStore::default()
        };
        Ok(FileRepository {
            store: RwLock::new(store),
            path,
        })
    }

    /// Write the current store to disk. Called with the write lock held so
    /// snapshots observe a consistent state.
    fn persist(&self, store: &CardStore) -> RepositoryResult<()> {
        // Write to a sibling temp file and rename so a crash mid-write
        // cannot truncate the snapshot.
        let tmp = self.path.with_extension("json.tmp");
        let file = File::create(&tmp)?;
        serde_json::to_writer_pretty(file, store)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl CardRepository for FileRepository {
    async fn insert_card(&self, card: &Flashcard) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.insert_card(card)?;
        self.persist(&store)
    }

    async fn insert_cards(&self, cards: &[Flashcard]) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        let inserted = store.insert_cards(cards)?;
        self.persist(&store)?;
        Ok(inserted)
    }

    async fn fetch_card(&self, id: CardId) -> RepositoryResult<Flashcard> {
        self.store.read().fetch_card(id)
    }

    async fn update_scheduling(
        &self,
        id: CardId,
        outcome: &ReviewOutcome,
    ) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.update_scheduling(id, outcome)?;
        self.persist(&store)
    }

    async fn delete_card(&self, id: CardId) -> RepositoryResult<bool> {
        let mut store = self.store.write();
        let deleted = store.delete_card(id);
        if deleted {
            self.persist(&store)?;
        }
        Ok(deleted)
    }

    async fn list_cards(&self, filter: &CardFilter) -> RepositoryResult<Vec<Flashcard>> {
        Ok(self.store.read().list_cards(filter))
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.store.read().list_categories())
    }

    async fn create_category(&self, name: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        store.create_category(name)?;
        self.persist(&store)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        // The store is healthy if the snapshot directory is still writable.
        match self.path.parent() {
            Some(dir) => Ok(dir.exists()),
            None => Ok(true),
        }
    }
}
