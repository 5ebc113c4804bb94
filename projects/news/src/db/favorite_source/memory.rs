//! In-process repository for tests and database-less runs.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::CreateFavoriteSourceCommand;

use super::models::{FavoriteSource, NewFavoriteSource};
use super::repository::{FavoriteSourceRepository, RepositoryError};

struct InMemoryState {
    /// Rows in insertion order, which is also ascending id order.
    rows: Vec<FavoriteSource>,
    next_id: i64,
}

pub struct InMemoryFavoriteSourceRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryFavoriteSourceRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(InMemoryState {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        // Poisoning is ignored: every mutation completes before the guard drops.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryFavoriteSourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteSourceRepository for InMemoryFavoriteSourceRepository {
    fn insert(&self, command: &CreateFavoriteSourceCommand) -> Result<FavoriteSource, RepositoryError> {
        let new = NewFavoriteSource::from_command(command, Utc::now().naive_utc());
        let mut state = self.lock();
        let row = FavoriteSource {
            id: state.next_id,
            owner_key: new.owner_key.to_string(),
            source_id: new.source_id.to_string(),
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.next_id += 1;
        state.rows.push(row.clone());
        Ok(row)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, RepositoryError> {
        Ok(self.lock().rows.iter().find(|row| row.id == id).cloned())
    }

    fn find_all_by_owner_key(&self, owner_key: &str) -> Result<Vec<FavoriteSource>, RepositoryError> {
        Ok(self
            .lock()
            .rows
            .iter()
            .filter(|row| row.owner_key == owner_key)
            .cloned()
            .collect())
    }

    fn find_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<Option<FavoriteSource>, RepositoryError> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|row| row.owner_key == owner_key && row.source_id == source_id)
            .cloned())
    }

    fn exists_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .lock()
            .rows
            .iter()
            .any(|row| row.owner_key == owner_key && row.source_id == source_id))
    }
}
