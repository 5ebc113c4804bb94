use std::sync::Arc;

use tracing::{info, warn};

use crate::db::favorite_source::{FavoriteSource, FavoriteSourceRepository, RepositoryError};
use crate::domain::CreateFavoriteSourceCommand;

pub struct FavoriteSourceCommandService {
    repository: Arc<dyn FavoriteSourceRepository>,
}

impl FavoriteSourceCommandService {
    pub fn new(repository: Arc<dyn FavoriteSourceRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new favorite source.
    ///
    /// Returns `Ok(None)` when the owner already has this source saved.
    pub fn handle(
        &self,
        command: &CreateFavoriteSourceCommand,
    ) -> Result<Option<FavoriteSource>, RepositoryError> {
        if self
            .repository
            .exists_by_owner_key_and_source_id(command.owner_key(), command.source_id())?
        {
            warn!(source_id = command.source_id(), "favorite source already exists for owner");
            return Ok(None);
        }

        let favorite_source = self.repository.insert(command)?;
        info!(
            id = favorite_source.id,
            source_id = %favorite_source.source_id,
            "favorite source created"
        );
        Ok(Some(favorite_source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::favorite_source::InMemoryFavoriteSourceRepository;

    #[test]
    fn creates_then_refuses_duplicate() {
        let repository = Arc::new(InMemoryFavoriteSourceRepository::new());
        let service = FavoriteSourceCommandService::new(repository.clone());
        let command = CreateFavoriteSourceCommand::new("abc123", "bbc-news").unwrap();

        let created = service.handle(&command).unwrap().expect("first insert succeeds");
        assert_eq!(created.owner_key, "abc123");
        assert_eq!(created.source_id, "bbc-news");

        assert_eq!(service.handle(&command).unwrap(), None);
        assert_eq!(repository.find_all_by_owner_key("abc123").unwrap().len(), 1);
    }

    #[test]
    fn same_source_for_different_owners_is_allowed() {
        let service = FavoriteSourceCommandService::new(Arc::new(InMemoryFavoriteSourceRepository::new()));
        let first = CreateFavoriteSourceCommand::new("abc123", "bbc-news").unwrap();
        let second = CreateFavoriteSourceCommand::new("xyz789", "bbc-news").unwrap();

        assert!(service.handle(&first).unwrap().is_some());
        assert!(service.handle(&second).unwrap().is_some());
    }
}
