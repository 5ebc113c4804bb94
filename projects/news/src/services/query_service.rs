use std::sync::Arc;

use crate::db::favorite_source::{FavoriteSource, FavoriteSourceRepository, RepositoryError};
use crate::domain::{
    GetAllFavoriteSourcesByOwnerKeyQuery, GetFavoriteSourceByIdQuery,
    GetFavoriteSourceByOwnerKeyAndSourceIdQuery,
};

/// Read-only lookups. Queries arrive already validated.
pub struct FavoriteSourceQueryService {
    repository: Arc<dyn FavoriteSourceRepository>,
}

impl FavoriteSourceQueryService {
    pub fn new(repository: Arc<dyn FavoriteSourceRepository>) -> Self {
        Self { repository }
    }

    pub fn get_by_id(
        &self,
        query: &GetFavoriteSourceByIdQuery,
    ) -> Result<Option<FavoriteSource>, RepositoryError> {
        self.repository.find_by_id(query.id())
    }

    pub fn get_all_by_owner_key(
        &self,
        query: &GetAllFavoriteSourcesByOwnerKeyQuery,
    ) -> Result<Vec<FavoriteSource>, RepositoryError> {
        self.repository.find_all_by_owner_key(query.owner_key())
    }

    pub fn get_by_owner_key_and_source_id(
        &self,
        query: &GetFavoriteSourceByOwnerKeyAndSourceIdQuery,
    ) -> Result<Option<FavoriteSource>, RepositoryError> {
        self.repository
            .find_by_owner_key_and_source_id(query.owner_key(), query.source_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::favorite_source::InMemoryFavoriteSourceRepository;
    use crate::domain::CreateFavoriteSourceCommand;

    fn seeded() -> FavoriteSourceQueryService {
        let repository = InMemoryFavoriteSourceRepository::new();
        for (owner_key, source_id) in [("abc123", "bbc-news"), ("abc123", "cnn"), ("xyz789", "reuters")] {
            let command = CreateFavoriteSourceCommand::new(owner_key, source_id).unwrap();
            repository.insert(&command).unwrap();
        }
        FavoriteSourceQueryService::new(Arc::new(repository))
    }

    #[test]
    fn get_by_id_is_repeatable() {
        let service = seeded();
        let query = GetFavoriteSourceByIdQuery::new(3);
        let first = service.get_by_id(&query).unwrap();
        let second = service.get_by_id(&query).unwrap();
        assert_eq!(first.as_ref().map(|row| row.source_id.as_str()), Some("reuters"));
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_owner_yields_empty_list() {
        let service = seeded();
        let query = GetAllFavoriteSourcesByOwnerKeyQuery::new("nobody").unwrap();
        assert!(service.get_all_by_owner_key(&query).unwrap().is_empty());
    }

    #[test]
    fn pair_lookup_misses_unknown_source() {
        let service = seeded();
        let query = GetFavoriteSourceByOwnerKeyAndSourceIdQuery::new("abc123", "does-not-exist").unwrap();
        assert_eq!(service.get_by_owner_key_and_source_id(&query).unwrap(), None);
    }
}
