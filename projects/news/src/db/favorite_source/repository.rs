use chrono::Utc;
use thiserror::Error;

use crate::db::PgPool;
use crate::domain::CreateFavoriteSourceCommand;

use super::models::{FavoriteSource, NewFavoriteSource};
use super::queries::{self, *};

/// Persistence gateway for favorite sources.
///
/// Implementations own timestamp assignment: `insert` stamps `created_at`
/// and `updated_at` itself.
pub trait FavoriteSourceRepository: Send + Sync {
    fn insert(&self, command: &CreateFavoriteSourceCommand) -> Result<FavoriteSource, RepositoryError>;

    fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, RepositoryError>;

    fn find_all_by_owner_key(&self, owner_key: &str) -> Result<Vec<FavoriteSource>, RepositoryError>;

    fn find_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<Option<FavoriteSource>, RepositoryError>;

    fn exists_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<bool, RepositoryError>;
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error(transparent)]
    Insert {
        #[from]
        source: InsertFavoriteSourceError,
    },
    #[error(transparent)]
    GetById {
        #[from]
        source: GetFavoriteSourceByIdError,
    },
    #[error(transparent)]
    GetByOwnerKey {
        #[from]
        source: GetFavoriteSourcesByOwnerKeyError,
    },
    #[error(transparent)]
    GetByOwnerKeyAndSourceId {
        #[from]
        source: GetFavoriteSourceByOwnerKeyAndSourceIdError,
    },
    #[error(transparent)]
    Exists {
        #[from]
        source: ExistsFavoriteSourceError,
    },
}

/// Postgres-backed repository; every call checks a connection out of the pool.
#[derive(Clone)]
pub struct PgFavoriteSourceRepository {
    pool: PgPool,
}

impl PgFavoriteSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FavoriteSourceRepository for PgFavoriteSourceRepository {
    fn insert(&self, command: &CreateFavoriteSourceCommand) -> Result<FavoriteSource, RepositoryError> {
        let mut conn = self.pool.get()?;
        let new = NewFavoriteSource::from_command(command, Utc::now().naive_utc());
        Ok(queries::insert_favorite_source(&mut conn, &new)?)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<FavoriteSource>, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(queries::get_favorite_source_by_id(&mut conn, id)?)
    }

    fn find_all_by_owner_key(&self, owner_key: &str) -> Result<Vec<FavoriteSource>, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(queries::get_favorite_sources_by_owner_key(&mut conn, owner_key)?)
    }

    fn find_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<Option<FavoriteSource>, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(queries::get_favorite_source_by_owner_key_and_source_id(
            &mut conn, owner_key, source_id,
        )?)
    }

    fn exists_by_owner_key_and_source_id(
        &self,
        owner_key: &str,
        source_id: &str,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(queries::exists_favorite_source_by_owner_key_and_source_id(
            &mut conn, owner_key, source_id,
        )?)
    }
}
