use diesel::prelude::*;
use thiserror::Error;
use crate::db::{favorite_source::models::*, schema::favorite_sources::dsl::*};

#[derive(Debug, Error)]
pub enum InsertFavoriteSourceError {
    #[error("InsertFavoriteSource: {source}")]
    InsertFavoriteSource {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_favorite_source(
    conn: &mut PgConnection,
    new: &NewFavoriteSource,
) -> Result<FavoriteSource, InsertFavoriteSourceError> {
    diesel::insert_into(favorite_sources)
        .values(new)
        .returning(FavoriteSource::as_returning())
        .get_result(conn)
        .map_err(|source| InsertFavoriteSourceError::InsertFavoriteSource { source })
}

#[derive(Debug, Error)]
pub enum GetFavoriteSourceByIdError {
    #[error("GetFavoriteSourceById: {source}")]
    GetFavoriteSourceById {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_favorite_source_by_id(
    conn: &mut PgConnection,
    id_val: i64,
) -> Result<Option<FavoriteSource>, GetFavoriteSourceByIdError> {
    favorite_sources
        .find(id_val)
        .select(FavoriteSource::as_select())
        .first(conn)
        .optional()
        .map_err(|source| GetFavoriteSourceByIdError::GetFavoriteSourceById { source })
}

#[derive(Debug, Error)]
pub enum GetFavoriteSourcesByOwnerKeyError {
    #[error("GetFavoriteSourcesByOwnerKey: {source}")]
    GetFavoriteSourcesByOwnerKey {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_favorite_sources_by_owner_key(
    conn: &mut PgConnection,
    owner_key_val: &str,
) -> Result<Vec<FavoriteSource>, GetFavoriteSourcesByOwnerKeyError> {
    favorite_sources
        .filter(owner_key.eq(owner_key_val))
        .order_by(id.asc())
        .select(FavoriteSource::as_select())
        .load(conn)
        .map_err(|source| GetFavoriteSourcesByOwnerKeyError::GetFavoriteSourcesByOwnerKey { source })
}

#[derive(Debug, Error)]
pub enum GetFavoriteSourceByOwnerKeyAndSourceIdError {
    #[error("GetFavoriteSourceByOwnerKeyAndSourceId: {source}")]
    GetFavoriteSourceByOwnerKeyAndSourceId {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_favorite_source_by_owner_key_and_source_id(
    conn: &mut PgConnection,
    owner_key_val: &str,
    source_id_val: &str,
) -> Result<Option<FavoriteSource>, GetFavoriteSourceByOwnerKeyAndSourceIdError> {
    favorite_sources
        .filter(owner_key.eq(owner_key_val))
        .filter(source_id.eq(source_id_val))
        .order_by(id.asc())
        .select(FavoriteSource::as_select())
        .first(conn)
        .optional()
        .map_err(|source| {
            GetFavoriteSourceByOwnerKeyAndSourceIdError::GetFavoriteSourceByOwnerKeyAndSourceId { source }
        })
}

#[derive(Debug, Error)]
pub enum ExistsFavoriteSourceError {
    #[error("ExistsFavoriteSource: {source}")]
    ExistsFavoriteSource {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn exists_favorite_source_by_owner_key_and_source_id(
    conn: &mut PgConnection,
    owner_key_val: &str,
    source_id_val: &str,
) -> Result<bool, ExistsFavoriteSourceError> {
    diesel::select(diesel::dsl::exists(
        favorite_sources
            .filter(owner_key.eq(owner_key_val))
            .filter(source_id.eq(source_id_val)),
    ))
    .get_result(conn)
    .map_err(|source| ExistsFavoriteSourceError::ExistsFavoriteSource { source })
}
