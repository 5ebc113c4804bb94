use std::collections::HashMap;

use axum::{
	extract::{Extension, Json, Query},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::db::favorite_source::RepositoryError;
use crate::domain::{
	GetAllFavoriteSourcesByOwnerKeyQuery, GetFavoriteSourceByOwnerKeyAndSourceIdQuery,
	InvalidInputError,
};
use crate::endpoints::favorite_sources::{resources::FavoriteSourceResource, transform::resource_from_entity};
use crate::endpoints::AppState;

const OWNER_KEY_PARAMS: [&str; 2] = ["ownerKey", "newsApiKey"];
const SOURCE_ID_PARAM: &str = "sourceId";

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("MissingOwnerKey")]
	MissingOwnerKey,
	#[error("InvalidInput: {source}")]
	InvalidInput {
		#[from]
		source: InvalidInputError,
	},
	#[error("FavoriteSourcesNotFound")]
	NotFound,
	#[error("GetFavoriteSources: {source}")]
	GetFavoriteSources {
		#[from]
		source: RepositoryError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> Response {
		match self {
			HandlerError::MissingOwnerKey => StatusCode::BAD_REQUEST.into_response(),
			HandlerError::InvalidInput { source } => {
				warn!(%source, "rejected favorite source query");
				StatusCode::BAD_REQUEST.into_response()
			}
			HandlerError::NotFound => StatusCode::NOT_FOUND.into_response(),
			HandlerError::GetFavoriteSources { source } => {
				error!(%source, "failed to read favorite sources");
				(StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
			}
		}
	}
}

/// Axum handler: GET /api/v1/favorite-sources?ownerKey=..[&sourceId=..]
///
/// Owner key and source id together select one record, the owner key alone
/// selects the owner's list. Anything else is a bad request.
pub async fn handler(
	Extension(state): Extension<AppState>,
	Query(mut params): Query<HashMap<String, String>>,
) -> Result<Response, HandlerError> {
	let owner_key = OWNER_KEY_PARAMS
		.iter()
		.find_map(|name| params.remove(*name))
		.ok_or(HandlerError::MissingOwnerKey)?;

	match params.remove(SOURCE_ID_PARAM) {
		Some(source_id) => {
			let resource = get_by_owner_key_and_source_id(&state, owner_key, source_id)?;
			Ok((StatusCode::OK, Json(resource)).into_response())
		}
		None => {
			let resources = get_all_by_owner_key(&state, owner_key)?;
			Ok((StatusCode::OK, Json(resources)).into_response())
		}
	}
}

fn get_all_by_owner_key(
	state: &AppState,
	owner_key: String,
) -> Result<Vec<FavoriteSourceResource>, HandlerError> {
	let query = GetAllFavoriteSourcesByOwnerKeyQuery::new(owner_key)?;
	let favorite_sources = state.query_service.get_all_by_owner_key(&query)?;
	if favorite_sources.is_empty() {
		return Err(HandlerError::NotFound);
	}
	Ok(favorite_sources.iter().map(resource_from_entity).collect())
}

fn get_by_owner_key_and_source_id(
	state: &AppState,
	owner_key: String,
	source_id: String,
) -> Result<FavoriteSourceResource, HandlerError> {
	let query = GetFavoriteSourceByOwnerKeyAndSourceIdQuery::new(owner_key, source_id)?;
	state
		.query_service
		.get_by_owner_key_and_source_id(&query)?
		.map(|favorite_source| resource_from_entity(&favorite_source))
		.ok_or(HandlerError::NotFound)
}
