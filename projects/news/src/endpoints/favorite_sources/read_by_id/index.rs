use axum::{
	extract::{rejection::PathRejection, Extension, Json, Path},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::db::favorite_source::RepositoryError;
use crate::domain::GetFavoriteSourceByIdQuery;
use crate::endpoints::favorite_sources::transform::resource_from_entity;
use crate::endpoints::AppState;

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("InvalidId: {source}")]
	InvalidId {
		#[from]
		source: PathRejection,
	},
	#[error("FavoriteSourceNotFound: {id}")]
	NotFound { id: i64 },
	#[error("GetFavoriteSourceById: {source}")]
	GetFavoriteSourceById {
		#[from]
		source: RepositoryError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> Response {
		match self {
			HandlerError::InvalidId { source } => {
				warn!(%source, "rejected favorite source id");
				StatusCode::BAD_REQUEST.into_response()
			}
			HandlerError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
			HandlerError::GetFavoriteSourceById { source } => {
				error!(%source, "failed to read favorite source");
				(StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
			}
		}
	}
}

/// Axum handler: GET /api/v1/favorite-sources/{id}
pub async fn handler(
	Extension(state): Extension<AppState>,
	id: Result<Path<i64>, PathRejection>,
) -> Result<Response, HandlerError> {
	let Path(id) = id?;
	let favorite_source = state
		.query_service
		.get_by_id(&GetFavoriteSourceByIdQuery::new(id))?
		.ok_or(HandlerError::NotFound { id })?;

	Ok((StatusCode::OK, Json(resource_from_entity(&favorite_source))).into_response())
}
