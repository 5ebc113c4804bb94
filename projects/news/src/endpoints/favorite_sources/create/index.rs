use axum::{
	extract::{rejection::JsonRejection, Extension, Json},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::db::favorite_source::RepositoryError;
use crate::domain::InvalidInputError;
use crate::endpoints::favorite_sources::{
	resources::CreateFavoriteSourceResource,
	transform::{command_from_resource, resource_from_entity},
};
use crate::endpoints::AppState;

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("InvalidBody: {source}")]
	InvalidBody {
		#[from]
		source: JsonRejection,
	},
	#[error("InvalidInput: {source}")]
	InvalidInput {
		#[from]
		source: InvalidInputError,
	},
	#[error("FavoriteSourceAlreadyExists")]
	AlreadyExists,
	#[error("CreateFavoriteSource: {source}")]
	CreateFavoriteSource {
		#[from]
		source: RepositoryError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> Response {
		match self {
			HandlerError::InvalidBody { source } => {
				warn!(%source, "rejected favorite source body");
				StatusCode::BAD_REQUEST.into_response()
			}
			HandlerError::InvalidInput { source } => {
				warn!(%source, "rejected favorite source");
				StatusCode::BAD_REQUEST.into_response()
			}
			HandlerError::AlreadyExists => StatusCode::BAD_REQUEST.into_response(),
			HandlerError::CreateFavoriteSource { source } => {
				error!(%source, "failed to create favorite source");
				(StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
			}
		}
	}
}

/// Axum handler: POST /api/v1/favorite-sources
pub async fn handler(
	Extension(state): Extension<AppState>,
	payload: Result<Json<CreateFavoriteSourceResource>, JsonRejection>,
) -> Result<Response, HandlerError> {
	let Json(input) = payload?;
	let command = command_from_resource(input)?;

	let favorite_source = state
		.command_service
		.handle(&command)?
		.ok_or(HandlerError::AlreadyExists)?;

	Ok((StatusCode::CREATED, Json(resource_from_entity(&favorite_source))).into_response())
}
