pub mod favorite_sources;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::db::favorite_source::FavoriteSourceRepository;
use crate::services::{FavoriteSourceCommandService, FavoriteSourceQueryService};

pub const FAVORITE_SOURCES_PATH: &str = "/api/v1/favorite-sources";

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub command_service: Arc<FavoriteSourceCommandService>,
    pub query_service: Arc<FavoriteSourceQueryService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FavoriteSourceRepository>) -> Self {
        Self {
            command_service: Arc::new(FavoriteSourceCommandService::new(repository.clone())),
            query_service: Arc::new(FavoriteSourceQueryService::new(repository)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            FAVORITE_SOURCES_PATH,
            get(favorite_sources::read_with_params::index::handler)
                .post(favorite_sources::create::index::handler),
        )
        .route(
            &format!("{FAVORITE_SOURCES_PATH}/{{id}}"),
            get(favorite_sources::read_by_id::index::handler),
        )
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
