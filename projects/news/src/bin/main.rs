use std::sync::Arc;

use projects_news::config::{Config, ConfigError};
use projects_news::db::{
	build_pool,
	favorite_source::{FavoriteSourceRepository, InMemoryFavoriteSourceRepository, PgFavoriteSourceRepository},
};
use projects_news::endpoints::{router, AppState};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("LoadConfig: {source}")]
	LoadConfig {
		#[from]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("BuildPool: {source}")]
	BuildPool {
		#[source]
		source: r2d2::Error,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	// A missing .env is fine; the real environment is used as is.
	dotenvy::dotenv().ok();

	let config = Config::from_env()?;

	utils_trace::init(&config.log_level)
		.map_err(|source| MainError::TracingInit { source })?;

	let repository: Arc<dyn FavoriteSourceRepository> = match &config.database_url {
		Some(database_url) => {
			let pool = build_pool(
				database_url,
				config.database_pool_size,
				config.database_connect_timeout,
			)
				.map_err(|source| MainError::BuildPool { source })?;
			Arc::new(PgFavoriteSourceRepository::new(pool))
		}
		None => {
			warn!("DATABASE_URL not set, favorite sources are kept in memory");
			Arc::new(InMemoryFavoriteSourceRepository::new())
		}
	};

	let app = router(AppState::new(repository));

	let listener = tokio::net::TcpListener::bind(config.bind_addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", config.bind_addr);

	axum::serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
