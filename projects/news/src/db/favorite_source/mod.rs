pub mod memory;
pub mod models;
pub mod queries;
pub mod repository;

pub use memory::InMemoryFavoriteSourceRepository;
pub use models::{FavoriteSource, NewFavoriteSource};
pub use repository::{FavoriteSourceRepository, PgFavoriteSourceRepository, RepositoryError};
