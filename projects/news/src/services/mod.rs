pub mod command_service;
pub mod query_service;

pub use command_service::FavoriteSourceCommandService;
pub use query_service::FavoriteSourceQueryService;
