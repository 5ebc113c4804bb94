pub mod commands;
pub mod errors;
pub mod queries;

pub use commands::CreateFavoriteSourceCommand;
pub use errors::InvalidInputError;
pub use queries::{
    GetAllFavoriteSourcesByOwnerKeyQuery, GetFavoriteSourceByIdQuery,
    GetFavoriteSourceByOwnerKeyAndSourceIdQuery,
};
