pub mod create;
pub mod read_by_id;
pub mod read_with_params;
pub mod resources;
pub mod transform;
