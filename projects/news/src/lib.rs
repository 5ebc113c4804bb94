//! Favorite news sources service
//!
//! - REST API endpoints in `endpoints/`
//! - Commands, queries and input validation in `domain/`
//! - Command/query services in `services/`
//! - PostgreSQL models and queries in `db/`
//! - Reads DATABASE_URL (optional), BIND_ADDR and LOG_LEVEL from the env

pub mod config;
pub mod db;
pub mod domain;
pub mod endpoints;
pub mod services;
