//! `PostgreSQL` adapter for user verification records.

mod models;
mod repository;
mod schema;

pub use repository::PostgresUserRepository;
