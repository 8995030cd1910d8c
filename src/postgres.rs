//! Shared `PostgreSQL` connection pooling for the Diesel adapters.

use crate::config::StoreConfig;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by the task and identity adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while building the connection pool.
#[derive(Debug, Error)]
pub enum PoolBuildError {
    /// The configuration does not name a database.
    #[error("postgres storage requires DATABASE_URL")]
    MissingDatabaseUrl,
    /// The pool could not open its initial connections.
    #[error("failed to build postgres pool: {0}")]
    Pool(#[from] PoolError),
}

/// Builds a connection pool from store configuration.
///
/// # Errors
///
/// Returns [`PoolBuildError::MissingDatabaseUrl`] when no URL is configured,
/// or [`PoolBuildError::Pool`] when the initial connections fail.
pub fn build_pool(config: &StoreConfig) -> Result<PgPool, PoolBuildError> {
    let url = config
        .database_url()
        .ok_or(PoolBuildError::MissingDatabaseUrl)?;
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(config.pool_size())
        .connection_timeout(config.connection_timeout())
        .build(manager)?;
    Ok(pool)
}
