//! Store selection from [`StoreConfig`].
//!
//! `STORAGE_MODE` picks the task and user stores: in-memory maps or the
//! Diesel adapters over a shared pool. Sessions always live in memory; the
//! authentication provider owns their persistence.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, StorageMode, StoreConfig};
use crate::identity::{
    adapters::{
        memory::{InMemorySessionStore, InMemoryUserRepository},
        postgres::PostgresUserRepository,
    },
    ports::UserRepository,
    services::IdentityService,
};
use crate::postgres::{PgPool, PoolBuildError, build_pool};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskMutationService,
};

/// Identity service over whichever user store the factory selected.
pub type StoreIdentityService<C> = IdentityService<InMemorySessionStore, dyn UserRepository, C>;

/// Task mutation service over whichever stores the factory selected.
pub type StoreMutationService<C> =
    TaskMutationService<dyn TaskRepository, StoreIdentityService<C>, C>;

/// Errors raised while building stores.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The environment holds an invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// The `PostgreSQL` pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolBuildError),
}

/// The stores selected for one process.
#[derive(Clone)]
pub struct Stores {
    /// Owner-scoped task persistence.
    pub tasks: Arc<dyn TaskRepository>,
    /// User verification records.
    pub users: Arc<dyn UserRepository>,
    /// Session bindings.
    pub sessions: Arc<InMemorySessionStore>,
}

impl fmt::Debug for Stores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stores")
            .field("tasks", &"Arc<dyn TaskRepository>")
            .field("users", &"Arc<dyn UserRepository>")
            .field("sessions", &self.sessions)
            .finish()
    }
}

impl Stores {
    /// Wires the identity and task mutation services over these stores.
    #[must_use]
    pub fn into_services<C>(
        self,
        clock: Arc<C>,
    ) -> (Arc<StoreIdentityService<C>>, StoreMutationService<C>)
    where
        C: Clock + Send + Sync,
    {
        let identity = Arc::new(IdentityService::new(
            self.sessions,
            self.users,
            Arc::clone(&clock),
        ));
        let mutation = TaskMutationService::new(self.tasks, Arc::clone(&identity), clock);
        (identity, mutation)
    }
}

/// Builds [`Stores`] for the configured storage mode.
#[derive(Debug, Clone)]
pub struct StoreFactory {
    config: StoreConfig,
}

impl StoreFactory {
    /// Creates a factory for the given configuration.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Creates a factory from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Configuration`] when the environment is invalid.
    pub fn from_env() -> Result<Self, FactoryError> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    /// Returns the configuration this factory builds from.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Builds the stores.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Pool`] when `postgres` mode cannot open its
    /// connection pool.
    pub fn create(&self) -> Result<Stores, FactoryError> {
        let mode = self.config.storage_mode();
        let stores = match mode {
            StorageMode::InMemory => Self::in_memory_stores(),
            StorageMode::Postgres => Self::postgres_stores(build_pool(&self.config)?),
        };
        info!(%mode, "stores initialised");
        Ok(stores)
    }

    fn in_memory_stores() -> Stores {
        Stores {
            tasks: Arc::new(InMemoryTaskRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }

    fn postgres_stores(pool: PgPool) -> Stores {
        Stores {
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool)),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}
