//! `PostgreSQL` repository implementation for user verification records.

use super::{models::UserRow, schema::users};
use crate::identity::{
    domain::{UserAccount, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use crate::postgres::PgPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<UserAccount>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(row.map(row_to_account))
        })
        .await
    }

    async fn update_email_verified(
        &self,
        id: UserId,
        verified_at: DateTime<Utc>,
    ) -> UserRepositoryResult<DateTime<Utc>> {
        self.run_blocking(move |connection| {
            // The IS NULL filter keeps the first timestamp under concurrent links.
            diesel::update(
                users::table
                    .filter(users::id.eq(id.into_inner()))
                    .filter(users::email_verified.is_null()),
            )
            .set(users::email_verified.eq(Some(verified_at)))
            .execute(connection)
            .map_err(UserRepositoryError::persistence)?;

            users::table
                .filter(users::id.eq(id.into_inner()))
                .select(users::email_verified)
                .first::<Option<DateTime<Utc>>>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?
                .ok_or(UserRepositoryError::NotFound(id))?
                .ok_or_else(|| {
                    UserRepositoryError::persistence(std::io::Error::other(
                        "verification timestamp missing after update",
                    ))
                })
        })
        .await
    }
}

fn row_to_account(row: UserRow) -> UserAccount {
    let id = UserId::from_uuid(row.id);
    row.email_verified.map_or_else(
        || UserAccount::new(id),
        |verified_at| UserAccount::new(id).with_email_verified(verified_at),
    )
}
