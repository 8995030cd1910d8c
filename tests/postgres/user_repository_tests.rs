//! User verification records against `PostgreSQL`.

use chrono::{Duration, DurationRound, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskmatrix::identity::{
    adapters::{memory::InMemorySessionStore, postgres::PostgresUserRepository},
    domain::UserId,
    ports::{UserRepository, UserRepositoryError},
    services::IdentityService,
};

use crate::postgres::helpers::{BoxError, PreparedDatabase, prepared_database, seed_user};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_verification_keeps_first_timestamp(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let user_id = seed_user(&prepared.pool, false).await?;
    let repository = PostgresUserRepository::new(prepared.pool.clone());
    // Postgres keeps microseconds.
    let first = (Utc::now() - Duration::days(1)).duration_trunc(Duration::microseconds(1))?;

    let stored_first = repository.update_email_verified(user_id, first).await?;
    let stored_second = repository
        .update_email_verified(user_id, first + Duration::hours(3))
        .await?;
    let account = repository
        .find_by_id(user_id)
        .await?
        .expect("seeded user should exist");

    assert_eq!(stored_first, first);
    assert_eq!(stored_second, first);
    assert_eq!(account.email_verified(), Some(first));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verifying_missing_user_is_not_found(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let repository = PostgresUserRepository::new(prepared.pool.clone());
    let user_id = UserId::new();

    let result = repository.update_email_verified(user_id, Utc::now()).await;

    assert!(matches!(result, Err(UserRepositoryError::NotFound(id)) if id == user_id));
    assert!(repository.find_by_id(user_id).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_link_returns_timestamp_already_in_store(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let user_id = seed_user(&prepared.pool, true).await?;
    let users = Arc::new(PostgresUserRepository::new(prepared.pool.clone()));
    let stored = users
        .find_by_id(user_id)
        .await?
        .and_then(|account| account.email_verified())
        .expect("seeded user should be verified");
    let service = IdentityService::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::clone(&users),
        Arc::new(DefaultClock),
    );

    let linked = service.on_account_linked(user_id).await?;

    assert_eq!(linked.email_verified(), Some(stored));
    Ok(())
}
