//! `postgres` storage mode wired through the store factory.

use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskmatrix::config::{StorageMode, StoreConfig};
use taskmatrix::factory::StoreFactory;
use taskmatrix::identity::domain::SessionToken;
use taskmatrix::task::domain::{Priority, TaskDraft};

use crate::postgres::helpers::{BoxError, PreparedDatabase, prepared_database, seed_user};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_mode_persists_through_factory_stores(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let owner = seed_user(&prepared.pool, false).await?;
    let factory = StoreFactory::new(StoreConfig::postgres(prepared.database.url()).with_pool_size(1));
    assert_eq!(factory.config().storage_mode(), StorageMode::Postgres);

    let stores = tokio::task::spawn_blocking(move || factory.create()).await??;
    let sessions = Arc::clone(&stores.sessions);
    let users = Arc::clone(&stores.users);
    let (identity, service) = stores.into_services(Arc::new(DefaultClock));
    let token = SessionToken::new("postgres-factory")?;
    sessions.sign_in(token.clone(), owner)?;

    service
        .create(&TaskDraft::new("Book dentist", Priority::Urgent, false), &token)
        .await?;
    let linked = identity.on_account_linked(owner).await?;

    let tasks = service.list_tasks(&token).await?;
    assert_eq!(tasks.len(), 1);
    assert!(tasks.iter().all(|task| task.owner_id() == owner));
    let stored = users.find_by_id(owner).await?.expect("owner row should exist");
    assert_eq!(stored.email_verified(), linked.email_verified());
    Ok(())
}
