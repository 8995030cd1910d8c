//! Owner-scoped task persistence against `PostgreSQL`.

use mockable::DefaultClock;
use rstest::rstest;
use taskmatrix::identity::domain::UserId;
use taskmatrix::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, Priority, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

use crate::postgres::helpers::{BoxError, PreparedDatabase, prepared_database, seed_user};

fn new_task(owner_id: UserId, activity: &str, priority: Priority) -> NewTask {
    let draft = TaskDraft::new(activity, priority, true)
        .validate()
        .expect("draft should validate");
    NewTask::new(owner_id, draft, &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_then_list_returns_owner_tasks_oldest_first(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let owner = seed_user(&prepared.pool, false).await?;
    let other = seed_user(&prepared.pool, false).await?;
    let repository = PostgresTaskRepository::new(prepared.pool.clone());

    let first = repository
        .insert(&new_task(owner, "File taxes", Priority::Urgent))
        .await?;
    let second = repository
        .insert(&new_task(owner, "Call plumber", Priority::Normal))
        .await?;
    repository
        .insert(&new_task(other, "Not mine", Priority::Important))
        .await?;

    let listed = repository.list_by_owner(owner).await?;
    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![first, second]);
    let head = listed.first().expect("first task listed");
    assert_eq!(head.activity().as_str(), "File taxes");
    assert_eq!(head.priority(), Priority::Urgent);
    assert!(head.time_under_5_min());
    assert!(listed.iter().all(|task| task.owner_id() == owner));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_someone_elses_task_fails_like_a_missing_one(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let owner = seed_user(&prepared.pool, false).await?;
    let intruder = seed_user(&prepared.pool, false).await?;
    let repository = PostgresTaskRepository::new(prepared.pool.clone());
    let task_id = repository
        .insert(&new_task(owner, "Renew passport", Priority::Important))
        .await?;
    let missing_id = TaskId::new();

    let foreign = repository.delete_owned(task_id, intruder).await;
    let missing = repository.delete_owned(missing_id, intruder).await;

    assert!(matches!(foreign, Err(TaskRepositoryError::NotFound(id)) if id == task_id));
    assert!(matches!(missing, Err(TaskRepositoryError::NotFound(id)) if id == missing_id));
    assert_eq!(repository.list_by_owner(owner).await?.len(), 1);

    repository.delete_owned(task_id, owner).await?;
    assert!(repository.list_by_owner(owner).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_for_unknown_owner_is_a_persistence_error(
    #[future] prepared_database: Result<PreparedDatabase, BoxError>,
) -> Result<(), BoxError> {
    let prepared = prepared_database.await?;
    let repository = PostgresTaskRepository::new(prepared.pool.clone());

    let result = repository
        .insert(&new_task(UserId::new(), "Orphan", Priority::Normal))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
    Ok(())
}
