//! Shared world state for wizard and account verification scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskmatrix::{
    board::{Notification, TaskBoard},
    identity::{
        adapters::memory::{InMemorySessionStore, InMemoryUserRepository},
        domain::{SessionToken, SignInDecision, UserId},
        services::IdentityService,
    },
    task::{adapters::memory::InMemoryTaskRepository, services::TaskMutationService},
    wizard::TaskWizard,
};

/// Identity service type used by the BDD world.
pub type TestIdentityService =
    IdentityService<InMemorySessionStore, InMemoryUserRepository, DefaultClock>;

/// Mutation service type used by the BDD world.
pub type TestMutationService =
    TaskMutationService<InMemoryTaskRepository, TestIdentityService, DefaultClock>;

/// Scenario world wiring the full in-memory stack.
pub struct WizardWorld {
    pub sessions: InMemorySessionStore,
    pub users: InMemoryUserRepository,
    pub tasks: InMemoryTaskRepository,
    pub identity: Arc<TestIdentityService>,
    pub session: SessionToken,
    pub user_id: UserId,
    pub board: TaskBoard<TestMutationService>,
    pub wizard: TaskWizard,
    pub last_notification: Option<Notification>,
    pub last_decision: Option<SignInDecision>,
    pub first_verified_at: Option<DateTime<Utc>>,
}

impl WizardWorld {
    /// Creates a world with nobody signed in.
    ///
    /// # Panics
    ///
    /// Panics if the fixed scenario session token is rejected.
    #[must_use]
    pub fn new() -> Self {
        let sessions = InMemorySessionStore::new();
        let users = InMemoryUserRepository::new();
        let tasks = InMemoryTaskRepository::new();
        let identity = Arc::new(IdentityService::new(
            Arc::new(sessions.clone()),
            Arc::new(users.clone()),
            Arc::new(DefaultClock),
        ));
        let service = Arc::new(TaskMutationService::new(
            Arc::new(tasks.clone()),
            Arc::clone(&identity),
            Arc::new(DefaultClock),
        ));
        let session = SessionToken::new("scenario-session").unwrap_or_else(|err| {
            panic!("scenario session token should be valid: {err}");
        });
        let board = TaskBoard::new(service, session.clone());
        Self {
            sessions,
            users,
            tasks,
            identity,
            session,
            user_id: UserId::new(),
            board,
            wizard: TaskWizard::new(),
            last_notification: None,
            last_decision: None,
            first_verified_at: None,
        }
    }
}

impl Default for WizardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WizardWorld {
    WizardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a scenario "yes"/"no" answer.
///
/// # Errors
///
/// Returns an error for any other text.
pub fn parse_answer(answer: &str) -> Result<bool, eyre::Report> {
    match answer {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(eyre::eyre!("expected yes or no, got {other}")),
    }
}
