//! Taskmatrix: Eisenhower-style task prioritisation for signed-in users.
//!
//! Tasks are classified by answering three questions (urgent? important?
//! quick?) and stored per owner. Only the owner can create or delete their
//! tasks, and credentials sign-in is gated on account verification.
//!
//! # Architecture
//!
//! Taskmatrix follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`identity`]: Session resolution, account linking and the sign-in gate
//! - [`task`]: Priority classification and owner-gated task mutation
//! - [`wizard`]: The four-step classification state machine
//! - [`board`]: Task collection view-model and submission boundary
//! - [`config`]: Store configuration from the environment
//! - [`factory`]: Store selection for the configured storage mode
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod factory;
pub mod identity;
pub mod postgres;
pub mod task;
pub mod telemetry;
pub mod wizard;
