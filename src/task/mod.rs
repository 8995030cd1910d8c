//! Task prioritisation and ownership-gated mutation.
//!
//! Tasks are classified Eisenhower-style into a single [`domain::Priority`]
//! from the answers collected by the [`wizard`](crate::wizard), then created
//! and deleted on behalf of the signed-in owner. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
