//! Session identity resolution and account verification.
//!
//! Translates opaque session tokens into stable user identifiers, marks
//! accounts verified when a third-party sign-in is linked, and gates
//! credentials-based sign-in on that verification. The module follows the
//! same hexagonal layout as the task context:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
