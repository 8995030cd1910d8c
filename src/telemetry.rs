//! Tracing subscriber installation.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("tracing subscriber already installed: {0}")]
pub struct TelemetryInitError(#[from] tracing_subscriber::util::TryInitError);

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` when `RUST_LOG` is unset or invalid.
///
/// # Errors
///
/// Returns [`TelemetryInitError`] when a global subscriber already exists.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
