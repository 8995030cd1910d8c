//! Process-environment helpers shared by integration tests.

use camino::Utf8PathBuf;
use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Scoped environment override, restored on drop.
///
/// Holds a process-wide lock so concurrent tests never observe each
/// other's overrides.
pub struct EnvVarGuard {
    saved: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies every change; `None` removes the variable.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let saved = changes
            .iter()
            .map(|(key, value)| {
                let previous = env::var_os(key);
                apply(key, value.as_ref());
                (key.clone(), previous)
            })
            .collect();
        Self { saved, _lock: lock }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            apply(&key, value.as_ref());
        }
    }
}

fn apply(key: &OsString, value: Option<&OsString>) {
    unsafe {
        // SAFETY: ENV_MUTEX serialises every environment mutation in tests.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}

/// Finds a `pg_worker` binary for clusters started as root.
///
/// `CARGO_BIN_EXE_pg_worker` wins over a `pg_worker` found on `PATH`.
pub fn locate_pg_worker_path() -> Option<Utf8PathBuf> {
    let from_cargo = env::var_os("CARGO_BIN_EXE_pg_worker")
        .and_then(|path| Utf8PathBuf::try_from(std::path::PathBuf::from(path)).ok())
        .filter(|path| path.is_file());
    from_cargo.or_else(|| {
        let search_path = env::var_os("PATH")?;
        env::split_paths(&search_path)
            .filter_map(|dir| Utf8PathBuf::try_from(dir.join("pg_worker")).ok())
            .find(|candidate| candidate.is_file())
    })
}
