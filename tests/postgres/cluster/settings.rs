//! Port selection and settings reconciliation for the embedded cluster.

use super::BoxError;
use super::worker::{locate_pg_worker_path, prepare_pg_worker};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use pg_embedded_setup_unpriv::{ExecutionPrivileges, detect_execution_privileges};
use postgresql_embedded::Settings;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::net::TcpListener;

/// Line of `postmaster.pid` that holds the listening port.
const PID_FILE_PORT_LINE: usize = 3;

/// Environment overrides needed before bootstrapping the cluster.
///
/// Picks a free `PG_PORT` unless one is set and, when running as root,
/// points `PG_EMBEDDED_WORKER` at a prepared worker.
pub(super) fn bootstrap_env_changes() -> Result<Vec<(OsString, Option<OsString>)>, BoxError> {
    let mut changes = Vec::new();
    if std::env::var_os("PG_PORT").is_none() {
        changes.push((OsString::from("PG_PORT"), Some(OsString::from(free_port()?))));
    }

    let needs_worker = matches!(detect_execution_privileges(), ExecutionPrivileges::Root)
        && std::env::var_os("PG_EMBEDDED_WORKER").is_none();
    if needs_worker {
        let worker = locate_pg_worker_path().ok_or_else(|| {
            Box::new(std::io::Error::new(
                ErrorKind::NotFound,
                "running as root needs PG_EMBEDDED_WORKER or a pg_worker binary on PATH",
            )) as BoxError
        })?;
        let prepared = prepare_pg_worker(&worker)?;
        changes.push((
            OsString::from("PG_EMBEDDED_WORKER"),
            Some(OsString::from(prepared.as_str())),
        ));
    }
    Ok(changes)
}

pub(super) fn to_os_pairs(vars: &[(String, Option<String>)]) -> Vec<(OsString, Option<OsString>)> {
    vars.iter()
        .map(|(key, value)| (OsString::from(key), value.as_ref().map(OsString::from)))
        .collect()
}

/// Replaces the configured password with the one bootstrap wrote to disk.
pub(super) fn load_password(settings: &mut Settings) -> Result<(), BoxError> {
    let path = settings.password_file.to_string_lossy().into_owned();
    let Some(contents) = read_optional(Utf8Path::new(&path))? else {
        return Ok(());
    };
    let password = contents.trim_end();
    if !password.is_empty() {
        password.clone_into(&mut settings.password);
    }
    Ok(())
}

/// Adopts the port the running server actually bound.
pub(super) fn adopt_running_port(settings: &mut Settings) -> Result<(), BoxError> {
    let data_dir = settings.data_dir.to_string_lossy().into_owned();
    let pid_file = Utf8Path::new(&data_dir).join("postmaster.pid");
    let Some(contents) = read_optional(&pid_file)? else {
        return Ok(());
    };
    if let Some(port) = contents
        .lines()
        .nth(PID_FILE_PORT_LINE)
        .and_then(|line| line.trim().parse::<u16>().ok())
    {
        settings.port = port;
    }
    Ok(())
}

pub(super) fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), BoxError> {
    let name = path.file_name().ok_or_else(|| {
        Box::new(std::io::Error::other(format!("{path} has no file name"))) as BoxError
    })?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok((dir, name))
}

fn read_optional(path: &Utf8Path) -> Result<Option<String>, BoxError> {
    let (dir, name) = match open_parent(path) {
        Ok(found) => found,
        Err(err) if is_not_found(err.as_ref()) => return Ok(None),
        Err(err) => return Err(err),
    };
    match dir.read_to_string(name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Box::new(err)),
    }
}

fn is_not_found(err: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

fn free_port() -> Result<String, BoxError> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).map_err(|err| Box::new(err) as BoxError)?;
    let port = listener
        .local_addr()
        .map_err(|err| Box::new(err) as BoxError)?
        .port();
    Ok(port.to_string())
}
