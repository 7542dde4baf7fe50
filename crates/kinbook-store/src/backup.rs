use crate::db;
use crate::error::{Result, StoreError};
use crate::paths;
use rusqlite::backup::Backup;
use rusqlite::Connection;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PAGES_PER_STEP: i32 = 200;
const PAUSE_BETWEEN_STEPS: Duration = Duration::from_millis(25);
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// Copies the live database to `path` with SQLite's online backup.
pub fn backup_to(conn: &Connection, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let target = backup_target(conn, path)?;
    let mut dest = Connection::open(&target)?;
    Backup::new(conn, &mut dest)?.run_to_completion(PAGES_PER_STEP, PAUSE_BETWEEN_STEPS, None)?;
    db::restrict_to_owner(&target)?;
    Ok(())
}

/// Resolves `path` and refuses the database file itself or any of its
/// journal files.
fn backup_target(conn: &Connection, path: &Path) -> Result<PathBuf> {
    let target = absolute_path(path)?;
    let Some(live) = live_db_file(conn)? else {
        return Ok(target);
    };
    let live = absolute_path(&live)?;

    let clashes = target == live
        || SIDECAR_SUFFIXES.iter().any(|suffix| {
            let mut sidecar = OsString::from(live.as_os_str());
            sidecar.push(suffix);
            target.as_os_str() == sidecar
        });
    if clashes {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    Ok(target)
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::canonicalize(parent)?,
        None => fs::canonicalize(".")?,
    };
    Ok(parent.join(file_name))
}

fn live_db_file(conn: &Connection) -> Result<Option<PathBuf>> {
    let file: Option<String> = conn.query_row(
        "SELECT file FROM pragma_database_list WHERE name = 'main';",
        [],
        |row| row.get(0),
    )?;
    Ok(file.filter(|f| !f.is_empty()).map(PathBuf::from))
}
