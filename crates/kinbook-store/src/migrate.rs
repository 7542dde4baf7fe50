use crate::error::{Result, StoreError};
use rusqlite::Connection;

/// Schema steps in order. After step `n` the database is at version `n`,
/// recorded in SQLite's `user_version` header field.
const STEPS: &[&str] = &[include_str!("../migrations/001_init.sql")];

pub fn latest_version() -> i64 {
    STEPS.len() as i64
}

/// Brings the schema up to [`latest_version`] in a single transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    let applied = applied_steps(schema_version(&tx)?)?;

    for (offset, sql) in STEPS.iter().enumerate().skip(applied) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", (offset + 1) as i64)?;
    }

    tx.commit()?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i64> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

fn applied_steps(version: i64) -> Result<usize> {
    usize::try_from(version)
        .ok()
        .filter(|steps| *steps <= STEPS.len())
        .ok_or_else(|| {
            StoreError::Migration(format!(
                "unsupported schema version {version} (this build knows 0..={})",
                latest_version()
            ))
        })
}
