use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use kinbook_store::error::StoreError;
use kinbook_store::paths;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BackupReport {
    output: String,
    size_bytes: u64,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs) -> Result<()> {
    let out = match args.out {
        Some(path) => path,
        None => paths::backup_path()?,
    };

    match ctx.store.backup_to(&out) {
        Ok(()) => {}
        Err(StoreError::InvalidBackupPath(_)) => {
            return Err(invalid_input(format!(
                "backup path clashes with the live database: {}",
                out.display()
            )));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("backup database to {}", out.display()))
        }
    }

    let size_bytes = fs::metadata(&out)
        .with_context(|| format!("stat backup file {}", out.display()))?
        .len();

    if ctx.json {
        return print_json(&BackupReport {
            output: out.display().to_string(),
            size_bytes,
        });
    }

    println!("Backup written to {}", out.display());
    Ok(())
}
