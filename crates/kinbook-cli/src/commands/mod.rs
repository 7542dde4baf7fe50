use anyhow::Result;
use kinbook_config::AppConfig;
use kinbook_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod birthdays;
pub mod completions;
pub mod contacts;
pub mod dispatch;
pub mod session;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
